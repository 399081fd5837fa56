use crate::core::choice_store::{candidates, ScheduleChoiceStore};
use crate::core::lottery_code;
use crate::core::seat_ledger::{CapacityPolicy, SeatLedger};
use crate::core::slot_catalog::{SeriesSlots, SlotCatalog};
use crate::core::{
    Assignment, ChoiceSource, Edition, Performance, PerformanceDetails, PerformanceSource,
    Program, ProgramEntry, ScheduleChoice, SeriesPolicy, Slot, SlotSource,
};
use crate::utils::error::{ProgramError, Result};
use futures::future::try_join_all;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

pub struct ProgramBuilder<S: SlotSource, C: ChoiceSource, P: PerformanceSource> {
    catalog: SlotCatalog<S>,
    choices: ScheduleChoiceStore<C>,
    performances: P,
    policy: CapacityPolicy,
}

impl<S: SlotSource, C: ChoiceSource, P: PerformanceSource> ProgramBuilder<S, C, P> {
    pub fn new(slots: S, choices: C, performances: P, policy: CapacityPolicy) -> Self {
        Self {
            catalog: SlotCatalog::new(slots),
            choices: ScheduleChoiceStore::new(choices),
            performances,
            policy,
        }
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    pub async fn build(&self, edition: &Edition) -> Result<Program> {
        self.build_with_capacity(edition, None).await
    }

    /// Places every performance of the edition and returns the program in
    /// print order. Any collaborator failure aborts the whole build.
    pub async fn build_with_capacity(
        &self,
        edition: &Edition,
        capacity_override: Option<u32>,
    ) -> Result<Program> {
        let policy = match capacity_override {
            Some(capacity) => self.policy.clone().with_capacity_override(capacity),
            None => self.policy.clone(),
        };

        tracing::info!("Building program for edition {}", edition);

        let mut performances = self
            .performances
            .fetch_performances(edition)
            .await
            .map_err(|e| ProgramError::build_failure(format!("edition {}", edition), e.to_string()))?;
        performances.sort_by(|a, b| {
            a.lottery_number
                .cmp(&b.lottery_number)
                .then_with(|| a.id.cmp(&b.id))
        });
        tracing::info!("Loaded {} performances", performances.len());

        let catalogs = self.load_catalogs(&performances, edition, &policy).await?;
        let inputs = self.load_inputs(&performances, edition).await?;

        let mut ledger = SeatLedger::new(&policy);
        let mut entries = Vec::with_capacity(performances.len());

        for (performance, (choice, details)) in performances.iter().zip(inputs) {
            let catalog = catalogs.get(&performance.series).ok_or_else(|| {
                ProgramError::build_failure(subject(performance), "slot catalog was not loaded")
            })?;
            let slot = place(performance, choice.as_ref(), catalog, &policy, &mut ledger)?;
            entries.push(program_entry(performance, slot, details, &policy));
        }

        entries.sort_by(program_order);

        let program = Program {
            edition: *edition,
            entries,
        };
        let summary = program.summary();
        tracing::info!(
            "Program built: {} performances, {} placed, {} waitlisted",
            summary.total,
            summary.total - summary.waitlisted,
            summary.waitlisted
        );

        Ok(program)
    }

    async fn load_catalogs(
        &self,
        performances: &[Performance],
        edition: &Edition,
        policy: &CapacityPolicy,
    ) -> Result<BTreeMap<String, SeriesSlots>> {
        let series: BTreeSet<&str> = performances.iter().map(|p| p.series.as_str()).collect();

        let loaded = try_join_all(series.into_iter().map(|name| async move {
            let slots = self
                .catalog
                .load(name, edition.year)
                .await
                .map_err(|e| match e {
                    duplicate @ ProgramError::DuplicateSlotId { .. } => duplicate,
                    other => ProgramError::build_failure(
                        format!("slot catalog {} {}", name, edition.year),
                        other.to_string(),
                    ),
                })?;
            Ok::<_, ProgramError>((name.to_string(), slots))
        }))
        .await?;

        for (name, slots) in &loaded {
            tracing::info!("Slot catalog {} {}: {} slots", name, edition.year, slots.len());
            match policy.policy_for(name) {
                SeriesPolicy::SingleSlot if slots.len() != 1 => tracing::warn!(
                    "Series {} is configured as single-slot but has {} slots",
                    name,
                    slots.len()
                ),
                SeriesPolicy::Unlimited if policy.series_names().all(|s| s != name.as_str()) => {
                    tracing::warn!("Series {} has no rule; treating it as unlimited", name)
                }
                _ => {}
            }
        }

        Ok(loaded.into_iter().collect())
    }

    async fn load_inputs(
        &self,
        performances: &[Performance],
        edition: &Edition,
    ) -> Result<Vec<(Option<ScheduleChoice>, PerformanceDetails)>> {
        try_join_all(performances.iter().map(|performance| async move {
            let choice = self
                .choices
                .load(&performance.performer_id, &performance.series, edition.year)
                .await
                .map_err(|e| ProgramError::build_failure(subject(performance), e.to_string()))?;
            let details = self
                .performances
                .fetch_details(&performance.id)
                .await
                .map_err(|e| ProgramError::build_failure(subject(performance), e.to_string()))?
                .ok_or_else(|| {
                    ProgramError::build_failure(subject(performance), "no performance details")
                })?;
            Ok::<_, ProgramError>((choice, details))
        }))
        .await
    }
}

fn subject(performance: &Performance) -> String {
    format!("performance '{}'", performance.id)
}

/// First-fit over the ranked candidates. A placement is final.
fn place<'c>(
    performance: &Performance,
    choice: Option<&ScheduleChoice>,
    catalog: &'c SeriesSlots,
    policy: &CapacityPolicy,
    ledger: &mut SeatLedger<'_>,
) -> Result<Option<&'c Slot>> {
    let Some(choice) = choice else {
        tracing::debug!("Performance '{}' has no choices on file", performance.id);
        return Ok(None);
    };

    let ranked = candidates(choice, catalog)
        .map_err(|e| ProgramError::build_failure(subject(performance), e.to_string()))?;
    let capacity = policy.capacity_for(&performance.series);

    for slot in ranked {
        if ledger.is_full(
            &performance.series,
            slot.number_in_series,
            performance.chair_override,
            capacity,
        ) {
            tracing::debug!(
                "Performance '{}': {} #{} is full",
                performance.id,
                performance.series,
                slot.number_in_series
            );
            continue;
        }

        ledger.increment(&performance.series, slot.number_in_series);
        tracing::debug!(
            "Performance '{}' (lottery {}) placed in {} #{}{}",
            performance.id,
            performance.lottery_number,
            performance.series,
            slot.number_in_series,
            if performance.chair_override {
                " by chair override"
            } else {
                ""
            }
        );
        return Ok(Some(slot));
    }

    tracing::debug!("Performance '{}' waitlisted", performance.id);
    Ok(None)
}

fn program_entry(
    performance: &Performance,
    slot: Option<&Slot>,
    details: PerformanceDetails,
    policy: &CapacityPolicy,
) -> ProgramEntry {
    let resolved_series = match slot {
        Some(_) => performance.series.clone(),
        None => policy.waitlist_series().to_string(),
    };

    ProgramEntry {
        assignment: Assignment {
            performance_id: performance.id.clone(),
            resolved_series,
            number_in_series: slot.map(|s| s.number_in_series),
            performance_order: performance.performance_order,
        },
        performer_id: performance.performer_id.clone(),
        requested_series: performance.series.clone(),
        lottery_number: performance.lottery_number,
        lottery_code: lottery_code::encode(performance.lottery_number),
        chair_override: performance.chair_override,
        start_time: slot.map(|s| s.start_time),
        details,
    }
}

/// Print order: series name, slot number, then running order. Lottery number
/// and performance id only break remaining ties.
pub fn program_order(a: &ProgramEntry, b: &ProgramEntry) -> Ordering {
    a.assignment
        .resolved_series
        .cmp(&b.assignment.resolved_series)
        .then_with(|| a.assignment.number_in_series.cmp(&b.assignment.number_in_series))
        .then_with(|| a.assignment.performance_order.cmp(&b.assignment.performance_order))
        .then_with(|| a.lottery_number.cmp(&b.lottery_number))
        .then_with(|| a.assignment.performance_id.cmp(&b.assignment.performance_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RankedChoice, LATE_PERFORMANCE_ORDER};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockFestival {
        slots: Vec<Slot>,
        performances: Vec<Performance>,
        choices: HashMap<String, ScheduleChoice>,
        missing_details: Option<String>,
        fail_choices: bool,
    }

    impl MockFestival {
        fn with_slot(mut self, id: &str, series: &str, number: u32) -> Self {
            self.slots.push(Slot {
                id: id.to_string(),
                series: series.to_string(),
                year: 2024,
                number_in_series: number,
                start_time: NaiveDate::from_ymd_opt(2024, 4, 6)
                    .unwrap()
                    .and_hms_opt(9 + number, 30, 0)
                    .unwrap(),
            });
            self
        }

        fn with_performance(
            mut self,
            id: &str,
            series: &str,
            lottery: u64,
            choices: Vec<RankedChoice>,
        ) -> Self {
            let performer_id = format!("performer-{}", id);
            self.choices.insert(
                performer_id.clone(),
                ScheduleChoice {
                    performer_id: performer_id.clone(),
                    series: series.to_string(),
                    year: 2024,
                    slots: choices,
                },
            );
            self.performances.push(Performance {
                id: id.to_string(),
                performer_id,
                series: series.to_string(),
                lottery_number: lottery,
                chair_override: false,
                performance_order: LATE_PERFORMANCE_ORDER,
            });
            self
        }

        fn without_choices(mut self, id: &str) -> Self {
            self.choices.remove(&format!("performer-{}", id));
            self
        }

        fn override_chair(mut self, id: &str) -> Self {
            for p in &mut self.performances {
                if p.id == id {
                    p.chair_override = true;
                }
            }
            self
        }

        fn order(mut self, id: &str, order: u32) -> Self {
            for p in &mut self.performances {
                if p.id == id {
                    p.performance_order = order;
                }
            }
            self
        }
    }

    #[async_trait]
    impl SlotSource for MockFestival {
        async fn fetch_slots(&self, series: &str, year: i32) -> Result<Vec<Slot>> {
            Ok(self
                .slots
                .iter()
                .filter(|s| s.series == series && s.year == year)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl ChoiceSource for MockFestival {
        async fn fetch_choices(
            &self,
            performer_id: &str,
            _series: &str,
            _year: i32,
        ) -> Result<Option<ScheduleChoice>> {
            if self.fail_choices {
                return Err(ProgramError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "choice store unavailable",
                )));
            }
            Ok(self.choices.get(performer_id).cloned())
        }
    }

    #[async_trait]
    impl PerformanceSource for MockFestival {
        async fn fetch_performances(&self, _edition: &Edition) -> Result<Vec<Performance>> {
            Ok(self.performances.clone())
        }

        async fn fetch_details(&self, performance_id: &str) -> Result<Option<PerformanceDetails>> {
            if self.missing_details.as_deref() == Some(performance_id) {
                return Ok(None);
            }
            Ok(Some(PerformanceDetails {
                performer_name: format!("Performer {}", performance_id),
                instrument: "Piano".to_string(),
                accompanist: None,
                titles: vec!["Sonata".to_string()],
            }))
        }
    }

    async fn build(festival: &MockFestival) -> Result<Program> {
        ProgramBuilder::new(festival, festival, festival, CapacityPolicy::default())
            .build(&Edition::new(2024))
            .await
    }

    fn placement(program: &Program, id: &str) -> (String, Option<u32>) {
        let entry = program
            .entries
            .iter()
            .find(|e| e.assignment.performance_id == id)
            .unwrap();
        (
            entry.assignment.resolved_series.clone(),
            entry.assignment.number_in_series,
        )
    }

    fn ids(entries: &[&ProgramEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.assignment.performance_id.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_lowest_lottery_numbers_win_contested_slot() {
        let mut festival = MockFestival::default().with_slot("e1", "Eastside", 1);
        // Insert in reverse to make sure input order does not matter.
        for lottery in (1..=12).rev() {
            festival = festival.with_performance(
                &format!("p{:02}", lottery),
                "Eastside",
                lottery,
                vec![RankedChoice::ranked("e1", 1)],
            );
        }

        let program = build(&festival).await.unwrap();

        assert_eq!(program.len(), 12);
        for lottery in 1..=10 {
            assert_eq!(
                placement(&program, &format!("p{:02}", lottery)),
                ("Eastside".to_string(), Some(1))
            );
        }
        for lottery in 11..=12 {
            assert_eq!(
                placement(&program, &format!("p{:02}", lottery)),
                ("Waitlist".to_string(), None)
            );
        }
    }

    #[tokio::test]
    async fn test_full_first_choice_falls_back_to_next_rank() {
        let mut festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2);
        for lottery in 1..=10 {
            festival = festival.with_performance(
                &format!("p{:02}", lottery),
                "Eastside",
                lottery,
                vec![RankedChoice::ranked("e1", 1)],
            );
        }
        festival = festival.with_performance(
            "late",
            "Eastside",
            50,
            vec![RankedChoice::ranked("e1", 1), RankedChoice::ranked("e2", 2)],
        );

        let program = build(&festival).await.unwrap();

        assert_eq!(placement(&program, "late"), ("Eastside".to_string(), Some(2)));
    }

    #[tokio::test]
    async fn test_placement_is_never_revisited() {
        // Moving "early" to e2 would make room for "later", but placements
        // are final: e2 stays empty and "later" is waitlisted.
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2)
            .with_performance(
                "early",
                "Eastside",
                1,
                vec![RankedChoice::ranked("e1", 1), RankedChoice::ranked("e2", 2)],
            )
            .with_performance("later", "Eastside", 2, vec![RankedChoice::ranked("e1", 1)]);

        let program = ProgramBuilder::new(&festival, &festival, &festival, CapacityPolicy::default())
            .build_with_capacity(&Edition::new(2024), Some(1))
            .await
            .unwrap();

        assert_eq!(placement(&program, "early"), ("Eastside".to_string(), Some(1)));
        assert_eq!(placement(&program, "later"), ("Waitlist".to_string(), None));
        assert!(program.slot("Eastside", 2).is_empty());
    }

    #[tokio::test]
    async fn test_chair_override_ignores_capacity_and_counts_seat() {
        let mut festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2);
        for lottery in 1..=10 {
            festival = festival.with_performance(
                &format!("p{:02}", lottery),
                "Eastside",
                lottery,
                vec![RankedChoice::ranked("e1", 1)],
            );
        }
        festival = festival
            .with_performance(
                "chair",
                "Eastside",
                99,
                vec![RankedChoice::ranked("e1", 1), RankedChoice::ranked("e2", 2)],
            )
            .override_chair("chair")
            .with_performance("after", "Eastside", 100, vec![RankedChoice::ranked("e1", 1)]);

        let program = build(&festival).await.unwrap();

        assert_eq!(placement(&program, "chair"), ("Eastside".to_string(), Some(1)));
        assert_eq!(placement(&program, "after"), ("Waitlist".to_string(), None));

        let summary = program.summary();
        let e1 = summary
            .slots
            .iter()
            .find(|s| s.series == "Eastside" && s.number_in_series == 1)
            .unwrap();
        assert_eq!(e1.placed, 11);
        assert_eq!(e1.overrides, 1);
        assert!(e1.placed - e1.overrides <= 10);
    }

    #[tokio::test]
    async fn test_override_seat_is_visible_to_later_performances() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("chair", "Eastside", 1, vec![RankedChoice::ranked("e1", 1)])
            .override_chair("chair")
            .with_performance("next", "Eastside", 2, vec![RankedChoice::ranked("e1", 1)]);

        let program = ProgramBuilder::new(&festival, &festival, &festival, CapacityPolicy::default())
            .build_with_capacity(&Edition::new(2024), Some(1))
            .await
            .unwrap();

        assert_eq!(placement(&program, "chair"), ("Eastside".to_string(), Some(1)));
        assert_eq!(placement(&program, "next"), ("Waitlist".to_string(), None));
    }

    #[tokio::test]
    async fn test_not_available_entry_is_never_chosen() {
        let mut conflicting = RankedChoice::unavailable("e1");
        conflicting.rank = Some(1);
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2)
            .with_performance(
                "p1",
                "Eastside",
                1,
                vec![conflicting, RankedChoice::ranked("e2", 2)],
            );

        let program = build(&festival).await.unwrap();

        assert_eq!(placement(&program, "p1"), ("Eastside".to_string(), Some(2)));
    }

    #[tokio::test]
    async fn test_missing_or_empty_choices_waitlist() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2)
            .with_performance("silent", "Eastside", 1, vec![])
            .with_performance("absent", "Eastside", 2, vec![])
            .without_choices("absent")
            .with_performance(
                "unranked",
                "Eastside",
                3,
                vec![RankedChoice::no_opinion("e1")],
            );

        let program = build(&festival).await.unwrap();

        assert_eq!(program.len(), 3);
        assert_eq!(program.waitlisted().count(), 3);
        for entry in program.waitlisted() {
            assert_eq!(entry.assignment.resolved_series, "Waitlist");
            assert!(entry.start_time.is_none());
        }
    }

    #[tokio::test]
    async fn test_single_slot_series_confirm_only() {
        let festival = MockFestival::default()
            .with_slot("c0", "Concerto", 0)
            .with_performance("yes", "Concerto", 1, vec![RankedChoice::no_opinion("c0")])
            .with_performance("no", "Concerto", 2, vec![RankedChoice::unavailable("c0")]);

        let program = build(&festival).await.unwrap();

        assert_eq!(placement(&program, "yes"), ("Concerto".to_string(), Some(0)));
        assert_eq!(placement(&program, "no"), ("Waitlist".to_string(), None));
    }

    #[tokio::test]
    async fn test_unlimited_series_takes_everyone() {
        let mut festival = MockFestival::default()
            .with_slot("w1", "Westside", 1)
            .with_slot("w2", "Westside", 2);
        for lottery in 1..=25 {
            festival = festival.with_performance(
                &format!("w{:02}", lottery),
                "Westside",
                lottery,
                vec![RankedChoice::ranked("w2", 1)],
            );
        }

        let program = build(&festival).await.unwrap();

        assert_eq!(program.slot("Westside", 2).len(), 25);
        assert_eq!(program.waitlisted().count(), 0);
    }

    #[tokio::test]
    async fn test_final_order_uses_performance_order() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("first-drawn", "Eastside", 1, vec![RankedChoice::ranked("e1", 1)])
            .with_performance("second-drawn", "Eastside", 2, vec![RankedChoice::ranked("e1", 1)])
            .with_performance("third-drawn", "Eastside", 3, vec![RankedChoice::ranked("e1", 1)])
            .order("first-drawn", 30)
            .order("second-drawn", 10)
            .order("third-drawn", 20);

        let program = build(&festival).await.unwrap();

        assert_eq!(
            ids(&program.slot("Eastside", 1)),
            vec!["second-drawn", "third-drawn", "first-drawn"]
        );
    }

    #[tokio::test]
    async fn test_final_order_groups_series_and_slots() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2)
            .with_slot("c0", "Concerto", 0)
            .with_performance("e-two", "Eastside", 1, vec![RankedChoice::ranked("e2", 1)])
            .with_performance("e-one", "Eastside", 2, vec![RankedChoice::ranked("e1", 1)])
            .with_performance("wait", "Eastside", 3, vec![])
            .with_performance("concerto", "Concerto", 4, vec![RankedChoice::no_opinion("c0")])
            .order("e-one", 5);

        let program = build(&festival).await.unwrap();

        let order: Vec<&str> = program
            .entries
            .iter()
            .map(|e| e.assignment.performance_id.as_str())
            .collect();
        assert_eq!(order, vec!["concerto", "e-one", "e-two", "wait"]);
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let mut festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e2", "Eastside", 2);
        for lottery in 1..=15 {
            festival = festival.with_performance(
                &format!("p{:02}", lottery),
                "Eastside",
                lottery % 7,
                vec![RankedChoice::ranked("e1", 1), RankedChoice::ranked("e2", 2)],
            );
        }

        let first = build(&festival).await.unwrap();
        let second = build(&festival).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
    }

    #[tokio::test]
    async fn test_entries_carry_print_metadata() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("p1", "Eastside", 12345, vec![RankedChoice::ranked("e1", 1)]);

        let program = build(&festival).await.unwrap();
        let entry = &program.entries[0];

        assert_eq!(entry.lottery_code, "BP4");
        assert_eq!(entry.details.performer_name, "Performer p1");
        assert_eq!(entry.performer_id, "performer-p1");
        assert!(entry.start_time.is_some());
        assert_eq!(entry.assignment.performance_order, LATE_PERFORMANCE_ORDER);
    }

    #[tokio::test]
    async fn test_missing_details_abort_build() {
        let mut festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("p1", "Eastside", 1, vec![RankedChoice::ranked("e1", 1)])
            .with_performance("p2", "Eastside", 2, vec![RankedChoice::ranked("e1", 1)]);
        festival.missing_details = Some("p2".to_string());

        let err = build(&festival).await.unwrap_err();

        match err {
            ProgramError::BuildFailure { subject, .. } => assert!(subject.contains("p2")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_choice_source_failure_aborts_build() {
        let mut festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("p1", "Eastside", 1, vec![RankedChoice::ranked("e1", 1)]);
        festival.fail_choices = true;

        assert!(matches!(
            build(&festival).await,
            Err(ProgramError::BuildFailure { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_slot_reference_aborts_build() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("p1", "Eastside", 1, vec![RankedChoice::ranked("ghost", 1)]);

        assert!(matches!(
            build(&festival).await,
            Err(ProgramError::BuildFailure { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_slot_id_aborts_build() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_slot("e1", "Eastside", 2)
            .with_performance("p1", "Eastside", 1, vec![RankedChoice::ranked("e1", 1)]);

        assert!(matches!(
            build(&festival).await,
            Err(ProgramError::DuplicateSlotId { .. })
        ));
    }

    #[tokio::test]
    async fn test_custom_waitlist_name() {
        let festival = MockFestival::default()
            .with_slot("e1", "Eastside", 1)
            .with_performance("p1", "Eastside", 1, vec![]);
        let policy = CapacityPolicy::default().with_waitlist_series("Reserve");

        let program = ProgramBuilder::new(&festival, &festival, &festival, policy)
            .build(&Edition::new(2024))
            .await
            .unwrap();

        assert_eq!(placement(&program, "p1"), ("Reserve".to_string(), None));
    }
}
