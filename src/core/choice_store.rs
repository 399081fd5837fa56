use crate::core::slot_catalog::SeriesSlots;
use crate::core::{ChoiceSink, ChoiceSource, ScheduleChoice, Slot};
use crate::utils::error::{ProgramError, Result};
use std::collections::HashSet;

pub struct ScheduleChoiceStore<C> {
    backend: C,
}

impl<C> ScheduleChoiceStore<C> {
    pub fn new(backend: C) -> Self {
        Self { backend }
    }
}

impl<C: ChoiceSource> ScheduleChoiceStore<C> {
    pub async fn load(
        &self,
        performer_id: &str,
        series: &str,
        year: i32,
    ) -> Result<Option<ScheduleChoice>> {
        self.backend
            .fetch_choices(performer_id, series, year)
            .await
    }
}

impl<C: ChoiceSink> ScheduleChoiceStore<C> {
    /// Validates a submission against the series catalog, then persists it.
    pub async fn submit(&self, choice: ScheduleChoice, catalog: &SeriesSlots) -> Result<()> {
        validate_choice(&choice, catalog)?;
        tracing::info!(
            "Storing {} choices for performer '{}' in {} {}",
            choice.slots.len(),
            choice.performer_id,
            choice.series,
            choice.year
        );
        self.backend.store_choices(choice).await
    }
}

pub fn validate_choice(choice: &ScheduleChoice, catalog: &SeriesSlots) -> Result<()> {
    let reject = |reason: String| ProgramError::invalid_choice(&choice.performer_id, reason);

    if choice.series != catalog.series() || choice.year != catalog.year() {
        return Err(reject(format!(
            "choices are for {} {} but the catalog is {} {}",
            choice.series,
            choice.year,
            catalog.series(),
            catalog.year()
        )));
    }

    let mut seen_slots = HashSet::new();
    let mut seen_ranks = HashSet::new();

    for entry in &choice.slots {
        if catalog.get(&entry.slot_id).is_none() {
            return Err(reject(format!("unknown slot '{}'", entry.slot_id)));
        }
        if !seen_slots.insert(entry.slot_id.as_str()) {
            return Err(reject(format!("slot '{}' listed twice", entry.slot_id)));
        }
        match entry.rank {
            Some(_) if entry.not_available => {
                return Err(reject(format!(
                    "slot '{}' is marked not available but has a rank",
                    entry.slot_id
                )));
            }
            Some(0) => {
                return Err(reject(format!("slot '{}' has rank 0", entry.slot_id)));
            }
            Some(rank) if !seen_ranks.insert(rank) => {
                return Err(reject(format!("rank {} used more than once", rank)));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Slots a performance may be placed in, best first.
///
/// For a series with a single slot, any record for that slot that is not
/// marked not available makes it the candidate, ranked or not. Otherwise
/// unavailable and unranked entries are dropped and the rest are ordered by
/// rank. Fails when a candidate names a slot the catalog does not have.
pub fn candidates<'c>(choice: &ScheduleChoice, catalog: &'c SeriesSlots) -> Result<Vec<&'c Slot>> {
    if let Some(sole) = catalog.sole_slot() {
        let confirmed = choice
            .slots
            .iter()
            .any(|entry| entry.slot_id == sole.id && !entry.not_available);
        return Ok(if confirmed { vec![sole] } else { Vec::new() });
    }

    let mut ranked: Vec<(u32, &'c Slot)> = Vec::new();
    for entry in &choice.slots {
        if entry.not_available {
            continue;
        }
        let Some(rank) = entry.rank else {
            continue;
        };
        let slot = catalog.get(&entry.slot_id).ok_or_else(|| {
            ProgramError::invalid_choice(
                &choice.performer_id,
                format!(
                    "slot '{}' is not in the {} {} catalog",
                    entry.slot_id,
                    catalog.series(),
                    catalog.year()
                ),
            )
        })?;
        ranked.push((rank, slot));
    }

    ranked.sort_by(|(rank_a, slot_a), (rank_b, slot_b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| slot_a.number_in_series.cmp(&slot_b.number_in_series))
    });

    Ok(ranked.into_iter().map(|(_, slot)| slot).collect())
}
