use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Running-order value for performances nobody has sequenced yet. Sorts them
/// to the bottom of their slot.
pub const LATE_PERFORMANCE_ORDER: u32 = 10_000;

fn late_performance_order() -> u32 {
    LATE_PERFORMANCE_ORDER
}

/// One festival edition. Every build runs against exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edition {
    pub year: i32,
}

impl Edition {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub series: String,
    pub year: i32,
    pub number_in_series: u32,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedChoice {
    pub slot_id: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub not_available: bool,
}

impl RankedChoice {
    pub fn ranked(slot_id: impl Into<String>, rank: u32) -> Self {
        Self {
            slot_id: slot_id.into(),
            rank: Some(rank),
            not_available: false,
        }
    }

    pub fn unavailable(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            rank: None,
            not_available: true,
        }
    }

    pub fn no_opinion(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            rank: None,
            not_available: false,
        }
    }
}

/// Everything one performer submitted for one (series, year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleChoice {
    pub performer_id: String,
    pub series: String,
    pub year: i32,
    pub slots: Vec<RankedChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub id: String,
    pub performer_id: String,
    pub series: String,
    pub lottery_number: u64,
    #[serde(default)]
    pub chair_override: bool,
    #[serde(default = "late_performance_order")]
    pub performance_order: u32,
}

/// Display metadata used only when printing the program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceDetails {
    pub performer_name: String,
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub accompanist: Option<String>,
    #[serde(default)]
    pub titles: Vec<String>,
}

/// Where a series sits with respect to seat limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPolicy {
    Limited,
    #[default]
    Unlimited,
    SingleSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub performance_id: String,
    pub resolved_series: String,
    /// `None` for waitlisted performances.
    pub number_in_series: Option<u32>,
    pub performance_order: u32,
}

impl Assignment {
    pub fn is_waitlisted(&self) -> bool {
        self.number_in_series.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub assignment: Assignment,
    pub performer_id: String,
    pub requested_series: String,
    pub lottery_number: u64,
    pub lottery_code: String,
    pub chair_override: bool,
    pub start_time: Option<NaiveDateTime>,
    pub details: PerformanceDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub series: String,
    pub number_in_series: u32,
    pub placed: usize,
    pub overrides: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramSummary {
    pub total: usize,
    pub waitlisted: usize,
    pub slots: Vec<SlotCount>,
}

/// Output of one build, already in print order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub edition: Edition,
    pub entries: Vec<ProgramEntry>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter().map(|entry| &entry.assignment)
    }

    pub fn waitlisted(&self) -> impl Iterator<Item = &ProgramEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.assignment.is_waitlisted())
    }

    /// Entries placed in one concrete slot, in running order.
    pub fn slot(&self, series: &str, number_in_series: u32) -> Vec<&ProgramEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.assignment.resolved_series == series
                    && entry.assignment.number_in_series == Some(number_in_series)
            })
            .collect()
    }

    pub fn summary(&self) -> ProgramSummary {
        let mut counts: BTreeMap<(&str, u32), (usize, usize)> = BTreeMap::new();
        let mut waitlisted = 0;

        for entry in &self.entries {
            match entry.assignment.number_in_series {
                Some(number) => {
                    let count = counts
                        .entry((entry.assignment.resolved_series.as_str(), number))
                        .or_default();
                    count.0 += 1;
                    if entry.chair_override {
                        count.1 += 1;
                    }
                }
                None => waitlisted += 1,
            }
        }

        ProgramSummary {
            total: self.entries.len(),
            waitlisted,
            slots: counts
                .into_iter()
                .map(|((series, number_in_series), (placed, overrides))| SlotCount {
                    series: series.to_string(),
                    number_in_series,
                    placed,
                    overrides,
                })
                .collect(),
        }
    }
}
