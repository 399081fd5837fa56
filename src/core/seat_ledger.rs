use crate::core::SeriesPolicy;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_CAPACITY: u32 = 10;
pub const DEFAULT_WAITLIST_SERIES: &str = "Waitlist";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SeriesRule {
    policy: SeriesPolicy,
    capacity: Option<u32>,
}

/// Which series are seat-limited, and how many seats they have. Series with
/// no rule are unlimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityPolicy {
    default_capacity: u32,
    waitlist_series: String,
    rules: BTreeMap<String, SeriesRule>,
}

impl CapacityPolicy {
    /// A policy with no series rules at all.
    pub fn new(default_capacity: u32) -> Self {
        Self {
            default_capacity,
            waitlist_series: DEFAULT_WAITLIST_SERIES.to_string(),
            rules: BTreeMap::new(),
        }
    }

    pub fn with_series(mut self, series: impl Into<String>, policy: SeriesPolicy) -> Self {
        self.rules.insert(
            series.into(),
            SeriesRule {
                policy,
                capacity: None,
            },
        );
        self
    }

    pub fn with_series_capacity(mut self, series: impl Into<String>, capacity: u32) -> Self {
        self.rules.insert(
            series.into(),
            SeriesRule {
                policy: SeriesPolicy::Limited,
                capacity: Some(capacity),
            },
        );
        self
    }

    pub fn with_waitlist_series(mut self, series: impl Into<String>) -> Self {
        self.waitlist_series = series.into();
        self
    }

    /// Replaces the capacity of every limited series for one build.
    pub fn with_capacity_override(mut self, capacity: u32) -> Self {
        self.default_capacity = capacity;
        for rule in self.rules.values_mut() {
            rule.capacity = None;
        }
        self
    }

    pub fn policy_for(&self, series: &str) -> SeriesPolicy {
        self.rules
            .get(series)
            .map(|rule| rule.policy)
            .unwrap_or_default()
    }

    pub fn is_limited(&self, series: &str) -> bool {
        self.policy_for(series) == SeriesPolicy::Limited
    }

    pub fn capacity_for(&self, series: &str) -> u32 {
        self.rules
            .get(series)
            .and_then(|rule| rule.capacity)
            .unwrap_or(self.default_capacity)
    }

    pub fn default_capacity(&self) -> u32 {
        self.default_capacity
    }

    pub fn waitlist_series(&self) -> &str {
        &self.waitlist_series
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::new(DEFAULT_CAPACITY)
            .with_series("Eastside", SeriesPolicy::Limited)
            .with_series("Concerto", SeriesPolicy::SingleSlot)
    }
}

/// Seat occupancy for a single build pass. Never reused across builds.
#[derive(Debug)]
pub struct SeatLedger<'p> {
    policy: &'p CapacityPolicy,
    occupancy: HashMap<(String, u32), u32>,
}

impl<'p> SeatLedger<'p> {
    pub fn new(policy: &'p CapacityPolicy) -> Self {
        Self {
            policy,
            occupancy: HashMap::new(),
        }
    }

    pub fn is_full(
        &self,
        series: &str,
        number_in_series: u32,
        override_capacity_check: bool,
        capacity: u32,
    ) -> bool {
        if override_capacity_check || !self.policy.is_limited(series) {
            return false;
        }
        self.occupancy(series, number_in_series) >= capacity
    }

    pub fn increment(&mut self, series: &str, number_in_series: u32) {
        *self
            .occupancy
            .entry((series.to_string(), number_in_series))
            .or_insert(0) += 1;
    }

    pub fn occupancy(&self, series: &str, number_in_series: u32) -> u32 {
        self.occupancy
            .get(&(series.to_string(), number_in_series))
            .copied()
            .unwrap_or(0)
    }
}
