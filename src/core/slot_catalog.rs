use crate::core::{Slot, SlotSource};
use crate::utils::error::{ProgramError, Result};
use std::collections::HashSet;

/// The ordered slots of one (series, year).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSlots {
    series: String,
    year: i32,
    slots: Vec<Slot>,
}

impl SeriesSlots {
    pub fn series(&self) -> &str {
        &self.series
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == slot_id)
    }

    /// The only slot of a confirm-only series.
    pub fn sole_slot(&self) -> Option<&Slot> {
        match self.slots.as_slice() {
            [slot] => Some(slot),
            _ => None,
        }
    }
}

pub struct SlotCatalog<S: SlotSource> {
    source: S,
}

impl<S: SlotSource> SlotCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(&self, series: &str, year: i32) -> Result<SeriesSlots> {
        let rows = self.source.fetch_slots(series, year).await?;
        tracing::debug!("Fetched {} slot rows for {} {}", rows.len(), series, year);
        normalize(series, year, rows)
    }
}

fn normalize(series: &str, year: i32, rows: Vec<Slot>) -> Result<SeriesSlots> {
    let mut seen_ids = HashSet::new();
    let mut seen_numbers = HashSet::new();
    let mut slots = Vec::with_capacity(rows.len());

    for slot in rows {
        if slot.series != series || slot.year != year {
            tracing::warn!(
                "Ignoring slot '{}' ({} {}) returned for {} {}",
                slot.id,
                slot.series,
                slot.year,
                series,
                year
            );
            continue;
        }
        if !seen_ids.insert(slot.id.clone()) {
            return Err(ProgramError::DuplicateSlotId {
                series: series.to_string(),
                year,
                slot_id: slot.id,
            });
        }
        if !seen_numbers.insert(slot.number_in_series) {
            tracing::warn!(
                "Slot number {} appears more than once in {} {}; those slots share seats",
                slot.number_in_series,
                series,
                year
            );
        }
        slots.push(slot);
    }

    slots.sort_by(|a, b| {
        a.number_in_series
            .cmp(&b.number_in_series)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(SeriesSlots {
        series: series.to_string(),
        year,
        slots,
    })
}
