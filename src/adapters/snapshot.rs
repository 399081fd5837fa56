use crate::core::{
    ChoiceSink, ChoiceSource, Edition, Performance, PerformanceDetails, PerformanceSource,
    ScheduleChoice, Slot, SlotSource, Storage,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    #[serde(flatten)]
    pub performance: Performance,
    #[serde(default)]
    pub details: Option<PerformanceDetails>,
}

/// Normalized records of one festival edition, as exported by the
/// registration system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub year: i32,
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub performances: Vec<PerformanceRecord>,
    #[serde(default)]
    pub choices: Vec<ScheduleChoice>,
}

type ChoiceKey = (String, String, i32);

/// Serves every collaborator port from an in-memory snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    year: i32,
    slots: Vec<Slot>,
    performances: Vec<Performance>,
    details: HashMap<String, PerformanceDetails>,
    choices: RwLock<HashMap<ChoiceKey, ScheduleChoice>>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut performances = Vec::with_capacity(snapshot.performances.len());
        let mut details = HashMap::new();
        for record in snapshot.performances {
            if let Some(d) = record.details {
                details.insert(record.performance.id.clone(), d);
            }
            performances.push(record.performance);
        }

        let choices = snapshot
            .choices
            .into_iter()
            .map(|c| ((c.performer_id.clone(), c.series.clone(), c.year), c))
            .collect();

        Self {
            year: snapshot.year,
            slots: snapshot.slots,
            performances,
            details,
            choices: RwLock::new(choices),
        }
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_slice(data)?;
        Ok(Self::new(snapshot))
    }

    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let data = storage.read_file(path).await?;
        let store = Self::from_json(&data)?;
        tracing::info!(
            "Loaded snapshot {} ({}): {} slots, {} performances",
            path,
            store.year,
            store.slots.len(),
            store.performances.len()
        );
        Ok(store)
    }

    pub async fn snapshot(&self) -> Snapshot {
        let choices = self.choices.read().await;
        let mut choices: Vec<ScheduleChoice> = choices.values().cloned().collect();
        choices.sort_by(|a, b| {
            (&a.performer_id, &a.series, a.year).cmp(&(&b.performer_id, &b.series, b.year))
        });

        Snapshot {
            year: self.year,
            slots: self.slots.clone(),
            performances: self
                .performances
                .iter()
                .map(|p| PerformanceRecord {
                    performance: p.clone(),
                    details: self.details.get(&p.id).cloned(),
                })
                .collect(),
            choices,
        }
    }

    pub async fn save<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let json = serde_json::to_vec_pretty(&self.snapshot().await)?;
        storage.write_file(path, &json).await
    }
}

#[async_trait]
impl SlotSource for SnapshotStore {
    async fn fetch_slots(&self, series: &str, year: i32) -> Result<Vec<Slot>> {
        Ok(self
            .slots
            .iter()
            .filter(|slot| slot.series == series && slot.year == year)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ChoiceSource for SnapshotStore {
    async fn fetch_choices(
        &self,
        performer_id: &str,
        series: &str,
        year: i32,
    ) -> Result<Option<ScheduleChoice>> {
        let choices = self.choices.read().await;
        Ok(choices
            .get(&(performer_id.to_string(), series.to_string(), year))
            .cloned())
    }
}

#[async_trait]
impl ChoiceSink for SnapshotStore {
    async fn store_choices(&self, choice: ScheduleChoice) -> Result<()> {
        let mut choices = self.choices.write().await;
        choices.insert(
            (choice.performer_id.clone(), choice.series.clone(), choice.year),
            choice,
        );
        Ok(())
    }
}

#[async_trait]
impl PerformanceSource for SnapshotStore {
    async fn fetch_performances(&self, edition: &Edition) -> Result<Vec<Performance>> {
        if edition.year != self.year {
            tracing::warn!(
                "Snapshot holds edition {}, not {}; no performances",
                self.year,
                edition
            );
            return Ok(Vec::new());
        }
        Ok(self.performances.clone())
    }

    async fn fetch_details(&self, performance_id: &str) -> Result<Option<PerformanceDetails>> {
        Ok(self.details.get(performance_id).cloned())
    }
}
