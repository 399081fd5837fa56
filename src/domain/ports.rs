use crate::domain::model::{Edition, Performance, PerformanceDetails, ScheduleChoice, Slot};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Backing store for the slot catalog.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch_slots(&self, series: &str, year: i32) -> Result<Vec<Slot>>;
}

/// `Ok(None)` means the performer has not submitted any preference yet.
#[async_trait]
pub trait ChoiceSource: Send + Sync {
    async fn fetch_choices(
        &self,
        performer_id: &str,
        series: &str,
        year: i32,
    ) -> Result<Option<ScheduleChoice>>;
}

#[async_trait]
pub trait ChoiceSink: Send + Sync {
    async fn store_choices(&self, choice: ScheduleChoice) -> Result<()>;
}

#[async_trait]
pub trait PerformanceSource: Send + Sync {
    async fn fetch_performances(&self, edition: &Edition) -> Result<Vec<Performance>>;

    async fn fetch_details(&self, performance_id: &str) -> Result<Option<PerformanceDetails>>;
}

#[async_trait]
impl<T: SlotSource + ?Sized> SlotSource for &T {
    async fn fetch_slots(&self, series: &str, year: i32) -> Result<Vec<Slot>> {
        (**self).fetch_slots(series, year).await
    }
}

#[async_trait]
impl<T: ChoiceSource + ?Sized> ChoiceSource for &T {
    async fn fetch_choices(
        &self,
        performer_id: &str,
        series: &str,
        year: i32,
    ) -> Result<Option<ScheduleChoice>> {
        (**self).fetch_choices(performer_id, series, year).await
    }
}

#[async_trait]
impl<T: ChoiceSink + ?Sized> ChoiceSink for &T {
    async fn store_choices(&self, choice: ScheduleChoice) -> Result<()> {
        (**self).store_choices(choice).await
    }
}

#[async_trait]
impl<T: PerformanceSource + ?Sized> PerformanceSource for &T {
    async fn fetch_performances(&self, edition: &Edition) -> Result<Vec<Performance>> {
        (**self).fetch_performances(edition).await
    }

    async fn fetch_details(&self, performance_id: &str) -> Result<Option<PerformanceDetails>> {
        (**self).fetch_details(performance_id).await
    }
}
