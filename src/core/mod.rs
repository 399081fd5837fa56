pub mod choice_store;
pub mod lookup;
pub mod lottery_code;
pub mod program_builder;
pub mod render;
pub mod seat_ledger;
pub mod slot_catalog;

pub use crate::domain::model::{
    Assignment, Edition, Performance, PerformanceDetails, Program, ProgramEntry, ProgramSummary,
    RankedChoice, ScheduleChoice, SeriesPolicy, Slot, SlotCount, LATE_PERFORMANCE_ORDER,
};
pub use crate::domain::ports::{
    ChoiceSink, ChoiceSource, PerformanceSource, SlotSource, Storage,
};
pub use crate::utils::error::Result;
