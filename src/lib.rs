pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::SnapshotStore;
pub use crate::config::{cli::LocalStorage, toml_config::ProgramConfig};
pub use crate::core::choice_store::ScheduleChoiceStore;
pub use crate::core::lottery_code::{decode, encode};
pub use crate::core::program_builder::ProgramBuilder;
pub use crate::core::seat_ledger::{CapacityPolicy, SeatLedger};
pub use crate::core::slot_catalog::SlotCatalog;
pub use crate::utils::error::{ProgramError, Result};
