// Adapters layer: concrete implementations of the domain ports.

pub mod snapshot;

pub use snapshot::{PerformanceRecord, Snapshot, SnapshotStore};
