//! Revenue tracking, reconciliation, and debounced scheduling.

mod debounce;
mod service;
mod tracker;

pub use debounce::ReconciliationDebouncer;
pub use service::RevenueService;
pub use tracker::{SnapshotTracker, WatchedAccount};
