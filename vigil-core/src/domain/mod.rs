//! Domain types

pub mod report;

pub use report::{CycleReport, WatchOutcome};
