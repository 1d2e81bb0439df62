//! Cycle reporting types
//!
//! Structures describing what a single poll cycle did: which watches ran,
//! how many rows each one dispatched, and which ones failed.

use serde::{Deserialize, Serialize};

/// Result of running one watch during a poll cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchOutcome {
    /// Name of the watch that produced this outcome
    pub watch: String,
    /// Number of rows fetched and handed to the action
    pub rows: usize,
    /// Wall-clock time the watch query took
    pub duration_ms: u64,
    /// Error message if the watch query failed
    pub error: Option<String>,
}

impl WatchOutcome {
    /// Creates a successful outcome
    pub fn ok(watch: impl Into<String>, rows: usize, duration_ms: u64) -> Self {
        Self {
            watch: watch.into(),
            rows,
            duration_ms,
            error: None,
        }
    }

    /// Creates a failed outcome
    pub fn failed(watch: impl Into<String>, duration_ms: u64, error: impl Into<String>) -> Self {
        Self {
            watch: watch.into(),
            rows: 0,
            duration_ms,
            error: Some(error.into()),
        }
    }
}

/// Summary of a single poll cycle across all watches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub outcomes: Vec<WatchOutcome>,
}

impl CycleReport {
    /// Creates a report started now with no outcomes yet
    pub fn started() -> Self {
        Self {
            started_at: chrono::Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Total rows dispatched across all watches this cycle
    pub fn rows_dispatched(&self) -> usize {
        self.outcomes.iter().map(|o| o.rows).sum()
    }

    /// Number of watches that failed this cycle
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }

    /// True when every watch completed without error
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = CycleReport::started();
        assert!(report.is_clean());
        assert_eq!(report.rows_dispatched(), 0);
    }

    #[test]
    fn test_report_accounting() {
        let mut report = CycleReport::started();
        report.outcomes.push(WatchOutcome::ok("outbox", 3, 12));
        report.outcomes.push(WatchOutcome::ok("audit", 2, 4));
        report
            .outcomes
            .push(WatchOutcome::failed("broken", 1, "syntax error"));

        assert_eq!(report.rows_dispatched(), 5);
        assert_eq!(report.error_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_failed_outcome_carries_message() {
        let outcome = WatchOutcome::failed("outbox", 7, "connection refused");
        assert_eq!(outcome.rows, 0);
        assert_eq!(outcome.error.as_deref(), Some("connection refused"));
    }
}
