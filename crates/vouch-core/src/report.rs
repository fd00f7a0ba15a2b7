//! Run report: the aggregated outcome of one validation session

use crate::check::Severity;
use crate::verdict::Verdict;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated counts and per-field outcomes for one session
///
/// Counts and the async flag move at different times: `testCount` at
/// registration, `failCount`/`warnCount` at verdict delivery. While deferred
/// checks are outstanding the report is readable but still subject to
/// change. Serializes with the wire casing downstream consumers expect
/// (`testCount`, `errorsByField`, a bare `async` flag).
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    test_count: usize,
    fail_count: usize,
    warn_count: usize,
    #[serde(rename = "async")]
    is_async: bool,
    errors_by_field: HashMap<String, Vec<String>>,
    warnings_by_field: HashMap<String, Vec<String>>,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one recognized check
    ///
    /// Called at registration, or during the drain pass for staged checks;
    /// never at settlement.
    pub(crate) fn bump_test_counter(&mut self) {
        self.test_count += 1;
    }

    /// Latch the report as asynchronous; one-way, never reset
    pub(crate) fn mark_async(&mut self) {
        self.is_async = true;
    }

    /// Apply one delivered verdict
    ///
    /// A pass changes nothing here. A warn-severity failure is kept out of
    /// `fail_count` and `errors_by_field` entirely.
    pub(crate) fn record(
        &mut self,
        field: &str,
        statement: &str,
        severity: Severity,
        verdict: Verdict,
    ) {
        if verdict.is_pass() {
            return;
        }

        match severity {
            Severity::Fail => {
                self.fail_count += 1;
                self.errors_by_field
                    .entry(field.to_string())
                    .or_default()
                    .push(statement.to_string());
            }
            Severity::Warn => {
                self.warn_count += 1;
                self.warnings_by_field
                    .entry(field.to_string())
                    .or_default()
                    .push(statement.to_string());
            }
        }
    }

    /// Number of recognized checks registered so far
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Number of fail-severity failures delivered so far
    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    /// Number of warn-severity failures delivered so far
    pub fn warn_count(&self) -> usize {
        self.warn_count
    }

    /// True once any deferred check has been registered
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// True if a fail-severity failure was recorded for the field
    pub fn has_errors(&self, field: &str) -> bool {
        self.errors_by_field
            .get(field)
            .map(|statements| !statements.is_empty())
            .unwrap_or(false)
    }

    pub fn has_warnings(&self, field: &str) -> bool {
        self.warnings_by_field
            .get(field)
            .map(|statements| !statements.is_empty())
            .unwrap_or(false)
    }

    /// Failed statements for a field, in delivery order
    pub fn errors(&self, field: &str) -> &[String] {
        self.errors_by_field
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn warnings(&self, field: &str) -> &[String] {
        self.warnings_by_field
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if the run is valid (no fail-severity failures)
    pub fn is_valid(&self) -> bool {
        self.fail_count == 0
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        if self.test_count == 0 {
            return "No checks registered.".to_string();
        }

        format!(
            "{} check(s): {} failure(s), {} warning(s)",
            self.test_count, self.fail_count, self.warn_count,
        )
    }
}
