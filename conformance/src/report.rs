//! Validation report types: single check results, severities, and the
//! aggregated report.
//!
//! Validators accumulate violations instead of stopping at the first one; a
//! full run reports every mismatch it found, itemized under one failing
//! result per check.

/// Outcome severity of one validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Non-blocking finding.
    Warning,
    /// The check failed; the suite as a whole fails.
    Failure,
}

/// The outcome of one validation check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Identifier of the validator that produced this result
    /// (e.g. `params/registry`).
    pub validator: String,
    /// One-line outcome description; failure messages carry the violation
    /// count.
    pub message: String,
    /// Outcome severity.
    pub severity: Severity,
    /// Itemized violations, one line each.
    pub details: Vec<String>,
}

impl CheckResult {
    /// A passing check.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// A failing check with no itemized details.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// A failing check with one detail line per violation.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        CheckResult {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// A warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// True if this result fails the suite.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results from every validator that ran.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// All individual check results, in validator run order.
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        ValidationReport::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Absorbs another report's results.
    pub fn extend(&mut self, other: ValidationReport) {
        self.results.extend(other.results);
    }

    /// Number of failing checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// True when no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_counted_not_short_circuited() {
        let mut report = ValidationReport::new();
        report.push(CheckResult::pass("a", "ok"));
        report.push(CheckResult::fail("b", "bad"));
        report.push(CheckResult::fail_with_details(
            "c",
            "2 violations",
            vec!["one".to_owned(), "two".to_owned()],
        ));
        assert_eq!(report.failure_count(), 2);
        assert!(!report.all_passed());
    }

    #[test]
    fn warnings_do_not_fail_the_suite() {
        let mut report = ValidationReport::new();
        report.push(CheckResult::warn("a", "heads up"));
        assert!(report.all_passed());
    }
}
