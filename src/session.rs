//! Validation sessions - per-pass error accumulation
//!
//! A session is the mutable state of exactly one validation pass: create,
//! accumulate zero or more violations, finish, discard. Sessions are never
//! shared across passes. The trait exists so callers can substitute their
//! own reporting shape; [`ReportSession`] is the default.

use crate::report::{ValidationReport, Violation};

/// Strategy for collecting violations during one validation pass
pub trait ValidationSession {
    /// Record one violation against a parameter, preserving declaration order
    fn add_error(&mut self, attr: &str, violation: Violation);

    /// True iff no parameter has any recorded violation
    fn is_valid(&self) -> bool;

    /// Consume the session and produce the final report
    fn finish(self: Box<Self>) -> ValidationReport;
}

/// Default session backed by a [`ValidationReport`]
#[derive(Debug)]
pub struct ReportSession {
    report: ValidationReport,
}

impl ReportSession {
    /// Create a session whose failing report carries the given status code
    pub fn new(status_code: u16) -> Self {
        Self {
            report: ValidationReport::new(status_code),
        }
    }
}

impl ValidationSession for ReportSession {
    fn add_error(&mut self, attr: &str, violation: Violation) {
        self.report.add_error(attr, violation);
    }

    fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    fn finish(self: Box<Self>) -> ValidationReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_valid() {
        let session = ReportSession::new(400);
        assert!(session.is_valid());
    }

    #[test]
    fn test_finish_hands_back_the_accumulated_report() {
        let mut session = Box::new(ReportSession::new(422));
        session.add_error("a", Violation::new("a_is_required", "a is required."));

        assert!(!session.is_valid());
        let report = session.finish();
        assert_eq!(report.status_code(), 422);
        assert_eq!(report.errors()["a"].len(), 1);
    }
}
