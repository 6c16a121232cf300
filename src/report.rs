//! Validation report types
//!
//! A [`ValidationReport`] is the aggregate outcome of one validation pass:
//! an HTTP-style status code plus an ordered mapping from parameter name to
//! the violations recorded against it. The report is "passing" iff the
//! mapping is empty; the status code is only meaningful when it is not.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One structured record describing why a rule failed for a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Machine-readable code, e.g. `login_id_is_too_short`
    pub error_code: String,

    /// Rendered human-readable sentence
    pub error_message: String,

    /// Rule-specific metadata, e.g. `{"min_length": 3}`
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub error_params: Map<String, Value>,
}

impl Violation {
    /// Create a violation with no metadata
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
            error_params: Map::new(),
        }
    }

    /// Attach one metadata entry
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.error_params.insert(key.to_string(), value.into());
        self
    }
}

/// Aggregate outcome of one validation pass
///
/// Violations are kept in declaration order, per parameter, and parameters
/// in the order they first failed. Serialization is deterministic: the same
/// declarations run against the same input produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    status_code: u16,
    errors: IndexMap<String, Vec<Violation>>,
}

impl ValidationReport {
    /// Create an empty (passing) report with the configured failure code
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            errors: IndexMap::new(),
        }
    }

    /// Append a violation to the parameter's ordered list, creating the
    /// list if absent. Never deduplicates.
    pub fn add_error(&mut self, attr: &str, violation: Violation) {
        self.errors.entry(attr.to_string()).or_default().push(violation);
    }

    /// True iff no parameter has any recorded violation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Status code a failing report should be reported with
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// All recorded violations, keyed by parameter name
    pub fn errors(&self) -> &IndexMap<String, Vec<Violation>> {
        &self.errors
    }

    /// Response body payload for the collaborating transport layer:
    /// `{"errors": {...}}`
    pub fn body(&self) -> Value {
        json!({ "errors": self.errors })
    }
}

/// Failure raised when one or more declared rules did not hold
///
/// Carries the complete report, never just the first failure. The
/// collaborating transport layer turns this into a response: status line
/// from [`status_code`](Self::status_code), body from [`body`](Self::body).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValidationError {
    report: ValidationReport,
}

impl ParameterValidationError {
    pub fn new(report: ValidationReport) -> Self {
        Self { report }
    }

    pub fn status_code(&self) -> u16 {
        self.report.status_code()
    }

    pub fn errors(&self) -> &IndexMap<String, Vec<Violation>> {
        self.report.errors()
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn into_report(self) -> ValidationReport {
        self.report
    }

    /// Response body payload, `{"errors": {...}}`
    pub fn body(&self) -> Value {
        self.report.body()
    }
}

impl std::fmt::Display for ParameterValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parameter validation failed for {} parameter(s)",
            self.report.errors().len()
        )
    }
}

impl std::error::Error for ParameterValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_short(attr: &str) -> Violation {
        Violation::new(
            format!("{}_is_too_short", attr),
            format!("{} can not be shorter than 3 characters.", attr),
        )
        .param("min_length", 3)
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new(400);
        assert!(report.is_valid());
        assert_eq!(report.status_code(), 400);
    }

    #[test]
    fn test_add_error_appends_in_order() {
        let mut report = ValidationReport::new(400);
        report.add_error("login_id", Violation::new("login_id_is_required", "login_id is required."));
        report.add_error("login_id", too_short("login_id"));
        report.add_error("token", Violation::new("token_is_required", "token is required."));

        assert!(!report.is_valid());
        let login_errors = &report.errors()["login_id"];
        assert_eq!(login_errors.len(), 2);
        assert_eq!(login_errors[0].error_code, "login_id_is_required");
        assert_eq!(login_errors[1].error_code, "login_id_is_too_short");

        // first-failure order, not alphabetical
        let keys: Vec<&String> = report.errors().keys().collect();
        assert_eq!(keys, ["login_id", "token"]);
    }

    #[test]
    fn test_duplicate_violations_are_kept() {
        let mut report = ValidationReport::new(400);
        report.add_error("login_id", too_short("login_id"));
        report.add_error("login_id", too_short("login_id"));
        assert_eq!(report.errors()["login_id"].len(), 2);
    }

    #[test]
    fn test_body_shape() {
        let mut report = ValidationReport::new(400);
        report.add_error("login_id", too_short("login_id"));

        let body = report.body();
        let violation = &body["errors"]["login_id"][0];
        assert_eq!(violation["error_code"], "login_id_is_too_short");
        assert_eq!(violation["error_params"]["min_length"], 3);
    }

    #[test]
    fn test_violation_without_params_serializes_without_key() {
        let violation = Violation::new("x_is_required", "x is required.");
        let json = serde_json::to_value(&violation).unwrap();
        assert!(json.get("error_params").is_none());
    }

    #[test]
    fn test_error_display() {
        let mut report = ValidationReport::new(422);
        report.add_error("a", Violation::new("a_is_required", "a is required."));
        report.add_error("b", Violation::new("b_is_required", "b is required."));

        let err = ParameterValidationError::new(report);
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "parameter validation failed for 2 parameter(s)");
    }
}
