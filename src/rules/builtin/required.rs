//! Presence rule

use crate::error::Error;
use crate::report::Violation;
use crate::rules::spec::RuleArg;
use crate::rules::traits::{string_form, Rule};
use serde_json::Value;

/// Fails when the value is absent or its string form is empty
pub struct RequiredRule {
    present: bool,
    violation: Violation,
}

impl RequiredRule {
    pub fn new(attr: &str, value: Option<&Value>) -> Self {
        Self {
            present: !string_form(value).is_empty(),
            violation: Violation::new(
                format!("{}_is_required", attr),
                format!("{} is required.", attr),
            ),
        }
    }

    /// Registry factory. The boolean argument is accepted but not
    /// consulted: `required: false` still enforces presence, and a guard is
    /// the mechanism for making the check conditional.
    pub(crate) fn from_arg(
        attr: &str,
        value: Option<&Value>,
        _arg: &RuleArg,
    ) -> Result<Box<dyn Rule>, Error> {
        Ok(Box::new(Self::new(attr, value)))
    }
}

impl Rule for RequiredRule {
    fn name(&self) -> &str {
        "required"
    }

    fn validate(&self) -> bool {
        self.present
    }

    fn violation(&self) -> Violation {
        self.violation.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_value_passes() {
        assert!(RequiredRule::new("login_id", Some(&json!("ab"))).validate());
        assert!(RequiredRule::new("count", Some(&json!(0))).validate());
        assert!(RequiredRule::new("flag", Some(&json!(false))).validate());
        assert!(RequiredRule::new("padded", Some(&json!("  "))).validate());
    }

    #[test]
    fn test_absent_and_empty_values_fail() {
        assert!(!RequiredRule::new("login_id", None).validate());
        assert!(!RequiredRule::new("login_id", Some(&json!(""))).validate());
        assert!(!RequiredRule::new("login_id", Some(&Value::Null)).validate());
    }

    #[test]
    fn test_violation_is_ready_before_validation() {
        let rule = RequiredRule::new("login_id", None);
        let violation = rule.violation();
        assert_eq!(violation.error_code, "login_id_is_required");
        assert_eq!(violation.error_message, "login_id is required.");
        assert!(violation.error_params.is_empty());
    }
}
