//! Core rule trait
//!
//! This module defines the fundamental abstraction of the rule engine.
//!
//! A rule is one named check for one parameter. Rules are constructed fresh
//! per (parameter, rule) evaluation and discarded after a single
//! [`validate`](Rule::validate) decision. Construction computes the
//! structured failure description up front, so the violation is ready
//! whether or not a conditional guard later suppresses the check.

use crate::report::Violation;
use serde_json::Value;

/// The core trait every rule implements
///
/// Implementations are cheap, synchronous, and carry no state beyond what
/// their constructor captured. They must never be pooled or shared between
/// validation passes.
pub trait Rule {
    /// Rule name (for diagnostics)
    fn name(&self) -> &str;

    /// The rule-specific pass/fail decision
    ///
    /// # Returns
    /// * `true` - the parameter satisfies this rule
    /// * `false` - the parameter violates this rule
    ///
    /// The default is vacuously `true` (a rule with no check of its own).
    fn validate(&self) -> bool {
        true
    }

    /// The structured failure description computed at construction
    fn violation(&self) -> Violation;
}

/// Render a raw value the way rule semantics see it
///
/// Absent values and JSON `null` are the empty string, strings are their
/// unquoted content, and every other value uses its canonical JSON text.
pub fn string_form(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_form_of_absent_and_null() {
        assert_eq!(string_form(None), "");
        assert_eq!(string_form(Some(&Value::Null)), "");
    }

    #[test]
    fn test_string_form_of_scalars() {
        assert_eq!(string_form(Some(&json!("ab"))), "ab");
        assert_eq!(string_form(Some(&json!(42))), "42");
        assert_eq!(string_form(Some(&json!(true))), "true");
        assert_eq!(string_form(Some(&json!(false))), "false");
    }

    #[test]
    fn test_string_form_of_compound_values() {
        assert_eq!(string_form(Some(&json!([1, 2]))), "[1,2]");
    }
}
