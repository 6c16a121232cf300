//! Length bound rules
//!
//! Both rules measure the string form of the value in characters, so an
//! absent value has length 0 and a numeric value the length of its decimal
//! text.

use crate::error::Error;
use crate::report::Violation;
use crate::rules::spec::RuleArg;
use crate::rules::traits::{string_form, Rule};
use serde_json::Value;

fn bound_arg(rule: &str, arg: &RuleArg) -> Result<u64, Error> {
    arg.as_bound().ok_or_else(|| Error::InvalidRuleArg {
        rule: rule.to_string(),
        detail: format!("expected an integer bound, got {}", arg.kind()),
    })
}

/// Fails when the value's string form is shorter than the bound
pub struct MinlengthRule {
    length: u64,
    min: u64,
    violation: Violation,
}

impl MinlengthRule {
    pub fn new(attr: &str, value: Option<&Value>, min: u64) -> Self {
        Self {
            length: string_form(value).chars().count() as u64,
            min,
            violation: Violation::new(
                format!("{}_is_too_short", attr),
                format!("{} can not be shorter than {} characters.", attr, min),
            )
            .param("min_length", min),
        }
    }

    pub(crate) fn from_arg(
        attr: &str,
        value: Option<&Value>,
        arg: &RuleArg,
    ) -> Result<Box<dyn Rule>, Error> {
        Ok(Box::new(Self::new(attr, value, bound_arg("minlength", arg)?)))
    }
}

impl Rule for MinlengthRule {
    fn name(&self) -> &str {
        "minlength"
    }

    fn validate(&self) -> bool {
        self.length >= self.min
    }

    fn violation(&self) -> Violation {
        self.violation.clone()
    }
}

/// Fails when the value's string form is longer than the bound
pub struct MaxlengthRule {
    length: u64,
    max: u64,
    violation: Violation,
}

impl MaxlengthRule {
    pub fn new(attr: &str, value: Option<&Value>, max: u64) -> Self {
        Self {
            length: string_form(value).chars().count() as u64,
            max,
            violation: Violation::new(
                format!("{}_is_too_long", attr),
                format!("{} can not be longer than {} characters.", attr, max),
            )
            .param("max_length", max),
        }
    }

    pub(crate) fn from_arg(
        attr: &str,
        value: Option<&Value>,
        arg: &RuleArg,
    ) -> Result<Box<dyn Rule>, Error> {
        Ok(Box::new(Self::new(attr, value, bound_arg("maxlength", arg)?)))
    }
}

impl Rule for MaxlengthRule {
    fn name(&self) -> &str {
        "maxlength"
    }

    fn validate(&self) -> bool {
        self.length <= self.max
    }

    fn violation(&self) -> Violation {
        self.violation.clone()
    }
}
