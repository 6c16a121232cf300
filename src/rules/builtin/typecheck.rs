//! Type rule
//!
//! One rule, four tags: `string`, `integer`, `boolean`, `date`. The check
//! always runs against the value's string form, so a JSON number `42` and a
//! query-string `"42"` are both canonical integers.
//!
//! The date grammar is fixed: a full ISO-8601 date (calendar, week, or
//! ordinal; extended or basic), optionally followed by a time with optional
//! fractional seconds and zone offset. The exact accepted/rejected set is
//! pinned by the fixture table in this file's tests. Matching is linear
//! time: the pattern uses no backreferences, which is also why the
//! ambiguous `YYYYMM` calendar form is rejected structurally (the basic
//! calendar alternative simply requires a day).

use crate::error::Error;
use crate::report::Violation;
use crate::rules::spec::RuleArg;
use crate::rules::traits::{string_form, Rule};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static ISO8601_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[+-]?\d{4}",
        r"(?:",
        // calendar date, extended (month, optional day)
        r"-(?:0[1-9]|1[0-2])(?:-(?:0[1-9]|[12]\d|3[01]))?",
        // calendar date, basic (day required)
        r"|(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01])",
        // week date, extended and basic
        r"|-W(?:[0-4]\d|5[0-2])(?:-[1-7])?",
        r"|W(?:[0-4]\d|5[0-2])[1-7]?",
        // ordinal date, extended and basic
        r"|-(?:00[1-9]|0[1-9]\d|[12]\d{2}|3(?:[0-5]\d|6[1-6]))",
        r"|(?:00[1-9]|0[1-9]\d|[12]\d{2}|3(?:[0-5]\d|6[1-6]))",
        r")?",
        r"(?:[T\s]",
        // time of day, extended then basic, plus midnight-24
        r"(?:(?:[01]\d|2[0-3])(?::[0-5]\d(?::[0-5]\d)?)?",
        r"|24:00",
        r"|(?:[01]\d|2[0-3])(?:[0-5]\d(?:[0-5]\d)?)?",
        r"|2400)",
        r"(?:[.,]\d+)?",
        // zone offset
        r"(?:[zZ]|[+-](?:[01]\d|2[0-3])(?::?[0-5]\d)?)?",
        r")?$",
    ))
    .expect("ISO-8601 pattern compiles")
});

/// Type tag accepted by the `type` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Integer,
    Boolean,
    Date,
}

impl TypeTag {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(TypeTag::String),
            "integer" => Some(TypeTag::Integer),
            "boolean" => Some(TypeTag::Boolean),
            "date" => Some(TypeTag::Date),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::Date => "date",
        }
    }
}

/// A canonical base-10 integer literal: round-trips through i64 unchanged,
/// so no leading zeros, whitespace, or explicit plus sign.
fn is_canonical_integer(s: &str) -> bool {
    match s.parse::<i64>() {
        Ok(n) => n.to_string() == s,
        Err(_) => false,
    }
}

/// Fails when the value's string form is not of the declared type
pub struct TypeRule {
    tag: TypeTag,
    value: String,
    violation: Violation,
}

impl TypeRule {
    pub fn new(attr: &str, value: Option<&Value>, tag: TypeTag) -> Self {
        Self {
            tag,
            value: string_form(value),
            violation: Violation::new(
                format!("{}_type_is_wrong", attr),
                format!("{} must be of type {}.", attr, tag.as_str()),
            )
            .param("type", tag.as_str()),
        }
    }

    pub(crate) fn from_arg(
        attr: &str,
        value: Option<&Value>,
        arg: &RuleArg,
    ) -> Result<Box<dyn Rule>, Error> {
        let tag = arg
            .as_tag()
            .and_then(TypeTag::parse)
            .ok_or_else(|| Error::InvalidRuleArg {
                rule: "type".to_string(),
                detail: "expected one of string, integer, boolean, date".to_string(),
            })?;
        Ok(Box::new(Self::new(attr, value, tag)))
    }
}

impl Rule for TypeRule {
    fn name(&self) -> &str {
        "type"
    }

    fn validate(&self) -> bool {
        match self.tag {
            // string is the universal fallback type
            TypeTag::String => true,
            TypeTag::Integer => is_canonical_integer(&self.value),
            TypeTag::Boolean => {
                self.value.eq_ignore_ascii_case("true") || self.value.eq_ignore_ascii_case("false")
            }
            TypeTag::Date => ISO8601_DATE.is_match(&self.value),
        }
    }

    fn violation(&self) -> Violation {
        self.violation.clone()
    }
}
