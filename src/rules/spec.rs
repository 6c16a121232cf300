//! Rule declarations
//!
//! A [`RuleSet`] is the configuration attached to one `param` declaration:
//! an ordered mapping from rule name to that rule's argument, where each
//! entry may also carry a conditional guard. Rule sets deserialize from the
//! same shapes a config file would hold:
//!
//! ```json
//! { "required": true, "minlength": 3, "maxlength": 5 }
//! { "required": { "if": "custom_validator" } }
//! { "minlength": { "value": 3, "unless": "is_admin" } }
//! ```
//!
//! Scalar arguments map straight to a [`RuleArg`]. The mapping form names a
//! scope predicate under `if` or `unless` and may carry the rule's own
//! argument under `value`; with no `value` the argument defaults to
//! `Flag(true)`. Inline closure guards are builder-only.

use super::guard::Guard;
use crate::error::Error;
use indexmap::IndexMap;
use serde::Deserialize;

/// Argument attached to one rule in a declaration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RuleArg {
    /// Boolean switch (`required: true`)
    Flag(bool),
    /// Integer bound (`minlength: 3`)
    Bound(u64),
    /// Type tag (`type: "date"`)
    Tag(String),
}

impl RuleArg {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            RuleArg::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_bound(&self) -> Option<u64> {
        match self {
            RuleArg::Bound(bound) => Some(*bound),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            RuleArg::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Shape name for configuration error messages
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            RuleArg::Flag(_) => "boolean",
            RuleArg::Bound(_) => "integer",
            RuleArg::Tag(_) => "string",
        }
    }
}

/// One rule's configuration inside a parameter declaration
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// Rule-specific argument
    pub arg: RuleArg,
    /// Optional conditional guard, orthogonal to the rule kind
    pub guard: Option<Guard>,
}

impl RuleSpec {
    /// Boolean argument, no guard
    pub fn flag(value: bool) -> Self {
        Self {
            arg: RuleArg::Flag(value),
            guard: None,
        }
    }

    /// Integer bound argument, no guard
    pub fn bound(value: u64) -> Self {
        Self {
            arg: RuleArg::Bound(value),
            guard: None,
        }
    }

    /// Type tag argument, no guard
    pub fn tag(value: impl Into<String>) -> Self {
        Self {
            arg: RuleArg::Tag(value.into()),
            guard: None,
        }
    }

    /// Attach a guard, builder-style
    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// Mapping form of a declaration entry: `if`/`unless` plus optional `value`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GuardedSpecDe {
    #[serde(default)]
    value: Option<RuleArg>,
    #[serde(default, rename = "if")]
    only_if: Option<String>,
    #[serde(default)]
    unless: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSpecDe {
    Plain(RuleArg),
    Guarded(GuardedSpecDe),
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let spec = match RuleSpecDe::deserialize(deserializer)? {
            RuleSpecDe::Plain(arg) => RuleSpec { arg, guard: None },
            RuleSpecDe::Guarded(guarded) => {
                // When both are present, `if` takes precedence and `unless`
                // is ignored.
                let guard = match (guarded.only_if, guarded.unless) {
                    (Some(name), _) => Some(Guard::when(name)),
                    (None, Some(name)) => Some(Guard::unless(name)),
                    (None, None) => None,
                };
                RuleSpec {
                    arg: guarded.value.unwrap_or(RuleArg::Flag(true)),
                    guard,
                }
            }
        };
        Ok(spec)
    }
}

/// Ordered rule declarations for one parameter
///
/// Iteration order is declaration order, and declaration order is
/// evaluation order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, RuleSpec>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rule, builder-style
    pub fn rule(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.rules.insert(name.into(), spec);
        self
    }

    /// Parse a declarative rule set from a JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|e| Error::InvalidRuleSpec(e.to_string()))
    }

    /// Rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.rules.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
