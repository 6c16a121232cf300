//! Crate error type
//!
//! Two kinds of failure, deliberately distinguishable: configuration errors
//! (a programmer referenced an unknown rule or predicate, or handed a rule
//! an argument of the wrong shape) fail fast and are never recovered, while
//! [`Error::Validation`] is the expected user-facing outcome carrying the
//! complete report.

use crate::report::ParameterValidationError;

/// Error type for validation passes
#[derive(Debug)]
pub enum Error {
    /// A declaration referenced a rule name with no registered implementation
    UnknownRule(String),

    /// A named guard predicate could not be resolved against the caller scope
    UnknownPredicate(String),

    /// A rule was handed an argument of the wrong shape
    InvalidRuleArg {
        /// Rule that rejected the argument
        rule: String,
        /// What the rule expected
        detail: String,
    },

    /// A declarative rule set failed to parse
    InvalidRuleSpec(String),

    /// One or more declared rules failed for the supplied values
    Validation(ParameterValidationError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownRule(name) => write!(f, "unknown rule: {}", name),
            Error::UnknownPredicate(name) => write!(f, "unknown scope predicate: {}", name),
            Error::InvalidRuleArg { rule, detail } => {
                write!(f, "invalid argument for rule '{}': {}", rule, detail)
            }
            Error::InvalidRuleSpec(msg) => write!(f, "invalid rule declaration: {}", msg),
            Error::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParameterValidationError> for Error {
    fn from(err: ParameterValidationError) -> Self {
        Error::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rule_message_names_the_rule() {
        let err = Error::UnknownRule("fancylength".to_string());
        assert_eq!(err.to_string(), "unknown rule: fancylength");
    }

    #[test]
    fn test_invalid_rule_arg_message() {
        let err = Error::InvalidRuleArg {
            rule: "minlength".to_string(),
            detail: "expected an integer bound, got boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument for rule 'minlength': expected an integer bound, got boolean"
        );
    }
}
