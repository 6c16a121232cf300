//! Conditional guards
//!
//! A guard decides whether a rule's check runs at all. `if` means "only
//! validate when the predicate is true"; `unless` inverts that. A suppressed
//! rule is vacuously satisfied and records nothing.

use crate::error::Error;
use crate::scope::PredicateScope;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type InlinePredicate = Arc<dyn Fn(&str, Option<&Value>) -> bool + Send + Sync>;

/// Guard polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardMode {
    If,
    Unless,
}

/// The predicate a guard consults
#[derive(Clone)]
enum GuardTest {
    /// Zero-argument predicate resolved by name against the caller scope
    Named(String),
    /// Inline predicate over (parameter name, raw value)
    Inline(InlinePredicate),
}

/// Conditional guard attached to one rule declaration
#[derive(Clone)]
pub struct Guard {
    mode: GuardMode,
    test: GuardTest,
}

impl Guard {
    /// Validate only when the named scope predicate is true
    pub fn when(name: impl Into<String>) -> Self {
        Self {
            mode: GuardMode::If,
            test: GuardTest::Named(name.into()),
        }
    }

    /// Validate only when the named scope predicate is false
    pub fn unless(name: impl Into<String>) -> Self {
        Self {
            mode: GuardMode::Unless,
            test: GuardTest::Named(name.into()),
        }
    }

    /// Validate only when the inline predicate over (name, value) is true
    pub fn when_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            mode: GuardMode::If,
            test: GuardTest::Inline(Arc::new(predicate)),
        }
    }

    /// Validate only when the inline predicate over (name, value) is false
    pub fn unless_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            mode: GuardMode::Unless,
            test: GuardTest::Inline(Arc::new(predicate)),
        }
    }

    /// Whether the guarded rule should run its check
    ///
    /// A named predicate the scope does not know is a fail-fast
    /// configuration error, not a suppressed check.
    pub fn allows(
        &self,
        attr: &str,
        value: Option<&Value>,
        scope: &dyn PredicateScope,
    ) -> Result<bool, Error> {
        let outcome = match &self.test {
            GuardTest::Named(name) => scope
                .call_predicate(name)
                .ok_or_else(|| Error::UnknownPredicate(name.clone()))?,
            GuardTest::Inline(predicate) => predicate(attr, value),
        };

        Ok(match self.mode {
            GuardMode::If => outcome,
            GuardMode::Unless => !outcome,
        })
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = match &self.test {
            GuardTest::Named(name) => name.as_str(),
            GuardTest::Inline(_) => "<inline>",
        };
        f.debug_struct("Guard")
            .field("mode", &self.mode)
            .field("test", &test)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{EmptyScope, ScopeTable};
    use serde_json::json;

    fn scope() -> ScopeTable {
        ScopeTable::new()
            .predicate("always", || true)
            .predicate("never", || false)
    }

    #[test]
    fn test_if_follows_the_predicate() {
        assert!(Guard::when("always").allows("x", None, &scope()).unwrap());
        assert!(!Guard::when("never").allows("x", None, &scope()).unwrap());
    }

    #[test]
    fn test_unless_inverts_the_predicate() {
        assert!(!Guard::unless("always").allows("x", None, &scope()).unwrap());
        assert!(Guard::unless("never").allows("x", None, &scope()).unwrap());
    }

    #[test]
    fn test_inline_predicate_sees_name_and_value() {
        let guard = Guard::when_fn(|attr, value| attr == "token" && value.is_some());

        assert!(guard.allows("token", Some(&json!("x")), &EmptyScope).unwrap());
        assert!(!guard.allows("token", None, &EmptyScope).unwrap());
        assert!(!guard.allows("nonce", Some(&json!("x")), &EmptyScope).unwrap());
    }

    #[test]
    fn test_unknown_named_predicate_fails_fast() {
        let err = Guard::when("missing").allows("x", None, &EmptyScope).unwrap_err();
        match err {
            Error::UnknownPredicate(name) => assert_eq!(name, "missing"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
