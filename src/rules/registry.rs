//! Rule registry - central management of rule implementations
//!
//! Resolution is an exact-name lookup into an explicit table of factories,
//! populated with the builtins at construction and open for extension under
//! new names. A declaration referencing an unregistered name is a fail-fast
//! configuration error.

use super::builtin;
use super::spec::RuleArg;
use super::traits::Rule;
use crate::error::Error;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Factory producing one rule instance per (parameter, value, argument) check
///
/// Factories validate the argument's shape up front, so a declaration like
/// `minlength: true` fails before any value is inspected.
pub type RuleFactory =
    Box<dyn Fn(&str, Option<&Value>, &RuleArg) -> Result<Box<dyn Rule>, Error> + Send + Sync>;

/// Registry of all known rules
pub struct RuleRegistry {
    factories: HashMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rules registered
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register_builtin_rules();
        registry
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    fn register_builtin_rules(&mut self) {
        self.register("required", Box::new(builtin::RequiredRule::from_arg));
        self.register("minlength", Box::new(builtin::MinlengthRule::from_arg));
        self.register("maxlength", Box::new(builtin::MaxlengthRule::from_arg));
        self.register("type", Box::new(builtin::TypeRule::from_arg));
    }

    /// Register a rule under a name, replacing any previous registration
    pub fn register(&mut self, name: &str, factory: RuleFactory) {
        debug!("Registering rule: {}", name);
        self.factories.insert(name.to_string(), factory);
    }

    /// Look up the factory for a rule name
    pub fn resolve(&self, name: &str) -> Result<&RuleFactory, Error> {
        self.factories
            .get(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    /// All registered rule names
    pub fn rule_names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Violation;
    use serde_json::json;

    #[test]
    fn test_builtins_are_registered() {
        let registry = RuleRegistry::new();
        for name in ["required", "minlength", "maxlength", "type"] {
            assert!(registry.resolve(name).is_ok(), "missing builtin: {}", name);
        }
    }

    #[test]
    fn test_unknown_rule_fails_fast() {
        let registry = RuleRegistry::new();
        let err = registry.resolve("fancylength").err().unwrap();
        match err {
            Error::UnknownRule(name) => assert_eq!(name, "fancylength"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        assert!(RuleRegistry::empty().resolve("required").is_err());
    }

    struct EvenLengthRule {
        even: bool,
        violation: Violation,
    }

    impl Rule for EvenLengthRule {
        fn name(&self) -> &str {
            "evenlength"
        }

        fn validate(&self) -> bool {
            self.even
        }

        fn violation(&self) -> Violation {
            self.violation.clone()
        }
    }

    #[test]
    fn test_registry_is_open_for_extension() {
        let mut registry = RuleRegistry::new();
        registry.register(
            "evenlength",
            Box::new(|attr, value, _arg| {
                let length = crate::rules::traits::string_form(value).chars().count();
                Ok(Box::new(EvenLengthRule {
                    even: length % 2 == 0,
                    violation: Violation::new(
                        format!("{}_length_is_odd", attr),
                        format!("{} must have an even number of characters.", attr),
                    ),
                }))
            }),
        );

        let factory = registry.resolve("evenlength").unwrap();
        let rule = factory("code", Some(&json!("abcd")), &RuleArg::Flag(true)).unwrap();
        assert!(rule.validate());

        let rule = factory("code", Some(&json!("abc")), &RuleArg::Flag(true)).unwrap();
        assert!(!rule.validate());
        assert_eq!(rule.violation().error_code, "code_length_is_odd");
    }
}
