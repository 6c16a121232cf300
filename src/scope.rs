//! Caller scope for named guard predicates
//!
//! A rule declaration can name a zero-argument predicate ("only validate
//! when `custom_validator` says so"). Callers supply those predicates
//! through an explicit capability interface rather than by exposing an
//! arbitrary object for dynamic dispatch.

use std::collections::HashMap;
use std::fmt;

/// Resolves named zero-argument predicates for conditional guards
pub trait PredicateScope {
    /// Call the named predicate, `None` when the scope does not know it
    fn call_predicate(&self, name: &str) -> Option<bool>;
}

/// Scope backed by a lookup table of named predicate closures
#[derive(Default)]
pub struct ScopeTable {
    predicates: HashMap<String, Box<dyn Fn() -> bool + Send + Sync>>,
}

impl ScopeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named predicate, builder-style
    pub fn predicate<F>(mut self, name: &str, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.to_string(), Box::new(predicate));
        self
    }
}

impl PredicateScope for ScopeTable {
    fn call_predicate(&self, name: &str) -> Option<bool> {
        self.predicates.get(name).map(|predicate| predicate())
    }
}

impl fmt::Debug for ScopeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeTable")
            .field("predicates", &self.predicates.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Scope that knows no predicates, for declarations without named guards
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyScope;

impl PredicateScope for EmptyScope {
    fn call_predicate(&self, _name: &str) -> Option<bool> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_resolves_registered_predicates() {
        let scope = ScopeTable::new()
            .predicate("always", || true)
            .predicate("never", || false);

        assert_eq!(scope.call_predicate("always"), Some(true));
        assert_eq!(scope.call_predicate("never"), Some(false));
        assert_eq!(scope.call_predicate("unknown"), None);
    }

    #[test]
    fn test_empty_scope_knows_nothing() {
        assert_eq!(EmptyScope.call_predicate("anything"), None);
    }
}
