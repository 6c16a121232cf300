//! # Paramguard - Declarative request-parameter validation
//!
//! Paramguard lets a request handler declare, per request, which named
//! parameters must satisfy which rules (presence, length bounds, type,
//! with optional "only validate if" conditions) and aggregates every
//! violation into a single structured report instead of failing on the
//! first one.
//!
//! The crate is transport-agnostic: it is handed parameter names and raw
//! values through a [`ParamSource`], and it reports failure as a typed
//! error carrying an HTTP-style status code plus a body payload. Routing,
//! request parsing, and response writing belong to the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  validate_params (orchestrator)              │
//! ├──────────────────────────────────────────────┤
//! │  • One session per pass                      │
//! │  • param() declarations, in order            │
//! │  • Guard evaluation, then rule evaluation    │
//! │  • Terminal verdict: Ok or full report       │
//! └───────┬──────────────────────────────────────┘
//!         │
//!         ├──> Rule Registry ──> required / minlength / maxlength / type
//!         ├──> PredicateScope (named guard predicates)
//!         └──> ValidationSession ──> ValidationReport
//! ```
//!
//! # Example
//!
//! ```rust
//! use paramguard::{validate_params, Error, RuleRegistry, RuleSet, ScopeTable, ValidationOptions};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let registry = RuleRegistry::new();
//!
//! let mut params = HashMap::new();
//! params.insert("login_id".to_string(), "ab".to_string());
//!
//! let scope = ScopeTable::new().predicate("custom_validator", || false);
//!
//! let outcome = validate_params(&registry, &params, &scope, ValidationOptions::default(), |v| {
//!     v.param(
//!         "login_id",
//!         RuleSet::from_value(json!({ "required": true, "minlength": 3, "maxlength": 5 }))?,
//!     )?;
//!     v.param(
//!         "token",
//!         RuleSet::from_value(json!({ "required": { "if": "custom_validator" } }))?,
//!     )
//! });
//!
//! match outcome {
//!     Err(Error::Validation(err)) => {
//!         assert_eq!(err.status_code(), 400);
//!         assert_eq!(err.errors()["login_id"][0].error_code, "login_id_is_too_short");
//!         // response body for the transport layer:
//!         let _body = err.body();
//!     }
//!     other => panic!("expected a validation failure, got {:?}", other),
//! }
//! ```

pub mod error;
pub mod params;
pub mod report;
pub mod rules;
pub mod scope;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use error::Error;
pub use params::ParamSource;
pub use report::{ParameterValidationError, ValidationReport, Violation};
pub use rules::{Guard, Rule, RuleArg, RuleFactory, RuleRegistry, RuleSet, RuleSpec};
pub use scope::{EmptyScope, PredicateScope, ScopeTable};
pub use session::{ReportSession, ValidationSession};
pub use validate::{validate_params, ParamValidator, SessionFactory, ValidationOptions};
