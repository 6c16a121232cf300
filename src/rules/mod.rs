//! Rule engine
//!
//! This module provides the extensible core of the crate: the rule trait,
//! the registry that resolves rule names, the declaration types, and the
//! built-in rules.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Rule Registry                     │
//! ├─────────────────────────────────────────┤
//! │  • Resolve rule names to factories      │
//! │  • Construct one rule per check         │
//! │  • Open for caller-registered rules     │
//! └────────┬────────────────────────────────┘
//!          │
//!          ├──> Built-in rules (required, minlength, maxlength, type)
//!          └──> Caller-registered rules
//! ```
//!
//! Declarations ([`RuleSet`]) name rules and their arguments; each entry may
//! carry a conditional [`Guard`] that can suppress the check entirely.

pub mod builtin;
pub mod guard;
pub mod registry;
pub mod spec;
pub mod traits;

// Re-export commonly used types
pub use guard::Guard;
pub use registry::{RuleFactory, RuleRegistry};
pub use spec::{RuleArg, RuleSet, RuleSpec};
pub use traits::{string_form, Rule};
