//! Built-in rules
//!
//! The four rules every deployment gets: presence, length bounds, and type
//! checks. Each lives in its own file and is registered by name in
//! [`RuleRegistry::new`](crate::rules::RuleRegistry::new).

pub mod length;
pub mod required;
pub mod typecheck;

pub use length::{MaxlengthRule, MinlengthRule};
pub use required::RequiredRule;
pub use typecheck::{TypeRule, TypeTag};
