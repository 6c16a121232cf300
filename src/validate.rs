//! Orchestrator
//!
//! [`validate_params`] runs one validation pass: it opens a session, hands
//! the caller a [`ParamValidator`] to declare rules against parameters, and
//! terminally either returns a passing verdict or fails with the complete
//! report. A pass has exactly two phases, accumulating and a single
//! terminal passed/failed transition; no partial report is visible before
//! the terminal one.

use crate::error::Error;
use crate::params::ParamSource;
use crate::report::ParameterValidationError;
use crate::rules::{RuleRegistry, RuleSet};
use crate::scope::PredicateScope;
use crate::session::{ReportSession, ValidationSession};
use tracing::debug;

/// Factory producing the session for one validation pass
pub type SessionFactory = Box<dyn Fn(u16) -> Box<dyn ValidationSession> + Send + Sync>;

/// Options for one validation pass
pub struct ValidationOptions {
    /// Status code a failing report is carried with
    pub response_code: u16,

    /// Substitute session implementation, when the caller wants a different
    /// reporting shape
    pub session_factory: Option<SessionFactory>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the failure status code, builder-style
    pub fn response_code(mut self, code: u16) -> Self {
        self.response_code = code;
        self
    }

    /// Substitute the session implementation, builder-style
    pub fn session_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(u16) -> Box<dyn ValidationSession> + Send + Sync + 'static,
    {
        self.session_factory = Some(Box::new(factory));
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            response_code: 400,
            session_factory: None,
        }
    }
}

impl std::fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("response_code", &self.response_code)
            .field("session_factory", &self.session_factory.is_some())
            .finish()
    }
}

/// Declaration context handed to the caller for the duration of one pass
pub struct ParamValidator<'a> {
    registry: &'a RuleRegistry,
    params: &'a dyn ParamSource,
    scope: &'a dyn PredicateScope,
    session: Box<dyn ValidationSession>,
}

impl ParamValidator<'_> {
    /// Declare rules for one parameter
    ///
    /// Rules are evaluated in declaration order, each against the current
    /// raw value from the parameter source. Violations accumulate: a failed
    /// rule never short-circuits the rules after it, on this parameter or
    /// any other. An unknown rule name or a malformed argument aborts the
    /// pass immediately.
    pub fn param(&mut self, attr: &str, rules: RuleSet) -> Result<(), Error> {
        for (rule_name, spec) in rules.iter() {
            let factory = self.registry.resolve(rule_name)?;
            let value = self.params.get(attr);
            let rule = factory(attr, value.as_ref(), &spec.arg)?;

            if let Some(guard) = &spec.guard {
                if !guard.allows(attr, value.as_ref(), self.scope)? {
                    debug!(attr, rule = rule_name, "Rule suppressed by guard");
                    continue;
                }
            }

            if !rule.validate() {
                debug!(attr, rule = rule_name, "Rule failed");
                self.session.add_error(attr, rule.violation());
            }
        }
        Ok(())
    }
}

/// Run one validation pass
///
/// # Arguments
/// * `registry` - rule implementations, shared across passes
/// * `params` - the request's raw parameter values
/// * `scope` - named predicates for conditional guards
/// * `options` - failure status code and optional session substitute
/// * `declare` - the caller's `param` declarations
///
/// # Returns
/// * `Ok(())` - every declared rule held
/// * `Err(Error::Validation(_))` - one or more rules failed; the error
///   carries the complete report
/// * any other `Err` - fail-fast configuration error
pub fn validate_params<F>(
    registry: &RuleRegistry,
    params: &dyn ParamSource,
    scope: &dyn PredicateScope,
    options: ValidationOptions,
    declare: F,
) -> Result<(), Error>
where
    F: FnOnce(&mut ParamValidator<'_>) -> Result<(), Error>,
{
    let session = match &options.session_factory {
        Some(factory) => factory(options.response_code),
        None => Box::new(ReportSession::new(options.response_code)),
    };

    let mut validator = ParamValidator {
        registry,
        params,
        scope,
        session,
    };
    declare(&mut validator)?;

    if validator.session.is_valid() {
        Ok(())
    } else {
        Err(Error::Validation(ParameterValidationError::new(
            validator.session.finish(),
        )))
    }
}
