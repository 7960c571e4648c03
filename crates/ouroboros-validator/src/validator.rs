//! The validator capability and the state every validator shares
//!
//! # Example
//!
//! ```rust
//! use ouroboros_validator::{number, Validator, Value};
//!
//! let age = number().min(0.0).max(150.0).is_whole();
//!
//! assert_eq!(age.validate_value(&Value::Int(42)), Ok(Some(Value::Int(42))));
//! assert!(age.validate_value(&Value::Float(42.5)).is_err());
//! ```

use crate::errors::{ValidationError, ValidationErrors, ValidationResult};
use crate::types::{is_absent, Value};
use std::fmt;
use tracing::debug;

// ============================================================================
// Validator Trait
// ============================================================================

/// A configured schema rule that can check untyped input
///
/// `input` is `None` for an undefined value and `Some(&Value::Null)` for an
/// explicit null. On success the normalized value is returned, `None` only
/// when an optional validator passes absent input through.
///
/// Validation never mutates the validator, so a configured tree can be
/// shared across threads.
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validator kind used in error messages (`"number"`, `"array"`, ...)
    fn kind(&self) -> &'static str;

    /// Check `input` and return its normalized form
    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>>;

    /// Configuration errors of this validator and, for composites, of every
    /// child validator
    fn errors(&self) -> ValidationErrors;

    /// Check a present value
    fn validate_value(&self, value: &Value) -> ValidationResult<Option<Value>> {
        self.validate(Some(value))
    }
}

/// Boxed validator (for composites and heterogeneous collections)
pub type BoxedValidator = Box<dyn Validator>;

impl Validator for BoxedValidator {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        (**self).validate(input)
    }

    fn errors(&self) -> ValidationErrors {
        (**self).errors()
    }
}

/// Conversions available on every sized validator
pub trait ValidatorExt: Validator + Sized + 'static {
    /// Box the validator for use in an object schema or union
    fn boxed(self) -> BoxedValidator {
        Box::new(self)
    }
}

impl<V: Validator + 'static> ValidatorExt for V {}

// ============================================================================
// Shared State
// ============================================================================

/// Outcome of the checks that precede kind-specific validation
pub(crate) enum Precheck<'a, D> {
    /// Validation is decided: configuration errors or optional pass-through
    Done(ValidationResult<Option<Value>>),
    /// Input is absent and a default is configured
    Default(&'a D),
    /// Continue with the kind-specific type and constraint checks
    Check,
}

/// Configuration errors, optional flag and default value
///
/// `D` is the stored default: a [`Value`] for most kinds, a dedicated
/// resolution mode for datetimes.
#[derive(Debug, Clone)]
pub(crate) struct ValidatorState<D> {
    kind: &'static str,
    errors: ValidationErrors,
    optional: bool,
    default: Option<D>,
}

impl<D> ValidatorState<D> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            errors: ValidationErrors::new(),
            optional: false,
            default: None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        self.kind
    }

    /// Record a configuration error raised by `operation`
    pub(crate) fn config_error(&mut self, operation: &'static str, message: impl Into<String>) {
        let error = ValidationError::config(self.kind, operation, message);
        debug!(error = %error, "configuration error recorded");
        self.errors.add(error);
    }

    /// Record every conflict reported by a constraint check
    pub(crate) fn config_errors<I, M>(&mut self, operation: &'static str, conflicts: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        for message in conflicts {
            self.config_error(operation, message);
        }
    }

    pub(crate) fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub(crate) fn default(&self) -> Option<&D> {
        self.default.as_ref()
    }

    /// Mark as optional; conflicts with an existing default
    pub(crate) fn set_optional(&mut self) {
        if self.default.is_some() {
            self.config_error("optional", "cannot have a default value");
        }
        self.optional = true;
    }

    /// Record the conflict a default has with `optional`, if any
    ///
    /// Returns `true` when the validator is already optional.
    pub(crate) fn check_default_allowed(&mut self) -> bool {
        if self.optional {
            self.config_error("default", "cannot have a default value");
        }
        self.optional
    }

    pub(crate) fn set_default(&mut self, default: D) {
        self.default = Some(default);
    }

    /// Configuration errors, then optional pass-through, then default
    pub(crate) fn precheck<'a>(&'a self, input: Option<&Value>) -> Precheck<'a, D> {
        if !self.errors.is_empty() {
            return Precheck::Done(Err(self.errors.clone()));
        }
        if !is_absent(input) {
            return Precheck::Check;
        }
        if self.optional {
            return Precheck::Done(Ok(input.cloned()));
        }
        match &self.default {
            Some(default) => Precheck::Default(default),
            None => Precheck::Check,
        }
    }
}
