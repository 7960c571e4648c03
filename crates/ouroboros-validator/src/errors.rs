//! Validation error types
//!
//! Every validator reports failure through [`ValidationErrors`], an ordered
//! list of [`ValidationError`] entries. The same type carries configuration
//! errors (recorded by builder calls) and evaluation errors (produced by
//! `validate`), told apart by [`ErrorType`].

use std::fmt;
use thiserror::Error;

// ============================================================================
// Validation Result
// ============================================================================

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// Validation Errors Collection
// ============================================================================

/// Ordered collection of validation errors
///
/// Order is insertion order. For evaluation errors the first entry is the
/// one that stopped validation.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{} validation error(s)", .errors.len())]
pub struct ValidationErrors {
    /// List of individual validation errors
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Collection holding a single error
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add multiple validation errors
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Merge another ValidationErrors into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Convert to Result - Ok if no errors, Err if there are errors
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Get errors as a slice
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First recorded error, if any
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterate over the errors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Human-readable messages, one per error
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// Single Validation Error
// ============================================================================

/// A single validation error
///
/// Identifies the validator kind (`"number"`, `"array"`, ...), the operation
/// that produced it (a builder name such as `"min"`, or `"validate"`) and
/// the violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{validator}.{operation}() {message}")]
pub struct ValidationError {
    /// Validator kind that produced the error
    pub validator: &'static str,

    /// Operation that produced the error
    pub operation: &'static str,

    /// Human-readable description of the violated rule
    pub message: String,

    /// Error type classification
    pub error_type: ErrorType,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(
        validator: &'static str,
        operation: &'static str,
        message: impl Into<String>,
        error_type: ErrorType,
    ) -> Self {
        Self {
            validator,
            operation,
            message: message.into(),
            error_type,
        }
    }

    /// Create a configuration error raised by a builder call
    pub fn config(validator: &'static str, operation: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, operation, message, ErrorType::Config)
    }

    /// Create a type error raised by `validate`
    pub fn type_error(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, "validate", message, ErrorType::TypeError)
    }

    /// Create a value (constraint) error raised by `validate`
    pub fn value_error(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, "validate", message, ErrorType::ValueError)
    }

    /// Whether this error was recorded at configuration time
    pub fn is_config(&self) -> bool {
        self.error_type == ErrorType::Config
    }
}

// ============================================================================
// Error Type Classification
// ============================================================================

/// Classification of validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorType {
    /// Invalid or inconsistent builder argument
    #[cfg_attr(feature = "serde", serde(rename = "config_error"))]
    Config,

    /// Type mismatch (e.g., expected string, got integer)
    #[cfg_attr(feature = "serde", serde(rename = "type_error"))]
    TypeError,

    /// Constraint violation (e.g., string too long, number out of range)
    #[cfg_attr(feature = "serde", serde(rename = "value_error"))]
    ValueError,

    /// String could not be parsed into the expected format
    #[cfg_attr(feature = "serde", serde(rename = "format_error"))]
    FormatError,

    /// An array element failed its element validator
    #[cfg_attr(feature = "serde", serde(rename = "element_error"))]
    Element,

    /// An object field failed its field validator
    #[cfg_attr(feature = "serde", serde(rename = "field_error"))]
    Field,

    /// Undeclared object key under [`ExtraFields::Forbid`](crate::config::ExtraFields::Forbid)
    #[cfg_attr(feature = "serde", serde(rename = "extra_forbidden"))]
    ExtraForbidden,

    /// No union alternative accepted the input
    #[cfg_attr(feature = "serde", serde(rename = "no_match"))]
    NoMatch,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config_error"),
            Self::TypeError => write!(f, "type_error"),
            Self::ValueError => write!(f, "value_error"),
            Self::FormatError => write!(f, "format_error"),
            Self::Element => write!(f, "element_error"),
            Self::Field => write!(f, "field_error"),
            Self::ExtraForbidden => write!(f, "extra_forbidden"),
            Self::NoMatch => write!(f, "no_match"),
        }
    }
}
