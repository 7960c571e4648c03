//! Ouroboros Validator
//!
//! Composable schema validators for untyped, JSON-like data.
//!
//! Build a validator tree with the constructor functions below, configure it
//! through chained builder calls, then validate any [`Value`] against it.
//! Misconfiguration (for example `min` greater than `max`) does not panic:
//! each builder records a configuration error, visible through
//! [`Validator::errors`], and every later validation fails with those errors.
//!
//! Validation never mutates its input. On success it returns a normalized
//! copy in which defaults have been filled in at every nesting level.
//!
//! # Features
//!
//! - **Default**: Core validators over [`Value`]
//! - **serde**: Conversions between [`Value`] and `serde_json::Value`
//!
//! # Example
//!
//! ```rust
//! use ouroboros_validator::{array, boolean, number, object, string, Validator, ValidatorExt, Value};
//!
//! let schema = object([
//!     ("id", number().min(1.0).is_whole().boxed()),
//!     ("name", string().min_length(1).boxed()),
//!     ("tags", array(string()).max_length(4).boxed()),
//!     ("active", boolean().default(true).boxed()),
//! ]);
//! assert!(schema.errors().is_empty());
//!
//! let input = Value::Object(vec![
//!     ("id".into(), Value::Int(7)),
//!     ("name".into(), Value::from("widget")),
//!     ("tags".into(), Value::from(vec!["a", "b"])),
//! ]);
//!
//! let output = schema.validate_value(&input).unwrap().unwrap();
//! assert_eq!(output.get("active"), Some(&Value::Bool(true)));
//!
//! // Configuration errors surface on every validation
//! let broken = number().min(10.0).max(1.0);
//! let err = broken.validate_value(&Value::Int(5)).unwrap_err();
//! assert_eq!(err.messages(), vec!["number.max() must be greater than number.min()"]);
//! ```

// Public modules
pub mod composites;
pub mod config;
pub mod constraints;
pub mod errors;
pub mod formats;
pub mod primitives;
pub mod types;
pub mod validator;

use std::any::Any;

// Re-export commonly used types
pub use composites::{ArrayValidator, ObjectValidator, OrValidator};
pub use config::{ErrorMode, ExtraFields, ValidationConfig};
pub use constraints::{LengthConstraints, NumericConstraints};
pub use errors::{ErrorType, ValidationError, ValidationErrors, ValidationResult};
pub use primitives::{
    BooleanValidator, DatetimeDefault, DatetimeValidator, EqualValidator, InstanceOfValidator,
    NumberValidator, StringValidator,
};
pub use types::{is_absent, Instance, Value};
pub use validator::{BoxedValidator, Validator, ValidatorExt};

// ============================================================================
// Constructors
// ============================================================================

/// Numbers (`Int` or non-NaN `Float`)
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// Strings
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// Booleans
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// Datetimes, numbers (epoch milliseconds) and parseable date strings,
/// normalized to [`Value::DateTime`]
pub fn datetime() -> DatetimeValidator {
    DatetimeValidator::new()
}

/// Lists whose every element passes `element`
pub fn array<V: Validator + 'static>(element: V) -> ArrayValidator {
    ArrayValidator::new(Box::new(element))
}

/// Objects with the given declared fields, checked in order
///
/// ```rust
/// use ouroboros_validator::{number, object, ValidatorExt};
///
/// let point = object([("x", number().boxed()), ("y", number().boxed())]);
/// assert_eq!(point.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
pub fn object<I, K>(fields: I) -> ObjectValidator
where
    I: IntoIterator<Item = (K, BoxedValidator)>,
    K: Into<String>,
{
    fields.into_iter().collect()
}

/// [`Value::Instance`] values wrapping a `T` (or [`Value::DateTime`] when
/// `T` is `chrono::DateTime<Utc>`)
pub fn instance_of<T: Any>() -> InstanceOfValidator {
    InstanceOfValidator::new::<T>()
}

/// Values strictly equal to `literal`
pub fn equal(literal: impl Into<Value>) -> EqualValidator {
    EqualValidator::new(literal.into())
}

/// Values accepted by any alternative; the first accepting one wins
pub fn or<I>(alternatives: I) -> OrValidator
where
    I: IntoIterator<Item = BoxedValidator>,
{
    OrValidator::new(alternatives.into_iter().collect())
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
