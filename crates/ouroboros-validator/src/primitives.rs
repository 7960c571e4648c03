//! Primitive validators
//!
//! Number, string, boolean, datetime, type membership and literal equality.
//! None of these hold child validators.

use crate::constraints::{LengthConstraints, NumericConstraints};
use crate::errors::{ErrorType, ValidationError, ValidationErrors, ValidationResult};
use crate::formats;
use crate::types::Value;
use crate::validator::{Precheck, Validator, ValidatorState};
use chrono::{DateTime, Utc};
use std::any::{Any, TypeId};

// ============================================================================
// Number
// ============================================================================

/// Accepts `Int` and non-NaN `Float` values within optional bounds
#[derive(Debug, Clone)]
pub struct NumberValidator {
    state: ValidatorState<Value>,
    constraints: NumericConstraints,
}

impl NumberValidator {
    pub(crate) fn new() -> Self {
        Self {
            state: ValidatorState::new("number"),
            constraints: NumericConstraints::default(),
        }
    }

    fn default_number(&self) -> Option<f64> {
        self.state.default().and_then(Value::as_f64)
    }

    /// Value returned for absent input
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.state.check_default_allowed();
        match value.as_f64() {
            Some(x) if !x.is_nan() => {
                let conflicts = self.constraints.default_conflicts(x);
                self.state.config_errors("default", conflicts);
            }
            _ => self.state.config_error("default", "must be a number"),
        }
        self.state.set_default(value);
        self
    }

    /// Inclusive lower bound
    pub fn min(mut self, x: f64) -> Self {
        let conflicts = self.constraints.minimum_conflicts(x, self.default_number());
        self.state.config_errors("min", conflicts);
        self.constraints.minimum = Some(x);
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, x: f64) -> Self {
        let conflicts = self.constraints.maximum_conflicts(x, self.default_number());
        self.state.config_errors("max", conflicts);
        self.constraints.maximum = Some(x);
        self
    }

    /// Only accept integral values
    pub fn is_whole(mut self) -> Self {
        let conflicts = self.constraints.whole_conflicts(self.default_number());
        self.state.config_errors("is_whole", conflicts);
        self.constraints.whole = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    pub fn constraints(&self) -> &NumericConstraints {
        &self.constraints
    }
}

impl Validator for NumberValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        match input {
            Some(Value::Int(i)) => self.constraints.check_int(*i)?,
            Some(Value::Float(x)) if !x.is_nan() => self.constraints.check(*x)?,
            _ => return Err(ValidationError::type_error("number", "invalid number").into()),
        }

        Ok(input.cloned())
    }

    fn errors(&self) -> ValidationErrors {
        self.state.errors().clone()
    }
}

// ============================================================================
// String
// ============================================================================

/// Accepts strings within length bounds and an optional character set
///
/// Lengths count characters, not bytes.
#[derive(Debug, Clone)]
pub struct StringValidator {
    state: ValidatorState<Value>,
    lengths: LengthConstraints,
    charset: Option<String>,
}

impl StringValidator {
    pub(crate) fn new() -> Self {
        Self {
            state: ValidatorState::new("string"),
            lengths: LengthConstraints::default(),
            charset: None,
        }
    }

    fn default_str(&self) -> Option<&str> {
        self.state.default().and_then(Value::as_str)
    }

    fn default_len(&self) -> Option<usize> {
        self.default_str().map(|s| s.chars().count())
    }

    fn outside_charset(charset: &str, s: &str) -> bool {
        s.chars().any(|c| !charset.contains(c))
    }

    /// Value returned for absent input
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.state.check_default_allowed();
        match &value {
            Value::String(s) => {
                let conflicts = self.lengths.default_conflicts("string", s.chars().count());
                self.state.config_errors("default", conflicts);
                if let Some(charset) = &self.charset {
                    if Self::outside_charset(charset, s) {
                        self.state
                            .config_error("default", "must only use characters of string.in_charset()");
                    }
                }
            }
            _ => self.state.config_error("default", "must be a string"),
        }
        self.state.set_default(value);
        self
    }

    pub fn min_length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.min_length_conflicts("string", x, self.default_len());
        self.state.config_errors("min_length", conflicts);
        self.lengths.min_length = Some(x);
        self
    }

    pub fn max_length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.max_length_conflicts("string", x, self.default_len());
        self.state.config_errors("max_length", conflicts);
        self.lengths.max_length = Some(x);
        self
    }

    /// Exact length
    pub fn length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.length_conflicts("string", x, self.default_len());
        self.state.config_errors("length", conflicts);
        self.lengths.length = Some(x);
        self
    }

    /// Restrict values to the characters of `charset`
    pub fn in_charset(mut self, charset: impl Into<String>) -> Self {
        let charset = charset.into();
        if charset.is_empty() {
            self.state
                .config_error("in_charset", "must be a string with at least one character");
        }
        if self
            .default_str()
            .is_some_and(|d| Self::outside_charset(&charset, d))
        {
            self.state
                .config_error("in_charset", "must contain every character of string.default()");
        }
        self.charset = Some(charset);
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    pub fn constraints(&self) -> &LengthConstraints {
        &self.lengths
    }
}

impl Validator for StringValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        let Some(s) = input.and_then(Value::as_str) else {
            return Err(ValidationError::type_error("string", "invalid string").into());
        };
        self.lengths.check("string", s.chars().count())?;

        if let Some(charset) = &self.charset {
            if Self::outside_charset(charset, s) {
                return Err(ValidationError::value_error(
                    "string",
                    "string contains invalid characters",
                )
                .into());
            }
        }

        Ok(input.cloned())
    }

    fn errors(&self) -> ValidationErrors {
        self.state.errors().clone()
    }
}

// ============================================================================
// Boolean
// ============================================================================

#[derive(Debug, Clone)]
pub struct BooleanValidator {
    state: ValidatorState<Value>,
}

impl BooleanValidator {
    pub(crate) fn new() -> Self {
        Self {
            state: ValidatorState::new("boolean"),
        }
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.state.check_default_allowed();
        if value.as_bool().is_none() {
            self.state.config_error("default", "must be a boolean");
        }
        self.state.set_default(value);
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }
}

impl Validator for BooleanValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        match input {
            Some(Value::Bool(_)) => Ok(input.cloned()),
            _ => Err(ValidationError::type_error("boolean", "invalid boolean").into()),
        }
    }

    fn errors(&self) -> ValidationErrors {
        self.state.errors().clone()
    }
}

// ============================================================================
// Datetime
// ============================================================================

/// How a datetime default resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeDefault {
    /// A fixed instant
    At(DateTime<Utc>),
    /// Milliseconds from the moment of validation
    Offset(i64),
}

impl DatetimeDefault {
    /// Resolve against the current instant
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(dt) => Some(*dt),
            Self::Offset(ms) => Utc::now()
                .timestamp_millis()
                .checked_add(*ms)
                .and_then(DateTime::<Utc>::from_timestamp_millis),
        }
    }
}

/// Accepts datetimes, epoch milliseconds and parseable date strings
///
/// The output is always a `Value::DateTime`.
#[derive(Debug, Clone)]
pub struct DatetimeValidator {
    state: ValidatorState<DatetimeDefault>,
}

impl DatetimeValidator {
    pub(crate) fn new() -> Self {
        Self {
            state: ValidatorState::new("datetime"),
        }
    }

    /// Default for absent input
    ///
    /// A datetime (or a parseable string) is a fixed instant. A number is an
    /// offset in milliseconds from the time of each `validate` call, and
    /// `Null` means "now".
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.state.check_default_allowed();
        let resolved = match value.into() {
            Value::DateTime(dt) => Some(DatetimeDefault::At(dt)),
            Value::String(s) => match formats::parse_datetime(&s) {
                Some(dt) => Some(DatetimeDefault::At(dt)),
                None => {
                    self.state.config_error("default", "must be a valid date string");
                    None
                }
            },
            Value::Int(ms) => Some(DatetimeDefault::Offset(ms)),
            Value::Float(ms) if ms.is_finite() => Some(DatetimeDefault::Offset(ms.trunc() as i64)),
            Value::Float(_) => {
                self.state.config_error("default", "must be a number");
                None
            }
            Value::Null => Some(DatetimeDefault::Offset(0)),
            _ => {
                self.state
                    .config_error("default", "must be a datetime, number, string, or null");
                None
            }
        };
        if let Some(default) = resolved {
            if default.resolve().is_none() {
                self.state
                    .config_error("default", "must be within the representable date range");
            }
            self.state.set_default(default);
        }
        self
    }

    /// Default to the instant of validation
    pub fn default_now(self) -> Self {
        self.default(Value::Null)
    }

    /// Default to `ms` milliseconds after the instant of validation
    pub fn default_offset(self, ms: i64) -> Self {
        self.default(Value::Int(ms))
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    fn invalid_date(error_type: ErrorType) -> ValidationErrors {
        ValidationError::new("datetime", "validate", "invalid date", error_type).into()
    }
}

impl Validator for DatetimeValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => {
                return match default.resolve() {
                    Some(dt) => Ok(Some(Value::DateTime(dt))),
                    None => Err(ValidationError::value_error("datetime", "invalid default").into()),
                };
            }
            Precheck::Check => {}
        }

        let parsed = match input {
            Some(Value::DateTime(dt)) => Some(*dt),
            Some(Value::Int(ms)) => DateTime::<Utc>::from_timestamp_millis(*ms),
            Some(Value::Float(ms)) => formats::from_epoch_millis(*ms),
            Some(Value::String(s)) => {
                return formats::parse_datetime(s)
                    .map(|dt| Some(Value::DateTime(dt)))
                    .ok_or_else(|| Self::invalid_date(ErrorType::FormatError));
            }
            _ => return Err(Self::invalid_date(ErrorType::TypeError)),
        };

        parsed
            .map(|dt| Some(Value::DateTime(dt)))
            .ok_or_else(|| Self::invalid_date(ErrorType::ValueError))
    }

    fn errors(&self) -> ValidationErrors {
        self.state.errors().clone()
    }
}

// ============================================================================
// InstanceOf
// ============================================================================

/// Accepts values holding a designated Rust type
///
/// See [`Instance`](crate::Instance).
#[derive(Debug, Clone)]
pub struct InstanceOfValidator {
    state: ValidatorState<Value>,
    type_id: TypeId,
    type_name: &'static str,
}

impl InstanceOfValidator {
    pub(crate) fn new<T: Any>() -> Self {
        Self {
            state: ValidatorState::new("instance_of"),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.state.check_default_allowed();
        if !value.is_instance_of(self.type_id) {
            let message = format!("must be an instance of {}", self.type_name);
            self.state.config_error("default", message);
        }
        self.state.set_default(value);
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    /// Name of the designated type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Validator for InstanceOfValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        match input {
            Some(value) if value.is_instance_of(self.type_id) => Ok(Some(value.clone())),
            _ => Err(ValidationError::type_error("instance_of", "invalid instance").into()),
        }
    }

    fn errors(&self) -> ValidationErrors {
        self.state.errors().clone()
    }
}

// ============================================================================
// Equal
// ============================================================================

/// Accepts only input strictly equal to a literal
#[derive(Debug, Clone)]
pub struct EqualValidator {
    literal: Value,
}

impl EqualValidator {
    pub(crate) fn new(literal: Value) -> Self {
        Self { literal }
    }

    pub fn literal(&self) -> &Value {
        &self.literal
    }
}

impl Validator for EqualValidator {
    fn kind(&self) -> &'static str {
        "equal"
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match input {
            Some(value) if value.strict_eq(&self.literal) => Ok(Some(value.clone())),
            _ => Err(ValidationError::value_error("equal", "values are not equal").into()),
        }
    }

    fn errors(&self) -> ValidationErrors {
        ValidationErrors::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Instance;
    use chrono::TimeZone;

    fn messages(result: ValidationResult<Option<Value>>) -> Vec<String> {
        result.expect_err("expected validation to fail").messages()
    }

    // ------------------------------------------------------------------------
    // Number
    // ------------------------------------------------------------------------

    #[test]
    fn test_number_passes_value_unchanged() {
        let v = NumberValidator::new();
        assert_eq!(v.validate_value(&Value::Int(7)), Ok(Some(Value::Int(7))));
        assert_eq!(v.validate_value(&Value::Float(-2.5)), Ok(Some(Value::Float(-2.5))));
    }

    #[test]
    fn test_number_bounds_exact_for_large_ints() {
        let v = NumberValidator::new().max(9_007_199_254_740_992.0);
        assert!(v.validate_value(&Value::Int(9_007_199_254_740_992)).is_ok());
        assert_eq!(
            messages(v.validate_value(&Value::Int(9_007_199_254_740_993))),
            vec!["number.validate() number is greater than maximum"]
        );
    }

    #[test]
    fn test_number_rejects_nan_and_non_numbers() {
        let v = NumberValidator::new();
        assert_eq!(
            messages(v.validate_value(&Value::Float(f64::NAN))),
            vec!["number.validate() invalid number"]
        );
        assert!(v.validate_value(&Value::String("5".into())).is_err());
        assert!(v.validate_value(&Value::Bool(true)).is_err());
        assert!(v.validate(None).is_err());
        assert!(v.validate(Some(&Value::Null)).is_err());
    }

    #[test]
    fn test_number_bounds_and_whole() {
        let v = NumberValidator::new().min(0.0).max(10.0).is_whole();
        assert!(v.errors().is_empty());
        assert!(v.validate_value(&Value::Int(0)).is_ok());
        assert!(v.validate_value(&Value::Float(10.0)).is_ok());
        assert_eq!(
            messages(v.validate_value(&Value::Int(-1))),
            vec!["number.validate() number is less than minimum"]
        );
        assert_eq!(
            messages(v.validate_value(&Value::Int(11))),
            vec!["number.validate() number is greater than maximum"]
        );
        assert_eq!(
            messages(v.validate_value(&Value::Float(2.5))),
            vec!["number.validate() number is not a whole number"]
        );
    }

    #[test]
    fn test_number_config_cross_checks() {
        let v = NumberValidator::new().default(5).min(6.0);
        assert_eq!(v.errors().messages(), vec!["number.min() must be less than number.default()"]);

        let v = NumberValidator::new().default(5).max(4.0);
        assert_eq!(
            v.errors().messages(),
            vec!["number.max() must be greater than number.default()"]
        );

        let v = NumberValidator::new().min(3.0).max(2.0);
        assert_eq!(v.errors().messages(), vec!["number.max() must be greater than number.min()"]);

        let v = NumberValidator::new().default(2.5).is_whole();
        assert_eq!(
            v.errors().messages(),
            vec!["number.is_whole() default value must be a whole number"]
        );

        let v = NumberValidator::new().min(1.0).max(3.0).default(4);
        assert_eq!(v.errors().messages(), vec!["number.default() must be less than number.max()"]);

        let v = NumberValidator::new().default("5");
        assert_eq!(v.errors().messages(), vec!["number.default() must be a number"]);

        let v = NumberValidator::new().min(f64::NAN);
        assert_eq!(v.errors().messages(), vec!["number.min() must be a number"]);
    }

    #[test]
    fn test_number_default_and_optional_are_exclusive() {
        let v = NumberValidator::new().default(1).optional();
        assert_eq!(v.errors().messages(), vec!["number.optional() cannot have a default value"]);

        let v = NumberValidator::new().optional().default(1);
        assert_eq!(v.errors().messages(), vec!["number.default() cannot have a default value"]);
        assert_eq!(v.validate(None), Err(v.errors()));
    }

    #[test]
    fn test_number_default_for_absent_input() {
        let v = NumberValidator::new().default(3);
        assert_eq!(v.validate(None), Ok(Some(Value::Int(3))));
        assert_eq!(v.validate(Some(&Value::Null)), Ok(Some(Value::Int(3))));
        assert_eq!(v.validate_value(&Value::Int(9)), Ok(Some(Value::Int(9))));
    }

    // ------------------------------------------------------------------------
    // String
    // ------------------------------------------------------------------------

    #[test]
    fn test_string_constraints() {
        let v = StringValidator::new()
            .min_length(3)
            .max_length(5)
            .length(5)
            .in_charset("helo");
        assert!(v.errors().is_empty());

        let hello = Value::from("hello");
        assert_eq!(v.validate_value(&hello), Ok(Some(hello.clone())));
        assert_eq!(
            messages(v.validate_value(&Value::from("world"))),
            vec!["string.validate() string contains invalid characters"]
        );
        assert_eq!(
            messages(v.validate_value(&Value::from("hell"))),
            vec!["string.validate() string is not the correct length"]
        );
        assert_eq!(
            messages(v.validate_value(&Value::from("helloo"))),
            vec!["string.validate() string is greater than maximum length"]
        );
        assert_eq!(
            messages(v.validate_value(&Value::from("he"))),
            vec!["string.validate() string is less than minimum length"]
        );
    }

    #[test]
    fn test_string_counts_characters() {
        let v = StringValidator::new().length(3);
        assert!(v.validate_value(&Value::from("héé")).is_ok());
        assert!(v.validate_value(&Value::from("日本語")).is_ok());
    }

    #[test]
    fn test_string_rejects_non_strings() {
        let v = StringValidator::new();
        assert_eq!(
            messages(v.validate_value(&Value::Int(1))),
            vec!["string.validate() invalid string"]
        );
        assert!(v.validate(None).is_err());
    }

    #[test]
    fn test_string_config_cross_checks() {
        let v = StringValidator::new().default("abc").min_length(4);
        assert_eq!(
            v.errors().messages(),
            vec!["string.min_length() must be less than string.default().length"]
        );

        let v = StringValidator::new().length(4).default("abc");
        assert_eq!(v.errors().messages(), vec!["string.default() must be equal to string.length()"]);

        let v = StringValidator::new().min_length(5).length(4);
        assert_eq!(
            v.errors().messages(),
            vec!["string.length() must be greater than string.min_length()"]
        );

        let v = StringValidator::new().in_charset("");
        assert_eq!(
            v.errors().messages(),
            vec!["string.in_charset() must be a string with at least one character"]
        );

        let v = StringValidator::new().default("abc").in_charset("ab");
        assert_eq!(
            v.errors().messages(),
            vec!["string.in_charset() must contain every character of string.default()"]
        );

        let v = StringValidator::new().in_charset("ab").default("abc");
        assert_eq!(
            v.errors().messages(),
            vec!["string.default() must only use characters of string.in_charset()"]
        );

        let v = StringValidator::new().default(3);
        assert_eq!(v.errors().messages(), vec!["string.default() must be a string"]);
    }

    // ------------------------------------------------------------------------
    // Boolean
    // ------------------------------------------------------------------------

    #[test]
    fn test_boolean() {
        let v = BooleanValidator::new().default(false);
        assert_eq!(v.validate_value(&Value::Bool(true)), Ok(Some(Value::Bool(true))));
        assert_eq!(v.validate(None), Ok(Some(Value::Bool(false))));
        assert_eq!(
            messages(v.validate_value(&Value::from("true"))),
            vec!["boolean.validate() invalid boolean"]
        );

        let v = BooleanValidator::new().default("yes");
        assert_eq!(v.errors().messages(), vec!["boolean.default() must be a boolean"]);
        assert!(v.validate_value(&Value::Bool(true)).is_err());
    }

    // ------------------------------------------------------------------------
    // Datetime
    // ------------------------------------------------------------------------

    #[test]
    fn test_datetime_inputs() {
        let v = DatetimeValidator::new();
        let noon = Utc.with_ymd_and_hms(2024, 1, 19, 12, 0, 0).unwrap();

        assert_eq!(v.validate_value(&Value::DateTime(noon)), Ok(Some(Value::DateTime(noon))));
        assert_eq!(
            v.validate_value(&Value::Int(noon.timestamp_millis())),
            Ok(Some(Value::DateTime(noon)))
        );
        assert_eq!(
            v.validate_value(&Value::from("2024-01-19T12:00:00Z")),
            Ok(Some(Value::DateTime(noon)))
        );

        let err = v.validate_value(&Value::from("someday")).unwrap_err();
        assert_eq!(err.messages(), vec!["datetime.validate() invalid date"]);
        assert_eq!(err.as_slice()[0].error_type, ErrorType::FormatError);

        let err = v.validate_value(&Value::Bool(true)).unwrap_err();
        assert_eq!(err.as_slice()[0].error_type, ErrorType::TypeError);
        assert!(v.validate_value(&Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn test_datetime_fixed_default() {
        let fixed = Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap();
        let v = DatetimeValidator::new().default(fixed);
        assert_eq!(v.validate(None), Ok(Some(Value::DateTime(fixed))));

        let v = DatetimeValidator::new().default("2020-05-01");
        assert_eq!(v.validate(None), Ok(Some(Value::DateTime(fixed))));
    }

    #[test]
    fn test_datetime_rolling_default() {
        let v = DatetimeValidator::new().default_offset(60_000);
        let before = Utc::now().timestamp_millis();
        let resolved = v.validate(None).unwrap().unwrap();
        let after = Utc::now().timestamp_millis();

        let ms = resolved.as_datetime().unwrap().timestamp_millis();
        assert!(ms >= before + 60_000 && ms <= after + 60_000);

        let v = DatetimeValidator::new().default_now();
        let ms = v.validate(Some(&Value::Null)).unwrap().unwrap();
        let ms = ms.as_datetime().unwrap().timestamp_millis();
        assert!((Utc::now().timestamp_millis() - ms).abs() < 5_000);
    }

    #[test]
    fn test_datetime_default_errors() {
        let v = DatetimeValidator::new().default(f64::NAN);
        assert_eq!(v.errors().messages(), vec!["datetime.default() must be a number"]);

        let v = DatetimeValidator::new().default(true);
        assert_eq!(
            v.errors().messages(),
            vec!["datetime.default() must be a datetime, number, string, or null"]
        );

        let v = DatetimeValidator::new().default("nope");
        assert_eq!(v.errors().messages(), vec!["datetime.default() must be a valid date string"]);

        let v = DatetimeValidator::new().default_now().optional();
        assert_eq!(
            v.errors().messages(),
            vec!["datetime.optional() cannot have a default value"]
        );
    }

    #[test]
    fn test_datetime_offset_overflow_is_config_error() {
        let expected = vec!["datetime.default() must be within the representable date range"];

        let v = DatetimeValidator::new().default_offset(i64::MAX);
        assert_eq!(v.errors().messages(), expected);
        assert_eq!(messages(v.validate(None)), expected);

        let v = DatetimeValidator::new().default(Value::Float(-1e18));
        assert_eq!(v.errors().messages(), expected);

        let v = DatetimeValidator::new().default_offset(-86_400_000);
        assert!(v.errors().is_empty());
        assert!(v.validate(None).is_ok());
    }

    // ------------------------------------------------------------------------
    // InstanceOf
    // ------------------------------------------------------------------------

    #[derive(Debug)]
    struct Connection;

    #[derive(Debug)]
    struct Socket;

    #[test]
    fn test_instance_of() {
        let v = InstanceOfValidator::new::<Connection>();
        let conn = Value::Instance(Instance::new(Connection));

        assert_eq!(v.validate_value(&conn), Ok(Some(conn.clone())));
        assert_eq!(
            messages(v.validate_value(&Value::Instance(Instance::new(Socket)))),
            vec!["instance_of.validate() invalid instance"]
        );
        assert!(v.validate_value(&Value::Object(vec![])).is_err());
    }

    #[test]
    fn test_instance_of_default() {
        let fallback = Value::Instance(Instance::new(Connection));
        let v = InstanceOfValidator::new::<Connection>().default(fallback.clone());
        assert_eq!(v.validate(None), Ok(Some(fallback)));

        let v = InstanceOfValidator::new::<Connection>().default(Instance::new(Socket));
        assert_eq!(v.errors().len(), 1);
        assert!(v.errors().messages()[0].starts_with("instance_of.default() must be an instance of"));
    }

    #[test]
    fn test_instance_of_datetime() {
        let v = InstanceOfValidator::new::<DateTime<Utc>>();
        assert!(v.validate_value(&Value::DateTime(Utc::now())).is_ok());
        assert!(v.validate_value(&Value::from("2024-01-19")).is_err());
    }

    // ------------------------------------------------------------------------
    // Equal
    // ------------------------------------------------------------------------

    #[test]
    fn test_equal() {
        let v = EqualValidator::new(Value::from("admin"));
        assert_eq!(v.validate_value(&Value::from("admin")), Ok(Some(Value::from("admin"))));
        assert_eq!(
            messages(v.validate_value(&Value::from("user"))),
            vec!["equal.validate() values are not equal"]
        );
        assert!(v.validate(None).is_err());
        assert!(v.errors().is_empty());

        let v = EqualValidator::new(Value::Int(5));
        assert!(v.validate_value(&Value::Float(5.0)).is_ok());
        assert!(v.validate_value(&Value::from("5")).is_err());

        let v = EqualValidator::new(Value::Null);
        assert!(v.validate(Some(&Value::Null)).is_ok());
        assert!(v.validate(None).is_err());
    }
}
