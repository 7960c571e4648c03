//! Composite validators
//!
//! Array, object and union validators own boxed child validators and
//! delegate to them per element, per declared field and per alternative.
//! Validation returns a new normalized value; the input is only borrowed.

use crate::config::{ErrorMode, ExtraFields, ValidationConfig};
use crate::constraints::LengthConstraints;
use crate::errors::{ErrorType, ValidationError, ValidationErrors, ValidationResult};
use crate::types::Value;
use crate::validator::{BoxedValidator, Precheck, Validator, ValidatorState};
use tracing::{debug, trace};

// ============================================================================
// Array
// ============================================================================

/// Accepts lists whose every element passes the element validator
#[derive(Debug)]
pub struct ArrayValidator {
    state: ValidatorState<Value>,
    element: BoxedValidator,
    lengths: LengthConstraints,
    config: ValidationConfig,
}

impl ArrayValidator {
    pub(crate) fn new(element: BoxedValidator) -> Self {
        Self {
            state: ValidatorState::new("array"),
            element,
            lengths: LengthConstraints::default(),
            config: ValidationConfig::default(),
        }
    }

    fn default_len(&self) -> Option<usize> {
        self.state.default().and_then(Value::as_list).map(<[Value]>::len)
    }

    /// Value returned for absent input
    ///
    /// Every element must pass the element validator.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.state.check_default_allowed();
        match &value {
            Value::List(items) => {
                let conflicts = self.lengths.default_conflicts("array", items.len());
                self.state.config_errors("default", conflicts);
                if let Some(index) = items
                    .iter()
                    .position(|item| self.element.validate(Some(item)).is_err())
                {
                    self.state
                        .config_error("default", format!("element {index} is invalid"));
                }
            }
            _ => self.state.config_error("default", "must be an array"),
        }
        self.state.set_default(value);
        self
    }

    pub fn min_length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.min_length_conflicts("array", x, self.default_len());
        self.state.config_errors("min_length", conflicts);
        self.lengths.min_length = Some(x);
        self
    }

    pub fn max_length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.max_length_conflicts("array", x, self.default_len());
        self.state.config_errors("max_length", conflicts);
        self.lengths.max_length = Some(x);
        self
    }

    /// Exact number of elements
    pub fn length(mut self, x: usize) -> Self {
        let conflicts = self.lengths.length_conflicts("array", x, self.default_len());
        self.state.config_errors("length", conflicts);
        self.lengths.length = Some(x);
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    /// Stop at the first failing element, or report all of them
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.config.errors = mode;
        self
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn element(&self) -> &dyn Validator {
        &*self.element
    }
}

impl Validator for ArrayValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        let Some(items) = input.and_then(Value::as_list) else {
            return Err(ValidationError::type_error("array", "invalid array").into());
        };
        self.lengths.check("array", items.len())?;

        let mut normalized = Vec::with_capacity(items.len());
        let mut failures = ValidationErrors::new();
        for (index, item) in items.iter().enumerate() {
            match self.element.validate(Some(item)) {
                Ok(value) => normalized.push(value.unwrap_or_else(|| item.clone())),
                Err(cause) => {
                    trace!(index, cause = %cause, "array element rejected");
                    let error = ValidationError::new(
                        "array",
                        "validate",
                        format!("element {index} is invalid"),
                        ErrorType::Element,
                    );
                    if !self.config.collect_all() {
                        return Err(error.into());
                    }
                    failures.add(error);
                }
            }
        }

        failures.into_result()?;
        Ok(Some(Value::List(normalized)))
    }

    fn errors(&self) -> ValidationErrors {
        let mut errors = self.state.errors().clone();
        errors.merge(self.element.errors());
        errors
    }
}

// ============================================================================
// Object
// ============================================================================

/// Accepts objects whose declared fields pass their field validators
///
/// Fields are checked in declaration order. Undeclared keys are handled
/// according to [`ExtraFields`] (kept untouched by default).
#[derive(Debug)]
pub struct ObjectValidator {
    state: ValidatorState<Value>,
    fields: Vec<(String, BoxedValidator)>,
    config: ValidationConfig,
}

impl ObjectValidator {
    /// Object schema without fields
    pub fn new() -> Self {
        Self {
            state: ValidatorState::new("object"),
            fields: Vec::new(),
            config: ValidationConfig::default(),
        }
    }

    fn push_field(&mut self, name: String, validator: BoxedValidator) {
        if self.is_declared(&name) {
            self.state
                .config_error("field", format!("key {name} is declared more than once"));
            return;
        }
        self.fields.push((name, validator));
    }

    fn is_declared(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }

    /// Declare a field and its validator
    pub fn field<V: Validator + 'static>(mut self, name: impl Into<String>, validator: V) -> Self {
        self.push_field(name.into(), Box::new(validator));
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    /// How to treat keys not declared in the schema
    pub fn extra(mut self, extra: ExtraFields) -> Self {
        self.config.extra = extra;
        self
    }

    /// Stop at the first failing field, or report all of them
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.config.errors = mode;
        self
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Declared field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for ObjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, BoxedValidator)> for ObjectValidator {
    fn from_iter<I: IntoIterator<Item = (K, BoxedValidator)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (name, validator) in iter {
            object.push_field(name.into(), validator);
        }
        object
    }
}

/// Keep only the first `key` entry; later repeats were never validated
fn drop_repeated(fields: &mut Vec<(String, Value)>, key: &str) {
    let mut seen = false;
    fields.retain(|(k, _)| {
        if k != key {
            return true;
        }
        let first = !seen;
        seen = true;
        first
    });
}

/// Replace the first `key` entry, or append it
fn set_field(fields: &mut Vec<(String, Value)>, key: &str, value: Value) {
    match fields.iter_mut().find(|(k, _)| k == key) {
        Some((_, slot)) => *slot = value,
        None => fields.push((key.to_string(), value)),
    }
}

impl Validator for ObjectValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        let Some(Value::Object(pairs)) = input else {
            return Err(ValidationError::type_error("object", "invalid object").into());
        };

        let collect_all = self.config.collect_all();
        let mut failures = ValidationErrors::new();

        if self.config.extra == ExtraFields::Forbid {
            for (key, _) in pairs.iter().filter(|(key, _)| !self.is_declared(key)) {
                let error = ValidationError::new(
                    "object",
                    "validate",
                    format!("key {key} is not allowed"),
                    ErrorType::ExtraForbidden,
                );
                if !collect_all {
                    return Err(error.into());
                }
                failures.add(error);
            }
        }

        let mut output: Vec<(String, Value)> = match self.config.extra {
            ExtraFields::Ignore => pairs
                .iter()
                .filter(|(key, _)| self.is_declared(key))
                .cloned()
                .collect(),
            ExtraFields::Allow | ExtraFields::Forbid => pairs.clone(),
        };

        for (name, validator) in &self.fields {
            let current = pairs.iter().find(|(key, _)| key == name).map(|(_, v)| v);
            drop_repeated(&mut output, name);
            match validator.validate(current) {
                Ok(Some(value)) => set_field(&mut output, name, value),
                Ok(None) => {}
                Err(cause) => {
                    trace!(field = %name, cause = %cause, "object field rejected");
                    let error = ValidationError::new(
                        "object",
                        "validate",
                        format!("key {name} is invalid"),
                        ErrorType::Field,
                    );
                    if !collect_all {
                        return Err(error.into());
                    }
                    failures.add(error);
                }
            }
        }

        failures.into_result()?;
        Ok(Some(Value::Object(output)))
    }

    fn errors(&self) -> ValidationErrors {
        let mut errors = self.state.errors().clone();
        for (_, validator) in &self.fields {
            errors.merge(validator.errors());
        }
        errors
    }
}

// ============================================================================
// Or
// ============================================================================

/// Accepts input matching any alternative, tried in declaration order
///
/// The first accepting alternative wins and its normalized output is
/// returned, so order encodes priority.
#[derive(Debug)]
pub struct OrValidator {
    state: ValidatorState<Value>,
    alternatives: Vec<BoxedValidator>,
}

impl OrValidator {
    pub(crate) fn new(alternatives: Vec<BoxedValidator>) -> Self {
        Self {
            state: ValidatorState::new("or"),
            alternatives,
        }
    }

    /// Own configuration errors, including an empty alternative list
    fn own_errors(&self) -> ValidationErrors {
        let mut errors = self.state.errors().clone();
        if self.alternatives.is_empty() {
            errors.add(ValidationError::config(
                "or",
                "new",
                "must be given at least one alternative",
            ));
        }
        errors
    }

    /// Append a lower-priority alternative
    ///
    /// Also completes a union created from an empty list.
    pub fn alternative<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.alternatives.push(Box::new(validator));
        self
    }

    /// Default for absent input
    ///
    /// Stored as the normalized output of the first alternative accepting
    /// `value`. When none accepts it, no default is recorded.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        if self.state.check_default_allowed() {
            return self;
        }
        let value = value.into();
        let accepted = self
            .alternatives
            .iter()
            .find_map(|alternative| alternative.validate(Some(&value)).ok());
        match accepted {
            Some(normalized) => {
                let normalized = normalized.unwrap_or_else(|| value.clone());
                self.state.set_default(normalized);
            }
            None => debug!(value = ?value, "no alternative accepted or.default(), none recorded"),
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.state.set_optional();
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Validator for OrValidator {
    fn kind(&self) -> &'static str {
        self.state.kind()
    }

    fn validate(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        if self.alternatives.is_empty() {
            return Err(self.own_errors());
        }
        match self.state.precheck(input) {
            Precheck::Done(result) => return result,
            Precheck::Default(default) => return Ok(Some(default.clone())),
            Precheck::Check => {}
        }

        for (index, alternative) in self.alternatives.iter().enumerate() {
            match alternative.validate(input) {
                Ok(value) => return Ok(value),
                Err(cause) => trace!(index, cause = %cause, "or alternative rejected"),
            }
        }

        Err(ValidationError::new("or", "validate", "no types matched", ErrorType::NoMatch).into())
    }

    fn errors(&self) -> ValidationErrors {
        let mut errors = self.own_errors();
        for alternative in &self.alternatives {
            errors.merge(alternative.errors());
        }
        errors
    }
}
