//! Constraint sets shared by several validators
//!
//! [`NumericConstraints`] backs the number validator and
//! [`LengthConstraints`] backs both the string and array validators. Each
//! setter has a matching `*_conflicts` check that lists what is inconsistent
//! about a new bound before it is stored, so builders can record those as
//! configuration errors.

use crate::errors::ValidationError;
use crate::types::compare_int_float;
use std::cmp::Ordering;

/// `true` for finite floats without a fractional part
pub(crate) fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

// ============================================================================
// Numeric Constraints
// ============================================================================

/// Bounds for numeric validation (inclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericConstraints {
    /// Minimum value (inclusive)
    pub minimum: Option<f64>,
    /// Maximum value (inclusive)
    pub maximum: Option<f64>,
    /// Value must be integral
    pub whole: bool,
}

impl NumericConstraints {
    /// Conflicts a default value `x` has with the current bounds
    pub fn default_conflicts(&self, x: f64) -> Vec<&'static str> {
        let mut conflicts = Vec::new();
        if self.whole && !is_integral(x) {
            conflicts.push("must be a whole number");
        }
        if self.minimum.is_some_and(|min| x < min) {
            conflicts.push("must be greater than number.min()");
        }
        if self.maximum.is_some_and(|max| x > max) {
            conflicts.push("must be less than number.max()");
        }
        conflicts
    }

    /// Conflicts a new minimum `x` has with the current bounds and default
    pub fn minimum_conflicts(&self, x: f64, default: Option<f64>) -> Vec<&'static str> {
        let mut conflicts = Vec::new();
        if x.is_nan() {
            conflicts.push("must be a number");
        }
        if self.maximum.is_some_and(|max| x > max) {
            conflicts.push("must be less than number.max()");
        }
        if self.whole && !is_integral(x) {
            conflicts.push("must be a whole number");
        }
        if default.is_some_and(|d| x > d) {
            conflicts.push("must be less than number.default()");
        }
        conflicts
    }

    /// Conflicts a new maximum `x` has with the current bounds and default
    pub fn maximum_conflicts(&self, x: f64, default: Option<f64>) -> Vec<&'static str> {
        let mut conflicts = Vec::new();
        if x.is_nan() {
            conflicts.push("must be a number");
        }
        if self.minimum.is_some_and(|min| x < min) {
            conflicts.push("must be greater than number.min()");
        }
        if self.whole && !is_integral(x) {
            conflicts.push("must be a whole number");
        }
        if default.is_some_and(|d| x < d) {
            conflicts.push("must be greater than number.default()");
        }
        conflicts
    }

    /// Conflicts turning on the whole-number flag has with existing values
    pub fn whole_conflicts(&self, default: Option<f64>) -> Vec<&'static str> {
        let mut conflicts = Vec::new();
        if default.is_some_and(|d| !is_integral(d)) {
            conflicts.push("default value must be a whole number");
        }
        if self.minimum.is_some_and(|min| !is_integral(min)) {
            conflicts.push("min value must be a whole number");
        }
        if self.maximum.is_some_and(|max| !is_integral(max)) {
            conflicts.push("max value must be a whole number");
        }
        conflicts
    }

    /// Check a number against the bounds, first violation wins
    pub fn check(&self, x: f64) -> Result<(), ValidationError> {
        Self::report(
            self.minimum.is_some_and(|min| x < min),
            self.maximum.is_some_and(|max| x > max),
            self.whole && !is_integral(x),
        )
    }

    /// Check an integer against the bounds without rounding it to `f64`
    pub fn check_int(&self, i: i64) -> Result<(), ValidationError> {
        Self::report(
            self.minimum
                .is_some_and(|min| compare_int_float(i, min) == Some(Ordering::Less)),
            self.maximum
                .is_some_and(|max| compare_int_float(i, max) == Some(Ordering::Greater)),
            false,
        )
    }

    fn report(below: bool, above: bool, fractional: bool) -> Result<(), ValidationError> {
        if below {
            return Err(ValidationError::value_error(
                "number",
                "number is less than minimum",
            ));
        }
        if above {
            return Err(ValidationError::value_error(
                "number",
                "number is greater than maximum",
            ));
        }
        if fractional {
            return Err(ValidationError::value_error(
                "number",
                "number is not a whole number",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Length Constraints
// ============================================================================

/// Length bounds for strings (in characters) and arrays (in items)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthConstraints {
    /// Minimum length (inclusive)
    pub min_length: Option<usize>,
    /// Maximum length (inclusive)
    pub max_length: Option<usize>,
    /// Exact length
    pub length: Option<usize>,
}

impl LengthConstraints {
    /// Conflicts a default of length `len` has with the current bounds
    pub fn default_conflicts(&self, kind: &str, len: usize) -> Vec<String> {
        let mut conflicts = Vec::new();
        if self.min_length.is_some_and(|min| len < min) {
            conflicts.push(format!("must be greater than {kind}.min_length()"));
        }
        if self.max_length.is_some_and(|max| len > max) {
            conflicts.push(format!("must be less than {kind}.max_length()"));
        }
        if self.length.is_some_and(|exact| len != exact) {
            conflicts.push(format!("must be equal to {kind}.length()"));
        }
        conflicts
    }

    /// Conflicts a new minimum length `x` has with the current bounds
    pub fn min_length_conflicts(&self, kind: &str, x: usize, default_len: Option<usize>) -> Vec<String> {
        let mut conflicts = Vec::new();
        if self.max_length.is_some_and(|max| x > max) {
            conflicts.push(format!("must be less than {kind}.max_length()"));
        }
        if default_len.is_some_and(|len| x > len) {
            conflicts.push(format!("must be less than {kind}.default().length"));
        }
        if self.length.is_some_and(|exact| x > exact) {
            conflicts.push(format!("must be less than {kind}.length()"));
        }
        conflicts
    }

    /// Conflicts a new maximum length `x` has with the current bounds
    pub fn max_length_conflicts(&self, kind: &str, x: usize, default_len: Option<usize>) -> Vec<String> {
        let mut conflicts = Vec::new();
        if self.min_length.is_some_and(|min| x < min) {
            conflicts.push(format!("must be greater than {kind}.min_length()"));
        }
        if default_len.is_some_and(|len| x < len) {
            conflicts.push(format!("must be greater than {kind}.default().length"));
        }
        if self.length.is_some_and(|exact| x < exact) {
            conflicts.push(format!("must be greater than {kind}.length()"));
        }
        conflicts
    }

    /// Conflicts a new exact length `x` has with the current bounds
    pub fn length_conflicts(&self, kind: &str, x: usize, default_len: Option<usize>) -> Vec<String> {
        let mut conflicts = Vec::new();
        if default_len.is_some_and(|len| x != len) {
            conflicts.push(format!("must be equal to {kind}.default().length"));
        }
        if self.min_length.is_some_and(|min| x < min) {
            conflicts.push(format!("must be greater than {kind}.min_length()"));
        }
        if self.max_length.is_some_and(|max| x > max) {
            conflicts.push(format!("must be less than {kind}.max_length()"));
        }
        conflicts
    }

    /// Check a length against the bounds, first violation wins
    pub fn check(&self, kind: &'static str, len: usize) -> Result<(), ValidationError> {
        if self.min_length.is_some_and(|min| len < min) {
            return Err(ValidationError::value_error(
                kind,
                format!("{kind} is less than minimum length"),
            ));
        }
        if self.max_length.is_some_and(|max| len > max) {
            return Err(ValidationError::value_error(
                kind,
                format!("{kind} is greater than maximum length"),
            ));
        }
        if self.length.is_some_and(|exact| len != exact) {
            return Err(ValidationError::value_error(
                kind,
                format!("{kind} is not the correct length"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_constraints_default() {
        let constraints = NumericConstraints::default();
        assert!(constraints.minimum.is_none());
        assert!(constraints.maximum.is_none());
        assert!(!constraints.whole);
        assert!(constraints.check(f64::MAX).is_ok());
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(3.0));
        assert!(is_integral(-12.0));
        assert!(!is_integral(3.5));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }

    #[test]
    fn test_minimum_conflicts() {
        let constraints = NumericConstraints {
            maximum: Some(10.0),
            whole: true,
            ..Default::default()
        };
        assert!(constraints.minimum_conflicts(5.0, None).is_empty());
        assert_eq!(
            constraints.minimum_conflicts(11.5, Some(3.0)),
            vec![
                "must be less than number.max()",
                "must be a whole number",
                "must be less than number.default()",
            ]
        );
        assert_eq!(constraints.minimum_conflicts(f64::NAN, None), vec!["must be a number", "must be a whole number"]);
    }

    #[test]
    fn test_whole_conflicts() {
        let constraints = NumericConstraints {
            minimum: Some(0.5),
            maximum: Some(10.0),
            whole: false,
        };
        assert_eq!(
            constraints.whole_conflicts(Some(2.25)),
            vec!["default value must be a whole number", "min value must be a whole number"]
        );
    }

    #[test]
    fn test_numeric_check_order() {
        let constraints = NumericConstraints {
            minimum: Some(0.0),
            maximum: Some(10.0),
            whole: true,
        };
        assert!(constraints.check(5.0).is_ok());
        assert_eq!(
            constraints.check(-0.5).unwrap_err().message,
            "number is less than minimum"
        );
        assert_eq!(
            constraints.check(10.5).unwrap_err().message,
            "number is greater than maximum"
        );
        assert_eq!(
            constraints.check(4.5).unwrap_err().message,
            "number is not a whole number"
        );
    }

    #[test]
    fn test_int_check_is_exact() {
        let constraints = NumericConstraints {
            minimum: Some(-9_007_199_254_740_992.0),
            maximum: Some(9_007_199_254_740_992.0),
            whole: true,
        };
        assert!(constraints.check_int(9_007_199_254_740_992).is_ok());
        assert_eq!(
            constraints.check_int(9_007_199_254_740_993).unwrap_err().to_string(),
            "number.validate() number is greater than maximum"
        );
        assert_eq!(
            constraints.check_int(-9_007_199_254_740_993).unwrap_err().to_string(),
            "number.validate() number is less than minimum"
        );

        let fractional = NumericConstraints {
            minimum: Some(0.5),
            maximum: Some(2.5),
            whole: false,
        };
        assert!(fractional.check_int(0).is_err());
        assert!(fractional.check_int(1).is_ok());
        assert!(fractional.check_int(2).is_ok());
        assert!(fractional.check_int(3).is_err());
    }

    #[test]
    fn test_length_constraints_default() {
        let constraints = LengthConstraints::default();
        assert!(constraints.min_length.is_none());
        assert!(constraints.max_length.is_none());
        assert!(constraints.length.is_none());
        assert!(constraints.check("string", 0).is_ok());
    }

    #[test]
    fn test_length_conflicts() {
        let constraints = LengthConstraints {
            min_length: Some(3),
            max_length: Some(5),
            length: None,
        };
        assert!(constraints.length_conflicts("string", 5, None).is_empty());
        assert_eq!(
            constraints.length_conflicts("string", 6, Some(4)),
            vec![
                "must be equal to string.default().length".to_string(),
                "must be less than string.max_length()".to_string(),
            ]
        );
        assert_eq!(
            constraints.max_length_conflicts("array", 2, None),
            vec!["must be greater than array.min_length()".to_string()]
        );
    }

    #[test]
    fn test_length_check_messages() {
        let constraints = LengthConstraints {
            min_length: Some(2),
            max_length: Some(4),
            length: Some(3),
        };
        assert!(constraints.check("array", 3).is_ok());
        assert_eq!(
            constraints.check("array", 1).unwrap_err().to_string(),
            "array.validate() array is less than minimum length"
        );
        assert_eq!(
            constraints.check("array", 5).unwrap_err().to_string(),
            "array.validate() array is greater than maximum length"
        );
        assert_eq!(
            constraints.check("array", 4).unwrap_err().to_string(),
            "array.validate() array is not the correct length"
        );
    }
}
