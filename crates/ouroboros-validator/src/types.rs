//! Dynamic value model
//!
//! [`Value`] is the untyped input every validator checks and the normalized
//! output it returns. Absence is expressed one level up, as `Option<&Value>`:
//! `None` is an undefined value (e.g. a missing object key) and
//! `Some(Value::Null)` is an explicit null.

use chrono::{DateTime, Utc};
use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Value Enum - Runtime values to be validated
// ============================================================================

/// Runtime value that can be validated
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// List/Array of values
    List(Vec<Value>),
    /// Object/Dictionary (key-value pairs, insertion ordered)
    Object(Vec<(String, Value)>),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Opaque host value, see [`Instance`]
    Instance(Instance),
}

impl Value {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "array",
            Self::Object(_) => "object",
            Self::DateTime(_) => "datetime",
            Self::Instance(_) => "instance",
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of `Int` and `Float` values
    ///
    /// Integers beyond 2^53 in magnitude are rounded to the nearest `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Look up an object field by key (first match wins)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Whether the value holds a `T`
    ///
    /// `DateTime` values count as instances of `chrono::DateTime<Utc>`.
    pub fn is_instance_of(&self, type_id: TypeId) -> bool {
        match self {
            Self::Instance(instance) => instance.type_id() == type_id,
            Self::DateTime(_) => type_id == TypeId::of::<DateTime<Utc>>(),
            _ => false,
        }
    }

    /// Strict equality
    ///
    /// Numbers compare by numeric value across `Int` and `Float` and NaN is
    /// never equal to anything. Instances compare by identity, everything
    /// else structurally.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
                compare_int_float(*i, *f) == Some(Ordering::Equal)
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.strict_eq(vb))
            }
            _ => self == other,
        }
    }
}

/// Exact ordering of an integer against a float, `None` when `f` is NaN
///
/// Avoids the rounding of `i as f64` above 2^53.
pub(crate) fn compare_int_float(i: i64, f: f64) -> Option<Ordering> {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    match i.cmp(&(f.trunc() as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&f.fract()),
        ordering => Some(ordering),
    }
}

/// Whether an input counts as absent (undefined or null)
pub fn is_absent(input: Option<&Value>) -> bool {
    matches!(input, None | Some(Value::Null))
}

// ============================================================================
// Instance - opaque host values
// ============================================================================

/// Reference-counted host value of an arbitrary `'static` type
///
/// Used with [`instance_of`](crate::instance_of) to check that a value is of
/// a designated Rust type. Clones share the same allocation; equality is
/// identity.
#[derive(Clone)]
pub struct Instance {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `TypeId` of the wrapped value
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&self.type_name).finish()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Instance(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(fields) => serde_json::Value::Object(
                fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
            Value::DateTime(dt) => serde_json::Value::String(
                dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            ),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Session {
        id: u32,
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Int(42).type_name(), "integer");
        assert_eq!(Value::Float(3.5).type_name(), "float");
        assert_eq!(Value::String("test".to_string()).type_name(), "string");
        assert_eq!(Value::List(vec![]).type_name(), "array");
        assert_eq!(Value::Object(vec![]).type_name(), "object");
        assert_eq!(Value::DateTime(Utc::now()).type_name(), "datetime");
    }

    #[test]
    fn test_absence() {
        assert!(is_absent(None));
        assert!(is_absent(Some(&Value::Null)));
        assert!(!is_absent(Some(&Value::Bool(false))));
        assert!(!is_absent(Some(&Value::Int(0))));
    }

    #[test]
    fn test_strict_eq_numbers() {
        assert!(Value::Int(5).strict_eq(&Value::Float(5.0)));
        assert!(!Value::Int(5).strict_eq(&Value::Float(5.5)));
        assert!(!Value::Float(f64::NAN).strict_eq(&Value::Float(f64::NAN)));
        assert!(!Value::Int(1).strict_eq(&Value::String("1".into())));
        assert!(Value::from(vec![1, 2]).strict_eq(&Value::List(vec![Value::Float(1.0), Value::Int(2)])));
    }

    #[test]
    fn test_large_ints_compare_exactly() {
        const TWO_POW_53: i64 = 9_007_199_254_740_992;
        assert!(!Value::Int(TWO_POW_53 + 1).strict_eq(&Value::Float(TWO_POW_53 as f64)));
        assert!(!Value::Float(TWO_POW_53 as f64).strict_eq(&Value::Int(TWO_POW_53 + 1)));
        assert!(Value::Int(TWO_POW_53).strict_eq(&Value::Float(TWO_POW_53 as f64)));

        assert_eq!(compare_int_float(TWO_POW_53 + 1, TWO_POW_53 as f64), Some(Ordering::Greater));
        assert_eq!(compare_int_float(2, 2.5), Some(Ordering::Less));
        assert_eq!(compare_int_float(-2, -2.5), Some(Ordering::Greater));
        assert_eq!(compare_int_float(i64::MAX, 9.3e18), Some(Ordering::Less));
        assert_eq!(compare_int_float(i64::MIN, -9_223_372_036_854_775_808.0), Some(Ordering::Equal));
        assert_eq!(compare_int_float(i64::MIN, f64::NEG_INFINITY), Some(Ordering::Greater));
        assert_eq!(compare_int_float(0, f64::NAN), None);
    }

    #[test]
    fn test_instance_identity() {
        let a = Instance::new(Session { id: 7 });
        let b = a.clone();
        let c = Instance::new(Session { id: 7 });

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is::<Session>());
        assert_eq!(a.downcast_ref::<Session>().map(|s| s.id), Some(7));
        assert!(Value::Instance(a).is_instance_of(TypeId::of::<Session>()));
    }

    #[test]
    fn test_object_get() {
        let obj = Value::Object(vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Null),
        ]);
        assert_eq!(obj.get("a"), Some(&Value::Int(1)));
        assert_eq!(obj.get("b"), Some(&Value::Null));
        assert_eq!(obj.get("c"), None);
        assert_eq!(Value::Int(1).get("a"), None);
    }
}
