//! Value enum for dynamic property values

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value stored under one property of a [`Record`](super::Record).
///
/// # Type Mapping
///
/// | JSON           | Rust Variant |
/// |----------------|--------------|
/// | null           | `Null`       |
/// | true / false   | `Bool`       |
/// | integer number | `Int`        |
/// | other number   | `Float`      |
/// | string         | `String`     |
/// | array          | `List`       |
/// | object         | `Object`     |
///
/// `DateTime` never comes out of JSON (dates arrive as strings); it exists for
/// callers that build records in code and want chronological sorting.
///
/// A property that is missing from a record is not a `Value` at all: lookups
/// return `None` for it, which stringifies as `"undefined"`.
///
/// # Example
///
/// ```
/// use models_table::model::Value;
///
/// let name = Value::from("Contoso");
/// let age = Value::from(30);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested object, addressable with dotted property paths.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value for ints and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Looks up a nested value by dotted path (`"address.city"`).
    ///
    /// An empty path segment or a step into a non-object yields `None`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            _ => None,
        })
    }

    /// Rank used to order values of different types against each other.
    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 1,
            Value::Bool(_) => 2,
            Value::Int(_) | Value::Float(_) => 3,
            Value::String(_) => 4,
            Value::List(_) => 5,
            Value::Object(_) => 6,
            Value::DateTime(_) => 7,
        }
    }
}

// =============================================================================
// Stringification
// =============================================================================

/// Formats a float the way a script runtime prints numbers: integral values
/// drop the fractional part and non-finite values get their names.
fn format_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{}", n as i128)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => format_float(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::DateTime(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Nulls inside lists join as empty strings.
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
        }
    }
}

/// Stringifies a possibly-absent property value.
///
/// Absent properties become `"undefined"`. Filtering relies on this: a
/// filter text of `"undef"` matches rows that lack the property.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Compares two possibly-absent values for sorting.
///
/// Values of different types order by type: absent, null, bool, number,
/// string, list, object, datetime. Same-typed values compare naturally; lists
/// compare element-wise, then by length. Objects are all equal.
///
/// Strings compare by byte order, not by locale collation, so `"Zed"` sorts
/// before `"apple"` and accented letters sort after `z`.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    let rank = a.type_rank().cmp(&b.type_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => {
            for (left, right) in x.iter().zip(y.iter()) {
                let ord = compare_values(Some(left), Some(right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => match (a.as_f64(), b.as_f64()) {
            // NaN compares equal to everything, like a comparator returning 0
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
