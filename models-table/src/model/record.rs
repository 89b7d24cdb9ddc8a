//! Dynamic table record

use std::collections::HashMap;

use super::Value;

/// One table row: property values keyed by property name.
///
/// Records are owned by the caller. The table only reads properties off
/// them, never writes.
///
/// # Example
///
/// ```
/// use models_table::model::{Record, Value};
///
/// let record = Record::new()
///     .set("name", "Bob")
///     .set("age", 30);
///
/// assert_eq!(record.get("name"), Some(&Value::from("Bob")));
/// assert_eq!(record.get("email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The property values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Resolves a property path.
    ///
    /// A path without dots is a plain field lookup. A dotted path first tries
    /// the whole path as a field name, then walks nested objects.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.fields.get(path) {
            return Some(value);
        }
        let (head, rest) = path.split_once('.')?;
        self.fields.get(head)?.get_path(rest)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns a mutable reference to all fields.
    pub fn fields_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A row type the table can read properties from.
///
/// Implemented for [`Record`] and for `serde_json::Value` objects. Implement
/// it for your own row structs to skip the conversion into `Record`:
///
/// ```
/// use models_table::model::{TableRecord, Value};
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl TableRecord for User {
///     fn property(&self, path: &str) -> Option<Value> {
///         match path {
///             "name" => Some(Value::from(self.name.as_str())),
///             "age" => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRecord {
    /// Returns the value at `path`, or `None` when the property is absent.
    fn property(&self, path: &str) -> Option<Value>;
}

impl TableRecord for Record {
    fn property(&self, path: &str) -> Option<Value> {
        self.get_path(path).cloned()
    }
}

impl TableRecord for serde_json::Value {
    fn property(&self, path: &str) -> Option<Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(Value::from(current))
    }
}

impl<T: TableRecord + ?Sized> TableRecord for &T {
    fn property(&self, path: &str) -> Option<Value> {
        (**self).property(path)
    }
}
