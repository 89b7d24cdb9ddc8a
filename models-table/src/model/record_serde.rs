//! Serialization for Record.
//!
//! A record is a flat JSON object. Nested objects stay nested as
//! [`Value::Object`] and are reachable through dotted property paths.
//! Serialization emits every field, nulls included, so a record survives a
//! round trip unchanged.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object describing one table record")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = HashMap::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }

        Ok(Record { fields })
    }
}

/// Parses a JSON array of objects into records.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new().set("name", "Bob").set("age", 30);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"name\":\"Bob\""));
        assert!(json.contains("\"age\":30"));
    }

    #[test]
    fn test_serialize_keeps_nulls() {
        let record = Record::new().set("email", Value::Null);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"email":null}"#);
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"name": "Al", "age": 25, "score": 9.5, "admin": false}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("name"), Some(&Value::from("Al")));
        assert_eq!(record.get("age"), Some(&Value::Int(25)));
        assert_eq!(record.get("score"), Some(&Value::Float(9.5)));
        assert_eq!(record.get("admin"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_deserialize_null_is_not_absent() {
        let json = r#"{"email": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert!(record.contains("email"));
        assert_eq!(record.get("email"), Some(&Value::Null));
        assert!(!record.contains("phone"));
    }

    #[test]
    fn test_deserialize_nested_object() {
        let json = r#"{"address": {"city": "Oslo", "zip": "0150"}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_path("address.city"), Some(&Value::from("Oslo")));
        assert_eq!(record.get_path("address.street"), None);
    }

    #[test]
    fn test_deserialize_list() {
        let json = r#"{"tags": ["a", "b"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("tags").map(|v| v.to_string()), Some("a,b".to_string()));
    }

    #[test]
    fn test_records_from_json() {
        let json = r#"[{"name": "Bob"}, {"name": "Al"}]"#;
        let records = records_from_json(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("name"), Some(&Value::from("Al")));
    }

    #[test]
    fn test_records_from_json_rejects_non_objects() {
        assert!(records_from_json(r#"[1, 2]"#).is_err());
    }
}
