//! `CanvasObject`: the decoded attribute record behind every resource.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::serde_util::parse_canvas_date;

/// Suffix of the derived timestamp attribute (`start_at` → `start_at_date`).
pub const DATE_SUFFIX: &str = "_date";

/// One JSON object from an API response, plus a parsed UTC timestamp for
/// every string attribute that looks like a Canvas date.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CanvasObject {
    attributes: Map<String, Value>,
    #[serde(skip)]
    dates: BTreeMap<String, DateTime<Utc>>,
}

impl CanvasObject {
    pub fn new(attributes: Map<String, Value>) -> Self {
        let dates = attributes
            .iter()
            .filter_map(|(key, value)| {
                let parsed = parse_canvas_date(value.as_str()?)?;
                Some((format!("{key}{DATE_SUFFIX}"), parsed))
            })
            .collect();
        Self { attributes, dates }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// The `id` attribute, which Canvas sends as a number on most endpoints.
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// Derived timestamp by its derived name, e.g. `date("start_at_date")`.
    pub fn date(&self, derived_key: &str) -> Option<DateTime<Utc>> {
        self.dates.get(derived_key).copied()
    }

    pub fn dates(&self) -> &BTreeMap<String, DateTime<Utc>> {
        &self.dates
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }

    /// Deserialize the raw attributes into a typed struct.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.attributes.clone()))
    }
}

impl From<Map<String, Value>> for CanvasObject {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::new(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> CanvasObject {
        match value {
            Value::Object(map) => CanvasObject::new(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_date_twins_derived() {
        let obj = object(json!({
            "name": "New course name",
            "course_code": "COURSE-001",
            "start_at": "2012-05-05T00:00:00Z",
            "end_at": "2012-08-05T23:59:59Z",
            "sis_course_id": "12345"
        }));

        assert_eq!(obj.dates().len(), 2);
        assert_eq!(
            obj.date("start_at_date").unwrap().to_rfc3339(),
            "2012-05-05T00:00:00+00:00"
        );
        assert!(obj.date("end_at_date").is_some());
        assert!(obj.date("course_code_date").is_none());
        // raw string untouched
        assert_eq!(obj.get_str("start_at"), Some("2012-05-05T00:00:00Z"));
    }

    #[test]
    fn test_non_string_values_ignored() {
        let obj = object(json!({"id": 20120505, "nested": {"at": "2012-05-05T00:00:00Z"}}));
        assert!(obj.dates().is_empty());
        assert_eq!(obj.get_i64("id"), Some(20120505));
    }

    #[test]
    fn test_serializes_raw_attributes_only() {
        let obj = object(json!({"id": 1, "created_at": "2020-01-01T00:00:00Z"}));
        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value, json!({"id": 1, "created_at": "2020-01-01T00:00:00Z"}));
    }

    #[test]
    fn test_deserialize_into() {
        #[derive(serde::Deserialize)]
        struct Named {
            id: u64,
            name: String,
        }
        let obj = object(json!({"id": 3, "name": "Ada", "extra": true}));
        let named: Named = obj.deserialize_into().unwrap();
        assert_eq!(named.id, 3);
        assert_eq!(named.name, "Ada");
    }
}
