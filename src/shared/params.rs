//! `Params`: ordered request parameters.
//!
//! Canvas accepts Rails-style parameters: repeated keys for arrays
//! (`include[]=email&include[]=avatar_url`) and bracketed keys for nested
//! objects (`user[name]=Ada`). Values are kept as JSON until the transport
//! decides whether they go out as a query string, a form body or a JSON
//! body.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, replacing any earlier value under the same key.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Append a timestamp as an ISO-8601 string.
    pub fn insert_date(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.insert(key, value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` only when it has not been given yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value.into()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into wire pairs for a query string or form body.
    ///
    /// Booleans become lowercase `true`/`false`, arrays repeat their key,
    /// objects expand into `key[field]`, and `null` values are dropped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            flatten_into(&mut pairs, key.clone(), value);
        }
        pairs
    }

    /// The parameters as a JSON object, for endpoints that take a JSON body.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

fn flatten_into(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                flatten_into(pairs, key.clone(), item);
            }
        }
        Value::Object(fields) => {
            for (field, inner) in fields {
                flatten_into(pairs, format!("{key}[{field}]"), inner);
            }
        }
    }
}
