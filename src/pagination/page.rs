//! Page body decoding.
//!
//! A list endpoint answers with one of three shapes, chosen by inspecting
//! the body once:
//!
//! - `[{...}, {...}]`: a bare array.
//! - `{"<root>": [{...}, {...}]}`: an envelope, when the list has a root key.
//! - `{...}`: a lone object standing in for a one-element page. Only some
//!   endpoints do this; it is tolerated, not expected.

use serde_json::{Map, Value};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::shared::CanvasObject;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Items(Vec<Value>),
    RootWrapped(Vec<Value>),
    SingleItem(Map<String, Value>),
}

impl Page {
    pub fn from_body(body: Value, root: Option<&str>) -> Result<Self, SdkError> {
        let Some(key) = root else {
            return match body {
                Value::Array(items) => Ok(Page::Items(items)),
                Value::Object(item) => Ok(Page::SingleItem(item)),
                other => Err(SdkError::UnexpectedBody(format!(
                    "expected an array or object, got {}",
                    kind(&other)
                ))),
            };
        };

        let Value::Object(mut envelope) = body else {
            return Err(SdkError::InvalidRoot(key.to_string()));
        };
        match envelope.remove(key) {
            Some(Value::Array(items)) => Ok(Page::RootWrapped(items)),
            Some(Value::Object(item)) => Ok(Page::SingleItem(item)),
            Some(other) => Err(SdkError::UnexpectedBody(format!(
                "root key '{}' holds {}",
                key,
                kind(&other)
            ))),
            None => Err(SdkError::InvalidRoot(key.to_string())),
        }
    }

    /// Raw item objects in server order. `null` entries are skipped.
    pub fn into_objects(self) -> Result<Vec<Map<String, Value>>, SdkError> {
        let items = match self {
            Page::Items(items) | Page::RootWrapped(items) => items,
            Page::SingleItem(item) => return Ok(vec![item]),
        };
        items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(SdkError::UnexpectedBody(format!(
                    "page item is {}",
                    kind(&other)
                ))),
            })
            .collect()
    }
}

/// Decode a whole page body into resources, stamping `extra` onto every item.
///
/// All-or-nothing: an error on any item discards the page.
pub fn decode_page<T: Resource>(
    body: Value,
    root: Option<&str>,
    extra: &Map<String, Value>,
) -> Result<Vec<T>, SdkError> {
    Page::from_body(body, root)?
        .into_objects()?
        .into_iter()
        .map(|mut attributes| {
            for (key, value) in extra {
                attributes.insert(key.clone(), value.clone());
            }
            T::from_attributes(CanvasObject::new(attributes))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
