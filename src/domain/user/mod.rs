//! User domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::shared::CanvasObject;
use wire::UserResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub sortable_name: Option<String>,
    pub short_name: Option<String>,
    pub login_id: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    attributes: CanvasObject,
}

impl User {
    /// Every attribute the server sent, including ones not modelled above.
    pub fn attributes(&self) -> &CanvasObject {
        &self.attributes
    }
}

impl Resource for User {
    fn from_attributes(attributes: CanvasObject) -> Result<Self, SdkError> {
        let wire: UserResponse = attributes.deserialize_into()?;
        Ok(Self {
            id: wire.id,
            name: wire.name,
            sortable_name: wire.sortable_name,
            short_name: wire.short_name,
            login_id: wire.login_id,
            email: wire.email,
            created_at: wire.created_at,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> CanvasObject {
        CanvasObject::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_user_from_attributes() {
        let user = User::from_attributes(attrs(json!({
            "id": "7",
            "name": "Ada Lovelace",
            "sortable_name": "Lovelace, Ada",
            "created_at": "2020-02-03T04:05:06Z",
            "avatar_url": "https://example.com/a.png"
        })))
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.sortable_name.as_deref(), Some("Lovelace, Ada"));
        assert!(user.email.is_none());
        assert_eq!(user.created_at, user.attributes().date("created_at_date"));
        assert_eq!(
            user.attributes().get_str("avatar_url"),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_user_missing_name_is_serde_error() {
        let err = User::from_attributes(attrs(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, SdkError::Serde(_)));
    }
}
