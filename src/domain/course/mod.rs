//! Course domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::shared::CanvasObject;
use wire::CourseResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: u64,
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub account_id: Option<u64>,
    pub workflow_state: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    attributes: CanvasObject,
}

impl Course {
    pub fn attributes(&self) -> &CanvasObject {
        &self.attributes
    }

    pub fn is_available(&self) -> bool {
        self.workflow_state.as_deref() == Some("available")
    }
}

impl Resource for Course {
    fn from_attributes(attributes: CanvasObject) -> Result<Self, SdkError> {
        let wire: CourseResponse = attributes.deserialize_into()?;
        Ok(Self {
            id: wire.id,
            name: wire.name,
            course_code: wire.course_code,
            account_id: wire.account_id,
            workflow_state: wire.workflow_state,
            start_at: wire.start_at,
            end_at: wire.end_at,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_from_attributes() {
        let attrs = json!({
            "id": 12,
            "name": "Intro to Rust",
            "course_code": "RUST-101",
            "workflow_state": "available",
            "start_at": "2024-09-01T00:00:00Z",
            "end_at": null
        });
        let course =
            Course::from_attributes(CanvasObject::new(attrs.as_object().cloned().unwrap()))
                .unwrap();
        assert_eq!(course.id, 12);
        assert!(course.is_available());
        assert!(course.start_at.is_some());
        assert!(course.end_at.is_none());
        assert!(course.account_id.is_none());
    }
}
