//! Enrollment term domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::shared::CanvasObject;
use wire::EnrollmentTermResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentTerm {
    pub id: u64,
    pub name: String,
    pub sis_term_id: Option<String>,
    pub workflow_state: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub account_id: Option<u64>,
    attributes: CanvasObject,
}

impl EnrollmentTerm {
    pub fn attributes(&self) -> &CanvasObject {
        &self.attributes
    }
}

impl Resource for EnrollmentTerm {
    fn from_attributes(attributes: CanvasObject) -> Result<Self, SdkError> {
        let wire: EnrollmentTermResponse = attributes.deserialize_into()?;
        Ok(Self {
            id: wire.id,
            name: wire.name,
            sis_term_id: wire.sis_term_id,
            workflow_state: wire.workflow_state,
            start_at: wire.start_at,
            end_at: wire.end_at,
            account_id: wire.account_id,
            attributes,
        })
    }
}
