//! Wire types for enrollment term responses.

use crate::shared::serde_util::{canvas_date_opt, flexible_id};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the `enrollment_terms` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentTermResponse {
    #[serde(with = "flexible_id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sis_term_id: Option<String>,
    #[serde(default)]
    pub workflow_state: Option<String>,
    #[serde(default, with = "canvas_date_opt")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, with = "canvas_date_opt")]
    pub end_at: Option<DateTime<Utc>>,
    /// Not sent by the server; stamped on by the listing.
    #[serde(default)]
    pub account_id: Option<u64>,
}
