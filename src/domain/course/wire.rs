//! Wire types for course responses.

use crate::shared::serde_util::{canvas_date_opt, flexible_id};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseResponse {
    #[serde(with = "flexible_id")]
    pub id: u64,
    /// Absent when the caller may only see restricted course data.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub workflow_state: Option<String>,
    #[serde(default, with = "canvas_date_opt")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, with = "canvas_date_opt")]
    pub end_at: Option<DateTime<Utc>>,
}
