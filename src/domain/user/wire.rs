//! Wire types for user responses.

use crate::shared::serde_util::{canvas_date_opt, flexible_id};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// REST representation of a user (`GET /api/v1/users/:id`, list endpoints).
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(with = "flexible_id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sortable_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub login_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, with = "canvas_date_opt")]
    pub created_at: Option<DateTime<Utc>>,
}
