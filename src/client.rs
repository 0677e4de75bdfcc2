//! High-level client: `Canvas` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, environment configuration and the
//! helpers sub-clients share.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;

use crate::domain::course::client::Courses;
use crate::domain::enrollment_term::client::EnrollmentTerms;
use crate::domain::user::client::Users;
use crate::domain::Resource;
use crate::error::{HttpError, SdkError};
use crate::http::{CanvasHttp, Method, Target};
use crate::network::{ENV_API_KEY, ENV_API_URL};
use crate::pagination::PaginatedList;
use crate::shared::{CanvasObject, Params};

// Re-export sub-client types for convenience.
pub use crate::domain::course::client::Courses as CoursesClient;
pub use crate::domain::enrollment_term::client::EnrollmentTerms as EnrollmentTermsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the SDK.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub(crate) http: CanvasHttp,
}

impl Canvas {
    /// Client for `base_url` (the instance root, without `/api/v1`).
    pub fn new(base_url: &str, access_token: &str) -> Result<Self, SdkError> {
        Self::builder()
            .base_url(base_url)
            .access_token(access_token)
            .build()
    }

    pub fn builder() -> CanvasBuilder {
        CanvasBuilder::default()
    }

    /// Configure from `CANVAS_API_URL` and `CANVAS_API_KEY`.
    pub fn from_env() -> Result<Self, SdkError> {
        CanvasBuilder::from_env()?.build()
    }

    pub fn http(&self) -> &CanvasHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn courses(&self) -> Courses<'_> {
        Courses { client: self }
    }

    pub fn enrollment_terms(&self) -> EnrollmentTerms<'_> {
        EnrollmentTerms { client: self }
    }

    // ── Shared helpers ───────────────────────────────────────────────────

    /// A lazy list over any paginated endpoint.
    pub fn paginate<T: Resource>(
        &self,
        method: Method,
        target: impl Into<Target>,
    ) -> PaginatedList<T> {
        PaginatedList::new(self.http.clone(), method, target)
    }

    /// `GET` a single object and decode it.
    pub async fn get_one<T: Resource>(&self, path: &str, params: Params) -> Result<T, SdkError> {
        let body: Value = self.http.get(path, params).await?.json().await?;
        match body {
            Value::Object(attributes) => T::from_attributes(CanvasObject::new(attributes)),
            _ => Err(SdkError::UnexpectedBody(format!(
                "expected an object from {}",
                path
            ))),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct CanvasBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl CanvasBuilder {
    /// Builder pre-filled from `CANVAS_API_URL` / `CANVAS_API_KEY`.
    pub fn from_env() -> Result<Self, SdkError> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|_| SdkError::Validation(format!("{} is not set", name)))
        };
        Ok(Self::default()
            .base_url(&read(ENV_API_URL)?)
            .access_token(&read(ENV_API_KEY)?))
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Overall request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Canvas, SdkError> {
        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or_default())?;
        let access_token = self.access_token.unwrap_or_default();
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(SdkError::Validation("access token is required".to_string()));
        }
        if base_url.starts_with("http://") {
            tracing::warn!("Canvas base URL uses plain http; the access token is sent unencrypted");
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| HttpError::InvalidHeader(format!("'{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::InvalidHeader(format!("value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(HttpError::from)?;

        Ok(Canvas {
            http: CanvasHttp::with_client(client, &base_url, access_token),
        })
    }
}

/// Trim whitespace and trailing slashes; refuse URLs that already carry the
/// API prefix, since it is appended automatically.
fn normalize_base_url(url: &str) -> Result<String, SdkError> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(SdkError::Validation("base URL is required".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SdkError::Validation(format!(
            "base URL must start with http:// or https://, got {}",
            url
        )));
    }
    if url.ends_with("/api/v1") {
        return Err(SdkError::Validation(
            "base URL should not end with /api/v1; it is added automatically".to_string(),
        ));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://school.instructure.com/ ").unwrap(),
            "https://school.instructure.com"
        );
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("school.instructure.com").is_err());
        assert!(normalize_base_url("https://school.instructure.com/api/v1/").is_err());
    }

    #[test]
    fn test_build_requires_token() {
        let err = Canvas::builder()
            .base_url("https://school.instructure.com")
            .access_token("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_build_sets_api_prefix() {
        let canvas = Canvas::new("https://school.instructure.com", "token").unwrap();
        assert_eq!(
            canvas.http().base_url(),
            "https://school.instructure.com/api/v1/"
        );
    }

    #[test]
    fn test_invalid_default_header() {
        let err = Canvas::builder()
            .base_url("https://school.instructure.com")
            .access_token("token")
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::InvalidHeader(_))));
    }

    #[test]
    fn test_paginate_starts_unloaded() {
        let canvas = Canvas::new("https://school.instructure.com", "token").unwrap();
        let list: PaginatedList<CanvasObject> = canvas.paginate(Method::Get, "courses");
        assert_eq!(tokio_test::block_on(list.loaded_len()), 0);
        assert!(tokio_test::block_on(list.has_next()));
    }
}
