//! Low-level HTTP transport: `CanvasHttp`.
//!
//! One `send` call is one network round-trip. Error statuses are classified
//! into [`HttpError`] here and nowhere else; nothing is retried.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::Client;

use crate::error::HttpError;
use crate::http::response::Response;
use crate::network::API_PREFIX;
use crate::shared::Params;

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(format!("Invalid HTTP request method: {}", s)),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where a request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Path relative to `<base>/api/v1/`, e.g. `"accounts/1/users"`.
    Endpoint(String),
    /// Fully-qualified URL used verbatim (pagination cursors, file downloads).
    Url(String),
}

impl Target {
    pub fn endpoint(path: impl Into<String>) -> Self {
        Target::Endpoint(path.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Target::Url(url.into())
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Target::from(s.to_string())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Target::Url(s)
        } else {
            Target::Endpoint(s)
        }
    }
}

/// Per-request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    /// Query string for GET, body for every other verb.
    pub params: Params,
    /// Send `params` as a JSON object instead of a form body.
    pub json: bool,
    /// Attach the bearer token.
    pub use_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            params: Params::new(),
            json: false,
            use_auth: true,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    pub fn without_auth(mut self) -> Self {
        self.use_auth = false;
        self
    }
}

/// Low-level HTTP client for the Canvas REST API.
#[derive(Clone)]
pub struct CanvasHttp {
    /// Instance URL as given, e.g. `https://school.instructure.com`.
    original_url: String,
    /// `original_url` + `/api/v1/`.
    base_url: String,
    client: Client,
    /// NEVER exposed publicly.
    access_token: Arc<str>,
}

impl CanvasHttp {
    /// Build a transport with reqwest's defaults (no request timeout).
    pub fn new(base_url: &str, access_token: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, access_token, None)
    }

    pub fn with_timeout(
        base_url: &str,
        access_token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self::with_client(builder.build()?, base_url, access_token))
    }

    /// Use a preconfigured reqwest client (proxies, default headers, TLS).
    pub fn with_client(client: Client, base_url: &str, access_token: &str) -> Self {
        let original_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url: format!("{}{}", original_url, API_PREFIX),
            original_url,
            client,
            access_token: Arc::from(access_token),
        }
    }

    /// `<instance>/api/v1/`, always with a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn resolve(&self, target: &Target) -> String {
        match target {
            Target::Url(url) => url.clone(),
            Target::Endpoint(path) => {
                format!("{}{}", self.base_url, path.trim_start_matches('/'))
            }
        }
    }

    pub async fn get(
        &self,
        target: impl Into<Target>,
        params: Params,
    ) -> Result<Response, HttpError> {
        self.send(Method::Get, target, RequestOptions::new().params(params))
            .await
    }

    /// Issue one request and classify the outcome.
    pub async fn send(
        &self,
        method: Method,
        target: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response, HttpError> {
        let url = self.resolve(&target.into());
        let headers = self.build_headers(&options)?;
        let pairs = options.params.to_pairs();

        tracing::info!(method = %method, url = %url, "Request");
        tracing::debug!(headers = ?redact_headers(&headers), "Request headers");
        if !pairs.is_empty() {
            tracing::debug!(params = ?pairs, "Request data");
        }

        let mut req = self.client.request(method.into(), &url).headers(headers);
        match method {
            Method::Get => {
                if !pairs.is_empty() {
                    req = req.query(&pairs);
                }
            }
            _ if options.json => {
                req = req.json(&options.params.to_json());
            }
            _ => {
                if !pairs.is_empty() {
                    req = req.form(&pairs);
                }
            }
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();

        tracing::info!(method = %method, url = %url, status, "Response");
        tracing::debug!(headers = ?redact_headers(resp.headers()), "Response headers");

        if resp.status().is_success() {
            return Ok(Response::new(url, resp));
        }

        let has_challenge = resp.headers().contains_key(WWW_AUTHENTICATE);
        let body = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };
        tracing::debug!(status, body = %body, "Error response");

        Err(HttpError::from_status(status, has_challenge, body)
            .unwrap_or(HttpError::Status { status, body: String::new() }))
    }

    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| HttpError::InvalidHeader(format!("'{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::InvalidHeader(format!("value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        if options.use_auth {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
                .map_err(|e| HttpError::InvalidHeader(format!("access token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

impl fmt::Debug for CanvasHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasHttp")
            .field("base_url", &self.base_url)
            .field("access_token", &mask(&self.access_token))
            .finish()
    }
}

/// Header list for logging, with the bearer token masked down to its last
/// four characters.
pub fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let raw = String::from_utf8_lossy(value.as_bytes());
            let shown = if name == AUTHORIZATION {
                mask(&raw)
            } else {
                raw.into_owned()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}

fn mask(secret: &str) -> String {
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}
