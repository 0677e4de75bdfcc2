//! `Response`: a successful (non-error status) reply with a lazily read body.

use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::http::link::Links;

#[derive(Debug)]
pub struct Response {
    url: String,
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(url: String, inner: reqwest::Response) -> Self {
        Self { url, inner }
    }

    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// The URL the request was sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// First value of `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Parsed `Link` header relations.
    pub fn links(&self) -> Links {
        Links::parse(
            self.inner
                .headers()
                .get_all(LINK)
                .iter()
                .filter_map(|v| v.to_str().ok()),
        )
    }

    /// Absolute URL of the `rel="next"` link, resolved against the URL this
    /// response came from.
    pub fn next_link(&self) -> Option<String> {
        let links = self.links();
        let raw = links.next()?;
        match self.inner.url().join(raw) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(link = raw, error = %e, "Unresolvable next link");
                None
            }
        }
    }

    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        Ok(self.inner.json::<T>().await?)
    }

    pub async fn text(self) -> Result<String, HttpError> {
        Ok(self.inner.text().await?)
    }

    pub async fn bytes(self) -> Result<Vec<u8>, HttpError> {
        Ok(self.inner.bytes().await?.to_vec())
    }
}
