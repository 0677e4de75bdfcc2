//! HTTP transport layer: `CanvasHttp`, response handles and `Link` parsing.

pub mod client;
pub mod link;
pub mod response;

pub use client::{redact_headers, CanvasHttp, Method, RequestOptions, Target};
pub use link::{Link, Links};
pub use response::Response;
