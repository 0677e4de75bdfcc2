//! # Canvas SDK
//!
//! An async Rust client for the Canvas LMS REST API built around lazy,
//! cursor-driven pagination.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Errors, attribute records, request parameters, resource types
//! 2. **Transport**: `CanvasHttp`, one request per call, central error classification
//! 3. **Pagination**: `PaginatedList`, fetch-on-demand indexing, slicing and streaming
//! 4. **High-Level Client**: `Canvas` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use canvas_sdk::prelude::*;
//! use futures_util::TryStreamExt;
//!
//! let canvas = Canvas::new("https://school.instructure.com", "token")?;
//!
//! let users = canvas.users().list(1, Params::new());
//! let third = users.at(2).await?;
//! let first_page: Vec<User> = users.range(..10).iter().try_collect().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// URL constants and environment variable names.
pub mod network;

/// Attribute records, date detection, request parameters.
pub mod shared;

/// Resource types and the `Resource` decoding trait.
pub mod domain;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// HTTP transport with central status classification.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Pagination ──────────────────────────────────────────────────────

/// Lazy paginated collections.
#[cfg(feature = "http")]
pub mod pagination;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `Canvas`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{CanvasObject, Params};

    // Domain types
    pub use crate::domain::course::Course;
    pub use crate::domain::enrollment_term::EnrollmentTerm;
    pub use crate::domain::user::User;
    pub use crate::domain::Resource;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Transport
    #[cfg(feature = "http")]
    pub use crate::http::{CanvasHttp, Method, RequestOptions, Response, Target};

    // Pagination
    #[cfg(feature = "http")]
    pub use crate::pagination::{PaginatedList, Slice};

    // Client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        Canvas, CanvasBuilder, CoursesClient, EnrollmentTermsClient, UsersClient,
    };
}
