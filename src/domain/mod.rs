//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: the resource type and its `Resource` decoding
//! - `wire.rs`: raw serde structs matching API responses
//! - `client.rs`: sub-client with the endpoints that return it

pub mod course;
pub mod enrollment_term;
pub mod user;

use crate::error::SdkError;
use crate::shared::CanvasObject;

/// A type that can be built from one item of an API response.
///
/// Paginated lists call this once per item, after extra attributes have
/// been merged into the raw object.
pub trait Resource: Clone + Sized {
    fn from_attributes(attributes: CanvasObject) -> Result<Self, SdkError>;
}

impl Resource for CanvasObject {
    fn from_attributes(attributes: CanvasObject) -> Result<Self, SdkError> {
        Ok(attributes)
    }
}
