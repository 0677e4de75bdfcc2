//! Shared types used across the transport, pagination and domain layers.

pub mod object;
pub mod params;
pub mod serde_util;

pub use object::CanvasObject;
pub use params::Params;
pub use serde_util::parse_canvas_date;
