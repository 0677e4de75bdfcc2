//! Lazy pagination over `Link: <...>; rel="next"` cursors.
//!
//! - `list.rs`: `PaginatedList`, its fetch state machine, indexing and iteration
//! - `slice.rs`: `Slice`, a bounded view that borrows its list
//! - `page.rs`: page body shapes and per-item decoding

pub mod list;
pub mod page;
pub mod slice;

pub use list::PaginatedList;
pub use page::Page;
pub use slice::Slice;
