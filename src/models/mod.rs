//! Data models for Citekit

pub mod citation;
pub mod creator;
pub mod item_type;
pub mod normalize_request;

// Re-export commonly used types
pub use citation::{Citation, CitationError, FieldValue, IdType};
pub use creator::Creator;
pub use item_type::ItemType;
pub use normalize_request::{NormalizeRequest, SourcePayload};
