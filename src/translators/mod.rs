//! Metadata normalization
//!
//! This module turns raw xISBN/WorldCat style records into citation
//! content: item type resolution from form codes, per item type field
//! translation tables, creator name parsing and value fixers.

pub mod creators;
pub mod fixers;
pub mod form_codes;
pub mod normalizer;
pub mod tables;

pub use creators::CreatorListMode;
pub use fixers::{FieldFixers, Fixer, StandardFixers};
pub use form_codes::resolve_item_type;
pub use normalizer::{Normalizer, NormalizerOptions};
pub use tables::{table_for, TranslatorEntry, TranslatorKind};
