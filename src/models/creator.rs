//! Creator model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role tags used by the built-in translator tables.
/// Roles are open-ended strings; these are just the ones we emit.
pub mod roles {
    pub const AUTHOR: &str = "author";
    pub const CONTRIBUTOR: &str = "contributor";
    pub const DIRECTOR: &str = "director";
    pub const PERFORMER: &str = "performer";
    pub const TRANSLATOR: &str = "translator";
}

/// A person or organization credited with a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub creator_type: String,
    /// Empty for organizations and surname-only names
    pub first_name: String,
    pub last_name: String,
}

impl Creator {
    pub fn new(
        creator_type: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            creator_type: creator_type.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
