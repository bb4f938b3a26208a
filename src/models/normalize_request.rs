//! Normalization request models

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{IdType, ItemType};

/// Raw payload fetched from one metadata source
#[derive(Debug, Deserialize, ToSchema)]
pub struct SourcePayload {
    /// Provenance tag, e.g. "WorldCat"
    pub source: String,
    /// Payload exactly as returned by the source
    #[schema(value_type = Object)]
    pub payload: Value,
}

/// Normalization request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NormalizeRequest {
    pub id_type: IdType,
    #[validate(custom(function = "validate_not_blank"))]
    pub id_value: String,
    /// Force an item type instead of resolving it from the payload
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub sources: Vec<SourcePayload>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Identifier value must not be empty".into());
        return Err(error);
    }
    Ok(())
}
