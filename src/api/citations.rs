//! Citation normalization endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{citation::CitationJson, ItemType, NormalizeRequest},
    translators::tables::target_fields,
};

/// Fields populated for an item type
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeFields {
    pub item_type: ItemType,
    pub fields: Vec<String>,
}

/// Normalize source payloads into a citation
#[utoipa::path(
    post,
    path = "/citations/normalize",
    tag = "citations",
    request_body = NormalizeRequest,
    responses(
        (status = 200, description = "Citation, possibly carrying an error", body = CitationJson),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn normalize(
    State(state): State<crate::AppState>,
    Json(request): Json<NormalizeRequest>,
) -> AppResult<Json<CitationJson>> {
    request.validate()?;

    let citation = state.services.citations.normalize(request)?;

    Ok(Json(citation.into()))
}

/// List supported item types and the fields each one populates
#[utoipa::path(
    get,
    path = "/item-types",
    tag = "citations",
    responses(
        (status = 200, description = "Supported item types", body = Vec<ItemTypeFields>)
    )
)]
pub async fn list_item_types() -> Json<Vec<ItemTypeFields>> {
    let item_types = ItemType::ALL
        .into_iter()
        .map(|item_type| ItemTypeFields {
            item_type,
            fields: target_fields(item_type).into_iter().map(String::from).collect(),
        })
        .collect();

    Json(item_types)
}
