//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{citations, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Citekit API",
        version = "0.3.0",
        description = "Bibliographic metadata normalization API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        citations::normalize,
        citations::list_item_types,
    ),
    components(
        schemas(
            crate::models::NormalizeRequest,
            crate::models::SourcePayload,
            citations::ItemTypeFields,
            crate::models::citation::CitationJson,
            crate::models::citation::CitationError,
            crate::models::IdType,
            crate::models::ItemType,
            crate::models::Creator,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "citations", description = "Citation normalization")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
