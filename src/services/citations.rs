//! Citation assembly service
//!
//! Builds a citation for the requested identifier and feeds it every
//! source payload supplied with the request.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{Citation, NormalizeRequest, SourcePayload},
    translators::Normalizer,
};

/// Error code attached to citations whose source payload has the wrong shape
pub const MALFORMED_PAYLOAD: u16 = 520;

#[derive(Clone)]
pub struct CitationService {
    normalizer: Arc<Normalizer>,
    max_sources: usize,
}

impl CitationService {
    pub fn new(normalizer: Normalizer, max_sources: usize) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
            max_sources,
        }
    }

    /// Normalize all source payloads of a request into one citation.
    ///
    /// Payload shape problems do not fail the request: they are recorded
    /// on `citation.error` and the remaining sources are skipped.
    pub fn normalize(&self, request: NormalizeRequest) -> AppResult<Citation> {
        if request.sources.len() > self.max_sources {
            return Err(AppError::BadRequest(format!(
                "Too many sources: {} (max {})",
                request.sources.len(),
                self.max_sources
            )));
        }

        let id_value = request.id_value.trim();
        if id_value.is_empty() {
            return Err(AppError::Validation("Identifier value must not be empty".to_string()));
        }

        let mut citation = Citation::new(request.id_type, id_value);
        citation.item_type = request.item_type;

        for SourcePayload { source, payload } in &request.sources {
            if !payload.is_object() {
                tracing::warn!(
                    "Source {} returned a {} payload for {}, expected an object",
                    source,
                    json_kind(payload),
                    citation.id_value()
                );
                citation.set_error(
                    MALFORMED_PAYLOAD,
                    format!("Unable to process payload from {}", source),
                );
                break;
            }

            self.normalizer.normalize(&mut citation, payload);
            citation.add_source(source.clone());
        }

        tracing::info!(
            "Citation for {:?} {} assembled from {} source(s), item type {:?}",
            citation.id_type(),
            citation.id_value(),
            citation.source.len(),
            citation.item_type
        );

        Ok(citation)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
