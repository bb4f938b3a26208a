//! Business logic services

pub mod citations;

use crate::config::NormalizationConfig;
use crate::translators::Normalizer;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub citations: citations::CitationService,
}

impl Services {
    pub fn new(normalization: &NormalizationConfig) -> Self {
        let normalizer = Normalizer::new(normalization.normalizer_options());
        Self {
            citations: citations::CitationService::new(normalizer, normalization.max_sources),
        }
    }
}
