//! Citekit bibliographic metadata normalization
//!
//! Turns raw catalog metadata (WorldCat/xISBN style records) into
//! normalized citations, and serves that over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod translators;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            services: Arc::new(services::Services::new(&config.normalization)),
        }
    }
}
