//! Application state shared across all handlers.

use crate::source::LogSource;
use ld_core::config::DigestConfig;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DigestConfig>,
    pub source: LogSource,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: DigestConfig) -> Self {
        Self {
            source: LogSource::new(&config.source),
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DigestConfig::default())
    }
}
