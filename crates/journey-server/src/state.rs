use std::sync::Arc;
use std::time::Instant;

use journey_core::GeoService;

use super::config::ServerConfig;

/// Shared by every handler. The service (and with it the response cache) is
/// built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GeoService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: GeoService) -> Self {
        Self {
            service: Arc::new(service),
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let service = GeoService::with_options(
            config.data_paths(),
            config.cache_ttl,
            Arc::new(journey_core::cache::SystemClock),
        );
        Self::new(service)
    }
}
