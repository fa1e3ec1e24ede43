//! journey-server
//! ==============
//!
//! JSON REST API over `journey-core`: country listings, macro-region
//! aggregates and per-theme globe documents, all backed by the shared
//! response cache.
//!
//! Routes
//! ------
//!
//! - `GET /health`
//! - `GET /api`
//! - `GET /api/countries?level=countries|macroareas&search=&macroarea=&limit=`
//! - `GET /api/macroareas?continent_id=`
//! - `GET /api/globe/:theme?level=&bounds={"north":..,"south":..,"east":..,"west":..}`

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Builds the full router. Handlers only parse parameters and shape JSON;
/// all data work happens in `journey_core::GeoService`.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(routes::index))
        .route("/countries", get(routes::countries))
        .route("/macroareas", get(routes::macroareas))
        .route("/globe/:theme", get(routes::globe));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api_routes)
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
