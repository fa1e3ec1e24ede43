use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use journey_core::{
    model::{CountryView, Level, MacroRegion, Theme},
    GeoError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Default page size of `/api/countries`.
pub const DEFAULT_LIMIT: i64 = 50;

// ============================================================================
// Query parameters
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CountriesParams {
    pub level: Option<String>,
    pub search: Option<String>,
    pub macroarea: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MacroareasParams {
    pub continent_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobeParams {
    pub level: Option<String>,
    pub bounds: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Serialize)]
pub struct CountryFilters {
    pub search: Option<String>,
    pub macroarea: Option<u32>,
}

#[derive(Serialize)]
pub struct CountriesResponse {
    pub level: Level,
    pub total: usize,
    pub data: Vec<CountryView>,
    pub filters: CountryFilters,
}

#[derive(Serialize)]
pub struct MacroareaLevelResponse {
    pub level: Level,
    pub total: usize,
    pub data: Vec<MacroRegion>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

// ============================================================================
// Parameter parsing
// ============================================================================

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_level(raw: Option<&str>, default: Level) -> Result<Level, GeoError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}

fn parse_id(name: &'static str, raw: Option<&str>) -> Result<Option<u32>, GeoError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|_| GeoError::invalid_parameter(name, s, &["a positive integer id"])),
        None => Ok(None),
    }
}

/// Unparseable limits mean "no truncation", like an absent one would if
/// there were no default.
fn parse_limit(raw: Option<&str>) -> Option<i64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<i64>().ok(),
        None => Some(DEFAULT_LIMIT),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /api/countries?level=&search=&macroarea=&limit=`
#[instrument(skip(state))]
pub async fn countries(
    State(state): State<AppState>,
    Query(params): Query<CountriesParams>,
) -> Result<Response, ApiError> {
    let level = parse_level(params.level.as_deref(), Level::Countries)?;
    let search = non_empty(params.search);
    let service = state.service.clone();

    match level {
        Level::Macroareas => {
            let term = search.clone();
            let data = tokio::task::spawn_blocking(move || {
                service.list_macroareas(term.as_deref())
            })
            .await??;

            Ok(Json(MacroareaLevelResponse {
                level,
                total: data.len(),
                data,
                search_term: search,
            })
            .into_response())
        }
        Level::Countries => {
            let macroarea = parse_id("macroarea", params.macroarea.as_deref())?;
            let limit = parse_limit(params.limit.as_deref());
            let term = search.clone();
            let data = tokio::task::spawn_blocking(move || {
                service.list_countries(term.as_deref(), macroarea, limit)
            })
            .await??;

            debug!(total = data.len(), "countries listed");
            Ok(Json(CountriesResponse {
                level,
                total: data.len(),
                data,
                filters: CountryFilters { search, macroarea },
            })
            .into_response())
        }
    }
}

/// `GET /api/macroareas?continent_id=`
#[instrument(skip(state))]
pub async fn macroareas(
    State(state): State<AppState>,
    Query(params): Query<MacroareasParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let continent_id = parse_id("continent_id", params.continent_id.as_deref())?;
    let service = state.service.clone();

    let summary =
        tokio::task::spawn_blocking(move || service.list_macroareas_by_continent(continent_id))
            .await??;

    Ok(Json(json!({
        "macroareas": summary.macroareas,
        "metadata": {
            "total_count": summary.total_count,
            "continents_represented": summary.continents_represented,
            "total_countries": summary.total_countries,
            "last_updated": Utc::now().to_rfc3339(),
        }
    })))
}

/// `GET /api/globe/:theme?level=&bounds=`
#[instrument(skip(state))]
pub async fn globe(
    State(state): State<AppState>,
    Path(theme): Path<String>,
    Query(params): Query<GlobeParams>,
) -> Result<Response, ApiError> {
    let theme: Theme = theme.parse()?;
    let level = parse_level(params.level.as_deref(), Level::Macroareas)?;
    let service = state.service.clone();
    let bounds = params.bounds;

    let response =
        tokio::task::spawn_blocking(move || service.globe(theme, level, bounds.as_deref()))
            .await??;

    Ok(Json(response).into_response())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Response, ApiError> {
    let service = state.service.clone();
    let report = tokio::task::spawn_blocking(move || service.health()).await?;
    let status = if report.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if report.healthy { "healthy" } else { "unhealthy" },
        "service": "journey-server",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime_secs": state.started_at.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": report,
    });

    Ok((status, Json(body)).into_response())
}

/// `GET /api`
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": "journey-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "countries": "/api/countries",
            "macroareas": "/api/macroareas",
            "globe": "/api/globe/:theme",
            "health": "/health",
        },
        "themes": Theme::VALID,
        "levels": Level::VALID,
    }))
}

pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found", "path": uri.path() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_tolerates_garbage() {
        assert_eq!(parse_limit(None), Some(DEFAULT_LIMIT));
        assert_eq!(parse_limit(Some("")), Some(DEFAULT_LIMIT));
        assert_eq!(parse_limit(Some("10")), Some(10));
        assert_eq!(parse_limit(Some("-1")), Some(-1));
        assert_eq!(parse_limit(Some("lots")), None);
    }

    #[test]
    fn ids_must_be_numeric() {
        assert_eq!(parse_id("macroarea", None).unwrap(), None);
        assert_eq!(parse_id("macroarea", Some(" 12 ")).unwrap(), Some(12));
        assert!(parse_id("macroarea", Some("twelve")).is_err());
    }

    #[test]
    fn level_defaults_per_endpoint() {
        assert_eq!(parse_level(None, Level::Countries).unwrap(), Level::Countries);
        assert_eq!(parse_level(Some(""), Level::Macroareas).unwrap(), Level::Macroareas);
        assert!(parse_level(Some("cities"), Level::Countries).is_err());
    }
}
