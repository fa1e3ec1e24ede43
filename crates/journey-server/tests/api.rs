//! Router-level tests: real handlers, on-disk fixtures, no network.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use journey_core::{DataPaths, GeoService, Theme};
use journey_server::{app, AppState};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A data root with ITA/FRA/JPN and a borderscapes globe.
fn fixture() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::new(dir.path());

    let countries = json!([
        { "country_code": "ITA", "country_description": "Italy", "macroarea_id": 12, "continent_id": 3 },
        { "country_code": "FRA", "country_description": "France", "macroarea_id": 10, "continent_id": 3 },
        { "country_code": "JPN", "country_description": "Japan", "macroarea_id": 37, "continent_id": 4 }
    ]);
    write(&paths.countries_json(), &countries.to_string());

    let globe = json!({
        "points": [
            { "lat": 45.8, "lng": 6.9, "name": "Mont Blanc" },
            { "lat": 35.4, "lng": 138.7, "name": "Fuji" }
        ],
        "metadata": { "title": "Borderscapes" }
    });
    write(
        &paths.globe_dir().join(Theme::Borderscapes.globe_file_name()),
        &globe.to_string(),
    );

    let router = app(AppState::new(GeoService::new(paths)));
    (dir, router)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn countries_default_level_and_filters() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/countries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "countries");
    assert_eq!(body["total"], 3);
    assert_eq!(body["filters"]["search"], Value::Null);

    let (_, body) = get(&router, "/api/countries?search=ita").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["country_code"], "ITA");
    assert_eq!(body["data"][0]["macroarea_name"], "Italian Peninsula");
    assert_eq!(body["filters"]["search"], "ita");

    let (_, body) = get(&router, "/api/countries?macroarea=10").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["filters"]["macroarea"], 10);

    let (_, body) = get(&router, "/api/countries?limit=2").await;
    assert_eq!(body["total"], 2);

    let (_, body) = get(&router, "/api/countries?limit=0").await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn countries_macroarea_level() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/countries?level=macroareas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "macroareas");
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["name"], "East Asia");
    assert_eq!(body["data"][0]["countryCount"], 1);
    assert_eq!(body["searchTerm"], Value::Null);

    let (_, body) = get(&router, "/api/countries?level=macroareas&search=western").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["countries"], json!(["FRA"]));
    assert_eq!(body["searchTerm"], "western");
}

#[tokio::test]
async fn invalid_parameters_are_client_errors() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/countries?level=cities").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["valid"], json!(["countries", "macroareas"]));

    let (status, _) = get(&router, "/api/countries?macroarea=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&router, "/api/globe/volcanoes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["valid"].as_array().map(Vec::len), Some(4));

    let (status, _) = get(&router, "/api/globe/borderscapes?level=planets").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn macroareas_endpoint_reports_metadata() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/macroareas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["total_count"], 3);
    assert_eq!(body["metadata"]["total_countries"], 3);
    assert_eq!(body["metadata"]["continents_represented"], json!([3, 4]));

    let (_, body) = get(&router, "/api/macroareas?continent_id=4").await;
    assert_eq!(body["metadata"]["total_count"], 1);
    assert_eq!(body["macroareas"][0]["name"], "East Asia");
}

#[tokio::test]
async fn globe_applies_bounds_and_level() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/globe/borderscapes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["metadata"]["level"], "macroareas");
    assert_eq!(body["metadata"]["title"], "Borderscapes");
    assert!(body.get("countries").is_none());

    // {"north":60,"south":35,"east":30,"west":-10}, URL-encoded.
    let uri = "/api/globe/borders?bounds=%7B%22north%22%3A60%2C%22south%22%3A35%2C%22east%22%3A30%2C%22west%22%3A-10%7D";
    let (_, body) = get(&router, uri).await;
    assert_eq!(body["points"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["points"][0]["name"], "Mont Blanc");
    assert_eq!(body["metadata"]["cacheKey"], "borderscapes-macroareas-60,35,30,-10");

    let (_, body) = get(&router, "/api/globe/borderscapes?bounds=garbage").await;
    assert_eq!(body["points"].as_array().map(Vec::len), Some(2));

    let (_, body) = get(&router, "/api/globe/borderscapes?level=countries").await;
    assert_eq!(body["countries"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn missing_globe_is_a_server_error() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/api/globe/mindscapes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn missing_dataset_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    let router = app(AppState::new(GeoService::new(DataPaths::new(dir.path()))));

    let (status, _) = get(&router, "/api/countries").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let (_dir, router) = fixture();

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["globe_files"]["BS-globe.json"], true);

    let (status, body) = get(&router, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/api/nope");
}

#[tokio::test(flavor = "current_thread")]
async fn health_answers_alongside_globe_cache_misses() {
    let (_dir, router) = fixture();

    let (globe, health, countries) = tokio::join!(
        get(&router, "/api/globe/borderscapes"),
        get(&router, "/health"),
        get(&router, "/api/globe/borderscapes?level=countries"),
    );
    assert_eq!(globe.0, StatusCode::OK);
    assert_eq!(health.0, StatusCode::OK);
    assert_eq!(countries.0, StatusCode::OK);

    let (_, body) = get(&router, "/health").await;
    assert_eq!(body["checks"]["cached_responses"], 2);
}
