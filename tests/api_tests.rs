mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use common::{local_state, spawn_upstream};
use scooter_finder::create_app;

async fn create_test_app() -> Router {
    let addr = spawn_upstream().await;
    create_app(local_state(addr))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    (status, cache_control, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let (status, _, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_scooters_sorted_with_counts() {
    let app = create_test_app().await;
    let (status, cache_control, body) = get(app, "/api/scooters?lat=47.376&lng=8.528&radius=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=30, s-maxage=30"));

    let vehicles = body["vehicles"].as_array().unwrap();
    let ids: Vec<&str> = vehicles.iter().map(|v| v["vehicle_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["bird-1", "bird-2", "bird-3"]);

    let distances: Vec<f64> = vehicles.iter().map(|v| v["distance_m"].as_f64().unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(vehicles[0]["provider"], "bird");
    assert_eq!(vehicles[1]["range_m"], 4200);
    assert!(vehicles[1]["battery"].is_null());

    assert_eq!(body["providers"], serde_json::json!({ "bird": 3 }));
}

#[tokio::test]
async fn test_scooters_min_battery() {
    let app = create_test_app().await;
    let (_, _, body) = get(app, "/api/scooters?minBattery=50").await;

    let vehicles = body["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["vehicle_id"], "bird-1");
    assert_eq!(vehicles[0]["battery"], 90);
}

#[tokio::test]
async fn test_scooters_provider_allowlist() {
    let app = create_test_app().await;
    let (_, _, body) = get(app.clone(), "/api/scooters?provider=BIRD,hopp").await;
    assert_eq!(body["vehicles"].as_array().unwrap().len(), 3);

    let (status, _, body) = get(app, "/api/scooters?provider=hopp").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["vehicles"].as_array().unwrap().is_empty());
    assert_eq!(body["providers"], serde_json::json!({}));
}

#[tokio::test]
async fn test_scooters_garbage_params_use_defaults() {
    let app = create_test_app().await;
    let (status, _, body) = get(app, "/api/scooters?lat=abc&lng=&radius=wide&minBattery=-3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicles"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_scooters_corridor() {
    let app = create_test_app().await;
    // Destino hacia el este: de los vehículos al norte solo el primero queda a menos de 60 m de la ruta
    let (_, _, body) = get(
        app,
        "/api/scooters?destLat=47.376&destLng=8.540&corridorWidth=60",
    )
    .await;

    let ids: Vec<&str> = body["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["vehicle_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["bird-1"]);
}

#[tokio::test]
async fn test_providers_listing() {
    let app = create_test_app().await;
    let (status, _, body) = get(app, "/api/providers").await;

    assert_eq!(status, StatusCode::OK);
    let providers = body.as_array().unwrap();
    assert_eq!(providers.len(), 5);
    assert_eq!(providers[0]["id"], "bolt");
    assert_eq!(providers[0]["schema"], "v3");
    assert_eq!(providers[4]["name"], "Voi");
}

#[tokio::test]
async fn test_geocode_passthrough() {
    let app = create_test_app().await;
    let (status, cache_control, body) = get(app.clone(), "/api/geocode?q=Bahnhofstrasse").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=86400, s-maxage=86400"));
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["display_name"], "Bahnhofstrasse, Zürich");
    assert_eq!(hits[0]["lat"], 47.3779);
    assert_eq!(hits[0]["lng"], 8.5403);

    let (_, _, body) = get(app, "/api/geocode?q=%20").await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = create_test_app().await;
    let (status, _, body) = get(app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
