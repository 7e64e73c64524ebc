#![allow(dead_code)]

//! Servidor local que imita los feeds de los proveedores y Nominatim

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use scooter_finder::clients::feed_client::HttpFeedClient;
use scooter_finder::config::environment::EnvironmentConfig;
use scooter_finder::config::providers::ProviderRegistry;
use scooter_finder::models::provider::ProviderId;
use scooter_finder::models::vehicle::GeoPoint;
use scooter_finder::AppState;

pub const ORIGIN: GeoPoint = GeoPoint { lat: 47.376, lng: 8.528 };
pub const FEED_TIMEOUT: Duration = Duration::from_millis(300);

/// bird: feed v2 válido con tres vehículos cerca del origen y uno lejos
fn bird_feed() -> Value {
    json!({
        "last_updated": 1700000000,
        "ttl": 0,
        "data": {
            "bikes": [
                { "bike_id": "bird-far", "lat": 47.400, "lon": 8.528, "current_fuel_percent": 0.95 },
                { "bike_id": "bird-3", "lat": 47.3775, "lon": 8.528, "current_fuel_percent": 0.3 },
                { "bike_id": "bird-1", "lat": 47.3765, "lon": 8.528, "current_fuel_percent": 0.9,
                  "rental_uris": { "ios": "bird://scan/1" } },
                { "bike_id": "bird-2", "lat": 47.3770, "lon": 8.528, "current_range_meters": 4200 },
                { "bike_id": "bird-broken", "lon": 8.528 }
            ]
        }
    })
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    Json(json!([
        { "lat": "47.3779", "lon": "8.5403", "display_name": format!("{}, Zürich", q) },
        { "lat": "oops", "lon": "8.5", "display_name": "broken" }
    ]))
}

/// Arrancar el servidor en un puerto libre
pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/bird", get(|| async { Json(bird_feed()) }))
        .route(
            "/bolt",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "data": { "vehicles": [ { "vehicle_id": "late", "lat": 47.376, "lon": 8.528 } ] } }))
            }),
        )
        .route("/dott", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/lime", get(|| async { "definitely not json" }))
        .route("/search", get(search));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Registro de Zúrich apuntando al servidor local (voi no tiene ruta: 404)
pub fn local_registry(addr: SocketAddr) -> ProviderRegistry {
    ProviderId::ALL
        .into_iter()
        .fold(ProviderRegistry::zurich(), |registry, id| {
            registry.with_url(id, format!("http://{}/{}", addr, id))
        })
}

pub fn feed_client() -> HttpFeedClient {
    HttpFeedClient::new(FEED_TIMEOUT, "scooter-finder-tests/1.0").unwrap()
}

pub fn local_state(addr: SocketAddr) -> AppState {
    let config = EnvironmentConfig {
        geocoder_url: format!("http://{}/search", addr),
        ..EnvironmentConfig::default()
    };
    AppState::with_source(config, local_registry(addr), Arc::new(feed_client())).unwrap()
}
