pub mod geocoding_routes;
pub mod provider_routes;
pub mod scooter_routes;

use axum::{http::Uri, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Crear la aplicación completa con sus capas
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(scooter_routes::create_scooter_router())
        .merge(geocoding_routes::create_geocoding_router())
        .merge(provider_routes::create_provider_router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(cors_middleware(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "scooter-finder",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
