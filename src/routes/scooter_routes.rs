use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::scooter_controller::ScooterController;
use crate::dto::scooter_dto::ScooterQueryParams;
use crate::state::AppState;

pub fn create_scooter_router() -> Router<AppState> {
    Router::new().route("/scooters", get(get_scooters))
}

/// GET /api/scooters
///
/// Nunca responde con error por un proveedor caído: en el peor caso la lista
/// sale vacía.
async fn get_scooters(
    State(state): State<AppState>,
    params: Result<Query<ScooterQueryParams>, QueryRejection>,
) -> impl IntoResponse {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!("⚠️ Query inválida, usando valores por defecto: {}", e);
            ScooterQueryParams::default()
        }
    };
    tracing::debug!("🔍 Scooter query: {:?}", params);

    let controller = ScooterController::new(state.aggregator.clone(), state.config.clone());
    let response = controller.search(&params).await;

    ([(header::CACHE_CONTROL, controller.cache_control())], Json(response))
}
