use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::dto::geocode_dto::GeocodeParams;
use crate::services::geocoding_service::GeocodeHit;
use crate::state::AppState;

pub fn create_geocoding_router() -> Router<AppState> {
    Router::new().route("/geocode", get(geocode))
}

/// GET /api/geocode?q=
///
/// Passthrough a Nominatim. Cualquier fallo devuelve una lista vacía.
async fn geocode(
    State(state): State<AppState>,
    params: Result<Query<GeocodeParams>, QueryRejection>,
) -> Response {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let Some(query) = params.query() else {
        return Json(Vec::<GeocodeHit>::new()).into_response();
    };

    match state.geocoder.search(query).await {
        Ok(hits) => {
            let max_age = state.config.geocode_cache_max_age_secs;
            (
                [(
                    header::CACHE_CONTROL,
                    format!("public, max-age={}, s-maxage={}", max_age, max_age),
                )],
                Json(hits),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("⚠️ Geocoding error for '{}': {}", query, e);
            Json(Vec::<GeocodeHit>::new()).into_response()
        }
    }
}
