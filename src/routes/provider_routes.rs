use axum::{extract::State, routing::get, Json, Router};

use crate::dto::provider_dto::ProviderInfo;
use crate::state::AppState;

pub fn create_provider_router() -> Router<AppState> {
    Router::new().route("/providers", get(list_providers))
}

async fn list_providers(State(state): State<AppState>) -> Json<Vec<ProviderInfo>> {
    let providers = state
        .aggregator
        .registry()
        .iter()
        .map(|(id, definition)| ProviderInfo::from_definition(id, definition))
        .collect();
    Json(providers)
}
