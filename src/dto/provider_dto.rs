use serde::Serialize;

use crate::models::provider::{FeedSchema, ProviderDefinition, ProviderId};

// Entrada de GET /api/providers (leyenda del mapa)
#[derive(Debug, Serialize)]
pub struct ProviderInfo {
    pub id: ProviderId,
    pub name: &'static str,
    pub color: &'static str,
    pub initial: &'static str,
    pub schema: FeedSchema,
}

impl ProviderInfo {
    pub fn from_definition(id: ProviderId, definition: &ProviderDefinition) -> Self {
        Self {
            id,
            name: definition.display.name,
            color: definition.display.color,
            initial: definition.display.initial,
            schema: definition.schema,
        }
    }
}
