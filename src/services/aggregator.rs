//! Agregador de feeds
//!
//! Consulta en paralelo todos los proveedores seleccionados, espera a que
//! terminen todos (barrera fan-out/fan-in) y después filtra y ordena el
//! conjunto combinado respecto al origen de la consulta.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::clients::feed_client::FeedSource;
use crate::config::providers::ProviderRegistry;
use crate::models::aggregation::{AggregationQuery, AggregationResult};
use crate::models::vehicle::Vehicle;
use crate::utils::geometry::{distance_to_segment_m, great_circle_distance_m, round_to_decimeter};

/// Holgura para errores de coma flotante en el borde del corredor
const CORRIDOR_EPSILON_M: f64 = 1e-6;

pub struct Aggregator {
    source: Arc<dyn FeedSource>,
    registry: Arc<ProviderRegistry>,
}

impl Aggregator {
    pub fn new(source: Arc<dyn FeedSource>, registry: Arc<ProviderRegistry>) -> Self {
        Self { source, registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Ejecutar una consulta completa contra los feeds
    pub async fn aggregate(&self, query: &AggregationQuery) -> AggregationResult {
        let targets = self.registry.select(query.providers.as_deref());
        if targets.is_empty() {
            debug!("🔍 Ningún proveedor seleccionado para {:?}", query.providers);
            return AggregationResult::default();
        }

        let names: Vec<&str> = targets.iter().map(|(id, _)| id.as_str()).collect();
        debug!("🌐 Consultando {} proveedores: {}", targets.len(), names.join(","));

        let feeds = join_all(
            targets
                .iter()
                .map(|(id, definition)| self.source.fetch_provider(*id, definition)),
        )
        .await;

        let fetched: Vec<Vehicle> = feeds.into_iter().flatten().collect();
        let fetched_count = fetched.len();

        let result = rank_vehicles(fetched, query);
        info!(
            "✅ Agregación: {} vehículos recibidos, {} dentro de {} m",
            fetched_count,
            result.total(),
            query.radius_m
        );
        result
    }
}

/// Etapa síncrona posterior a la barrera: distancias, filtros, orden y conteo.
///
/// El orden es estable, así que los empates conservan el orden de
/// concatenación de los feeds.
pub fn rank_vehicles(vehicles: Vec<Vehicle>, query: &AggregationQuery) -> AggregationResult {
    let origin = query.origin;

    let mut ranked: Vec<Vehicle> = vehicles
        .into_iter()
        .map(|v| {
            let distance = round_to_decimeter(great_circle_distance_m(origin, v.position));
            v.with_distance(distance)
        })
        .filter(|v| v.distance_from_origin_m <= query.radius_m)
        .filter(|v| v.meets_battery(query.min_battery))
        .filter(|v| match query.destination {
            Some(destination) => {
                distance_to_segment_m(v.position, origin, destination)
                    <= query.corridor_width_m + CORRIDOR_EPSILON_M
            }
            None => true,
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_from_origin_m.total_cmp(&b.distance_from_origin_m));

    let mut counts = BTreeMap::new();
    for v in &ranked {
        *counts.entry(v.provider).or_insert(0) += 1;
    }

    AggregationResult {
        vehicles: ranked,
        counts,
    }
}
