//! Consulta y resultado de una agregación
//!
//! Ambos son efímeros: se crean por request y se descartan al responder.

use std::collections::BTreeMap;

use crate::models::provider::ProviderId;
use crate::models::vehicle::{GeoPoint, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationQuery {
    pub origin: GeoPoint,
    pub destination: Option<GeoPoint>,
    pub radius_m: f64,
    /// 0 desactiva el filtro de batería
    pub min_battery: u8,
    /// Semiancho del corredor origen-destino
    pub corridor_width_m: f64,
    /// None = todos los proveedores registrados
    pub providers: Option<Vec<String>>,
}

impl AggregationQuery {
    pub fn around(origin: GeoPoint, radius_m: f64) -> Self {
        Self {
            origin,
            destination: None,
            radius_m,
            min_battery: 0,
            corridor_width_m: 80.0,
            providers: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    /// Ordenados por distancia ascendente
    pub vehicles: Vec<Vehicle>,
    /// Conteo sobre el conjunto ya filtrado
    pub counts: BTreeMap<ProviderId, usize>,
}

impl AggregationResult {
    pub fn total(&self) -> usize {
        self.vehicles.len()
    }
}
