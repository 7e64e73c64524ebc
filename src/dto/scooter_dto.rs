use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::aggregation::AggregationResult;
use crate::models::vehicle::Vehicle;

// Parámetros de GET /api/scooters. Todo llega como string para poder volver
// al valor por defecto cuando algo no se puede interpretar.
#[derive(Debug, Default, Deserialize)]
pub struct ScooterQueryParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    #[serde(rename = "minBattery")]
    pub min_battery: Option<String>,
    pub provider: Option<String>,
    #[serde(rename = "destLat")]
    pub dest_lat: Option<String>,
    #[serde(rename = "destLng")]
    pub dest_lng: Option<String>,
    #[serde(rename = "corridorWidth")]
    pub corridor_width: Option<String>,
}

// Vehículo tal como lo consume el mapa
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDto {
    pub provider: String,
    pub lat: f64,
    pub lng: f64,
    pub battery: Option<u8>,
    pub range_m: Option<u32>,
    pub vehicle_id: Option<String>,
    pub deep_link: Option<String>,
    pub distance_m: f64,
}

impl From<Vehicle> for VehicleDto {
    fn from(v: Vehicle) -> Self {
        Self {
            provider: v.provider.to_string(),
            lat: v.position.lat,
            lng: v.position.lng,
            battery: v.battery_percent,
            range_m: v.range_meters,
            vehicle_id: v.vehicle_id,
            deep_link: v.deep_link,
            distance_m: v.distance_from_origin_m,
        }
    }
}

// Response de GET /api/scooters
#[derive(Debug, Serialize)]
pub struct ScooterResponse {
    pub vehicles: Vec<VehicleDto>,
    pub providers: BTreeMap<String, usize>,
}

impl From<AggregationResult> for ScooterResponse {
    fn from(result: AggregationResult) -> Self {
        Self {
            vehicles: result.vehicles.into_iter().map(VehicleDto::from).collect(),
            providers: result
                .counts
                .into_iter()
                .map(|(id, count)| (id.to_string(), count))
                .collect(),
        }
    }
}
