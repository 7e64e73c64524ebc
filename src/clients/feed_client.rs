//! Cliente de feeds de proveedores
//!
//! Descarga el feed de cada proveedor y lo normaliza al modelo `Vehicle`.
//! Un proveedor que falla (timeout, status no 2xx, JSON inválido) nunca
//! propaga el error: aporta cero vehículos en ese ciclo.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::models::provider::{ProviderDefinition, ProviderId};
use crate::models::vehicle::{GeoPoint, Vehicle};
use crate::utils::errors::{AppError, AppResult};

/// Origen de vehículos de un proveedor
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Nunca falla: cualquier error se traduce en una lista vacía
    async fn fetch_provider(&self, id: ProviderId, definition: &ProviderDefinition) -> Vec<Vehicle>;
}

/// Registro crudo tal como llega en el feed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVehicle {
    lat: Option<Value>,
    lon: Option<Value>,
    lng: Option<Value>,
    current_fuel_percent: Option<Value>,
    current_range_meters: Option<Value>,
    bike_id: Option<Value>,
    vehicle_id: Option<Value>,
    id: Option<Value>,
    rental_uris: Option<Value>,
}

/// Número JSON o string numérico
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn as_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Fracción de carga (0.0..1.0) a porcentaje entero
fn battery_from_fraction(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

fn range_from_raw(meters: f64) -> Option<u32> {
    let rounded = meters.round();
    if rounded < 0.0 {
        None
    } else {
        Some(rounded.min(u32::MAX as f64) as u32)
    }
}

/// Enlace de la plataforma indicada; un valor vacío o no textual cuenta como ausente
fn platform_uri(uris: &Value, platform: &str) -> Option<String> {
    uris.get(platform)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalizar un registro; None si no tiene coordenadas válidas o cae fuera
/// de la caja del proveedor
pub fn normalize_record(id: ProviderId, definition: &ProviderDefinition, raw: &Value) -> Option<Vehicle> {
    let raw: RawVehicle = RawVehicle::deserialize(raw).ok()?;

    let lat = raw.lat.as_ref().and_then(as_number)?;
    let lng = raw
        .lon
        .as_ref()
        .filter(|v| !v.is_null())
        .or(raw.lng.as_ref())
        .and_then(as_number)?;
    let position = GeoPoint::new(lat, lng)?;

    if let Some(bbox) = &definition.bounding_box {
        if !bbox.contains(position) {
            return None;
        }
    }

    let vehicle_id = [&raw.bike_id, &raw.vehicle_id, &raw.id]
        .into_iter()
        .flatten()
        .find_map(as_identifier);

    let deep_link = raw
        .rental_uris
        .as_ref()
        .and_then(|uris| platform_uri(uris, "ios").or_else(|| platform_uri(uris, "android")));

    Some(Vehicle {
        battery_percent: raw
            .current_fuel_percent
            .as_ref()
            .and_then(as_number)
            .map(battery_from_fraction),
        range_meters: raw.current_range_meters.as_ref().and_then(as_number).and_then(range_from_raw),
        vehicle_id,
        deep_link,
        ..Vehicle::new(id, position)
    })
}

/// Extraer y normalizar todos los vehículos de un documento del feed
pub fn normalize_feed(id: ProviderId, definition: &ProviderDefinition, payload: &Value) -> Vec<Vehicle> {
    let [outer, inner] = definition.schema.vehicles_path();

    let Some(records) = payload
        .get(outer)
        .and_then(|data| data.get(inner))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    records
        .iter()
        .filter_map(|raw| normalize_record(id, definition, raw))
        .collect()
}

/// Cliente HTTP para los feeds públicos
#[derive(Clone)]
pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn try_fetch(&self, id: ProviderId, definition: &ProviderDefinition) -> AppResult<Vec<Vehicle>> {
        let response = self
            .client
            .get(&definition.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        Ok(normalize_feed(id, definition, &payload))
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch_provider(&self, id: ProviderId, definition: &ProviderDefinition) -> Vec<Vehicle> {
        match self.try_fetch(id, definition).await {
            Ok(vehicles) => {
                log::debug!("🛴 {}: {} vehículos normalizados", id, vehicles.len());
                vehicles
            }
            Err(e) => {
                log::warn!("⚠️ Feed {} no disponible ({}): {}", id, definition.url, e);
                Vec::new()
            }
        }
    }
}
