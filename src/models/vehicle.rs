//! Modelo de Vehicle
//!
//! Vehículo canónico (patinete o bici) después de normalizar el feed de su
//! proveedor. Es un valor inmutable: filtrar u ordenar produce secuencias nuevas.

use serde::{Deserialize, Serialize};

use crate::models::provider::ProviderId;

/// Coordenada WGS84 en grados decimales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Construir un punto solo si ambas coordenadas son finitas
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() {
            Some(Self { lat, lng })
        } else {
            None
        }
    }
}

/// Caja geográfica (límites inclusivos)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lng_min
            && point.lng <= self.lng_max
    }
}

/// Vehículo normalizado
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub provider: ProviderId,
    pub position: GeoPoint,
    /// 0..=100, None si el proveedor no lo reporta
    pub battery_percent: Option<u8>,
    pub range_meters: Option<u32>,
    pub vehicle_id: Option<String>,
    pub deep_link: Option<String>,
    /// Lo calcula el agregador; 0.0 hasta entonces
    pub distance_from_origin_m: f64,
}

impl Vehicle {
    pub fn new(provider: ProviderId, position: GeoPoint) -> Self {
        Self {
            provider,
            position,
            battery_percent: None,
            range_meters: None,
            vehicle_id: None,
            deep_link: None,
            distance_from_origin_m: 0.0,
        }
    }

    /// Copia del vehículo con la distancia al origen ya calculada
    pub fn with_distance(self, distance_m: f64) -> Self {
        Self {
            distance_from_origin_m: distance_m.max(0.0),
            ..self
        }
    }

    /// true si la batería es conocida y alcanza el umbral
    pub fn meets_battery(&self, min_battery: u8) -> bool {
        if min_battery == 0 {
            return true;
        }
        matches!(self.battery_percent, Some(b) if b >= min_battery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 8.5).is_none());
        assert!(GeoPoint::new(47.3, f64::INFINITY).is_none());
        assert_eq!(GeoPoint::new(47.3, 8.5), Some(GeoPoint { lat: 47.3, lng: 8.5 }));
    }

    #[test]
    fn test_bounding_box_is_inclusive() {
        let bbox = BoundingBox { lat_min: 47.32, lat_max: 47.43, lng_min: 8.45, lng_max: 8.60 };
        assert!(bbox.contains(GeoPoint { lat: 47.32, lng: 8.60 }));
        assert!(bbox.contains(GeoPoint { lat: 47.37, lng: 8.54 }));
        assert!(!bbox.contains(GeoPoint { lat: 47.31, lng: 8.54 }));
        assert!(!bbox.contains(GeoPoint { lat: 47.37, lng: 8.61 }));
    }

    #[test]
    fn test_battery_threshold() {
        let base = Vehicle::new(ProviderId::Lime, GeoPoint { lat: 47.0, lng: 8.0 });
        let unknown = base.clone();
        let low = Vehicle { battery_percent: Some(40), ..base.clone() };
        let high = Vehicle { battery_percent: Some(75), ..base };

        assert!(unknown.meets_battery(0));
        assert!(!unknown.meets_battery(50));
        assert!(!low.meets_battery(50));
        assert!(high.meets_battery(50));
        assert!(high.meets_battery(75));
    }
}
