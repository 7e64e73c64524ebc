//! Geometría esférica
//!
//! Distancias de gran círculo (haversine) y distancia de un punto a un
//! segmento, usadas para el radio de búsqueda y el corredor origen-destino.

use crate::models::vehicle::GeoPoint;

/// Radio medio de la Tierra en metros
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distancia de gran círculo entre dos puntos, en metros
pub fn great_circle_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // En puntos antipodales el redondeo puede dejar h apenas por encima de 1
    2.0 * EARTH_RADIUS_M * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Distancia de `point` al segmento `start`-`end`, en metros.
///
/// La proyección se hace en el plano lat/lng sin corrección esférica; solo la
/// distancia final al punto más cercano usa haversine. El parámetro de
/// interpolación se limita a [0, 1], así el punto más cercano nunca cae fuera
/// del segmento.
pub fn distance_to_segment_m(point: GeoPoint, start: GeoPoint, end: GeoPoint) -> f64 {
    let dx = end.lng - start.lng;
    let dy = end.lat - start.lat;

    if dx == 0.0 && dy == 0.0 {
        return great_circle_distance_m(point, start);
    }

    let t = ((point.lng - start.lng) * dx + (point.lat - start.lat) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);

    let closest = GeoPoint {
        lat: start.lat + t * dy,
        lng: start.lng + t * dx,
    };

    great_circle_distance_m(point, closest)
}

/// Redondear metros a un decimal
pub fn round_to_decimeter(meters: f64) -> f64 {
    (meters * 10.0).round() / 10.0
}
