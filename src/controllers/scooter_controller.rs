use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::dto::scooter_dto::{ScooterQueryParams, ScooterResponse};
use crate::models::aggregation::AggregationQuery;
use crate::models::vehicle::GeoPoint;
use crate::services::aggregator::Aggregator;
use crate::utils::validation::{parse_csv_list, parse_f64_or, parse_finite, parse_percent_or};

pub struct ScooterController {
    aggregator: Arc<Aggregator>,
    config: Arc<EnvironmentConfig>,
}

impl ScooterController {
    pub fn new(aggregator: Arc<Aggregator>, config: Arc<EnvironmentConfig>) -> Self {
        Self { aggregator, config }
    }

    /// Convertir los parámetros del request en una consulta, con valores por defecto
    pub fn build_query(&self, params: &ScooterQueryParams) -> AggregationQuery {
        let fallback = self.config.default_origin;
        let origin = GeoPoint {
            lat: parse_f64_or(params.lat.as_deref(), fallback.lat),
            lng: parse_f64_or(params.lng.as_deref(), fallback.lng),
        };

        // El corredor solo se activa si ambas coordenadas del destino son válidas
        let destination = match (
            parse_finite(params.dest_lat.as_deref()),
            parse_finite(params.dest_lng.as_deref()),
        ) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        };

        AggregationQuery {
            origin,
            destination,
            radius_m: parse_f64_or(params.radius.as_deref(), self.config.default_radius_m),
            min_battery: parse_percent_or(params.min_battery.as_deref(), 0),
            corridor_width_m: parse_f64_or(
                params.corridor_width.as_deref(),
                self.config.default_corridor_m,
            ),
            providers: parse_csv_list(params.provider.as_deref()),
        }
    }

    pub async fn search(&self, params: &ScooterQueryParams) -> ScooterResponse {
        let query = self.build_query(params);
        self.aggregator.aggregate(&query).await.into()
    }

    /// Valor de Cache-Control para posiciones en vivo
    pub fn cache_control(&self) -> String {
        let max_age = self.config.cache_max_age_secs;
        format!("public, max-age={}, s-maxage={}", max_age, max_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::feed_client::HttpFeedClient;
    use crate::config::providers::ProviderRegistry;
    use std::time::Duration;

    fn controller() -> ScooterController {
        let source = HttpFeedClient::new(Duration::from_secs(1), "test").unwrap();
        let aggregator = Aggregator::new(Arc::new(source), Arc::new(ProviderRegistry::zurich()));
        ScooterController::new(Arc::new(aggregator), Arc::new(EnvironmentConfig::default()))
    }

    fn params(pairs: &[(&str, &str)]) -> ScooterQueryParams {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_defaults_when_absent() {
        let query = controller().build_query(&ScooterQueryParams::default());
        assert_eq!(query.origin, GeoPoint { lat: 47.376, lng: 8.528 });
        assert_eq!(query.radius_m, 500.0);
        assert_eq!(query.min_battery, 0);
        assert_eq!(query.corridor_width_m, 80.0);
        assert!(query.destination.is_none());
        assert!(query.providers.is_none());
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let query = controller().build_query(&params(&[
            ("lat", "north"),
            ("lng", "8.54"),
            ("radius", "far"),
            ("minBattery", "lots"),
        ]));
        assert_eq!(query.origin, GeoPoint { lat: 47.376, lng: 8.54 });
        assert_eq!(query.radius_m, 500.0);
        assert_eq!(query.min_battery, 0);
    }

    #[test]
    fn test_full_query() {
        let query = controller().build_query(&params(&[
            ("lat", "47.37"),
            ("lng", "8.53"),
            ("radius", "750"),
            ("minBattery", "40"),
            ("provider", "Bolt,voi"),
            ("destLat", "47.39"),
            ("destLng", "8.51"),
            ("corridorWidth", "120"),
        ]));
        assert_eq!(query.origin, GeoPoint { lat: 47.37, lng: 8.53 });
        assert_eq!(query.radius_m, 750.0);
        assert_eq!(query.min_battery, 40);
        assert_eq!(query.destination, Some(GeoPoint { lat: 47.39, lng: 8.51 }));
        assert_eq!(query.corridor_width_m, 120.0);
        assert_eq!(query.providers, Some(vec!["bolt".to_string(), "voi".to_string()]));
    }

    #[test]
    fn test_partial_destination_disables_corridor() {
        let query = controller().build_query(&params(&[("destLat", "47.39")]));
        assert!(query.destination.is_none());
    }

    #[test]
    fn test_cache_control_header() {
        assert_eq!(controller().cache_control(), "public, max-age=30, s-maxage=30");
    }
}
