use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::errors::{AppError, AppResult};

/// Resultado de búsqueda de dirección
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeHit {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

/// Entrada cruda de Nominatim (format=jsonv2): las coordenadas llegan como string
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimPlace {
    fn into_hit(self) -> Option<GeocodeHit> {
        let lat = self.lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lng = self.lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(GeocodeHit {
            lat,
            lng,
            display_name: self.display_name,
        })
    }
}

/// Passthrough a un servicio de búsqueda compatible con Nominatim
pub struct GeocodingService {
    base_url: String,
    country_codes: String,
    client: Client,
}

impl GeocodingService {
    pub const RESULT_LIMIT: usize = 5;

    pub fn new(
        base_url: impl Into<String>,
        country_codes: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            country_codes: country_codes.into(),
            client,
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&format=jsonv2&limit={}&countrycodes={}",
            self.base_url,
            urlencoding::encode(query),
            Self::RESULT_LIMIT,
            urlencoding::encode(&self.country_codes)
        )
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<GeocodeHit>> {
        let url = self.search_url(query);
        log::info!("🗺️ Geocoding: {}", query);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Geocoding failed with status {}", status);
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        let hits: Vec<GeocodeHit> = places.into_iter().filter_map(NominatimPlace::into_hit).collect();

        log::info!("✅ Geocoding: {} resultados para '{}'", hits.len(), query);
        Ok(hits)
    }
}
