//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales: si faltan o no se pueden interpretar se usa el valor por defecto.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::models::vehicle::GeoPoint;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    // Feeds de proveedores
    pub feed_timeout_secs: u64,
    pub feed_user_agent: String,
    pub cache_max_age_secs: u64,
    // Geocoding (Nominatim)
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    pub geocoder_country_codes: String,
    pub geocode_cache_max_age_secs: u64,
    // Valores por defecto de la consulta
    pub default_origin: GeoPoint,
    pub default_radius_m: f64,
    pub default_corridor_m: f64,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            feed_timeout_secs: 15,
            feed_user_agent: "scooters-web/1.0".to_string(),
            cache_max_age_secs: 30,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_user_agent: "scooters-web/1.0 (personal)".to_string(),
            geocoder_timeout_secs: 10,
            geocoder_country_codes: "ch".to_string(),
            geocode_cache_max_age_secs: 86_400,
            default_origin: GeoPoint { lat: 47.376, lng: 8.528 },
            default_radius_m: 500.0,
            default_corridor_m: 80.0,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Self {
        let d = Self::default();

        let lat = parse_var_or("DEFAULT_LAT", d.default_origin.lat);
        let lng = parse_var_or("DEFAULT_LNG", d.default_origin.lng);

        Self {
            environment: var_or("ENVIRONMENT", &d.environment),
            port: parse_var_or("PORT", d.port),
            host: var_or("HOST", &d.host),
            log_level: var_or("LOG_LEVEL", &d.log_level),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            feed_timeout_secs: parse_var_or("FEED_TIMEOUT_SECS", d.feed_timeout_secs),
            feed_user_agent: var_or("FEED_USER_AGENT", &d.feed_user_agent),
            cache_max_age_secs: parse_var_or("CACHE_MAX_AGE_SECS", d.cache_max_age_secs),
            geocoder_url: var_or("GEOCODER_URL", &d.geocoder_url),
            geocoder_user_agent: var_or("GEOCODER_USER_AGENT", &d.geocoder_user_agent),
            geocoder_timeout_secs: parse_var_or("GEOCODER_TIMEOUT_SECS", d.geocoder_timeout_secs),
            geocoder_country_codes: var_or("GEOCODER_COUNTRY_CODES", &d.geocoder_country_codes),
            geocode_cache_max_age_secs: parse_var_or(
                "GEOCODE_CACHE_MAX_AGE_SECS",
                d.geocode_cache_max_age_secs,
            ),
            default_origin: GeoPoint::new(lat, lng).unwrap_or(d.default_origin),
            default_radius_m: parse_var_or("DEFAULT_RADIUS_M", d.default_radius_m),
            default_corridor_m: parse_var_or("DEFAULT_CORRIDOR_M", d.default_corridor_m),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder_timeout_secs)
    }

    /// Nivel de log para tracing_subscriber; "info" si no se reconoce
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
