//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable: cada consulta vuelve
//! a pedir los feeds.

use std::sync::Arc;

use crate::clients::feed_client::{FeedSource, HttpFeedClient};
use crate::config::environment::EnvironmentConfig;
use crate::config::providers::ProviderRegistry;
use crate::services::aggregator::Aggregator;
use crate::services::geocoding_service::GeocodingService;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub aggregator: Arc<Aggregator>,
    pub geocoder: Arc<GeocodingService>,
}

impl AppState {
    /// Estado de producción: feeds vía HTTP
    pub fn new(config: EnvironmentConfig, registry: ProviderRegistry) -> AppResult<Self> {
        let source = HttpFeedClient::new(config.feed_timeout(), &config.feed_user_agent)?;
        Self::with_source(config, registry, Arc::new(source))
    }

    /// Estado con un origen de feeds arbitrario
    pub fn with_source(
        config: EnvironmentConfig,
        registry: ProviderRegistry,
        source: Arc<dyn FeedSource>,
    ) -> AppResult<Self> {
        let geocoder = GeocodingService::new(
            config.geocoder_url.clone(),
            config.geocoder_country_codes.clone(),
            &config.geocoder_user_agent,
            config.geocoder_timeout(),
        )?;

        Ok(Self {
            aggregator: Arc::new(Aggregator::new(source, Arc::new(registry))),
            geocoder: Arc::new(geocoder),
            config: Arc::new(config),
        })
    }
}
