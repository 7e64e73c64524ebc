//! Proveedores de micromovilidad
//!
//! Identificadores conocidos y la definición estática de cada feed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::vehicle::BoundingBox;

/// Proveedor conocido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Bolt,
    Bird,
    Dott,
    Lime,
    Voi,
}

impl ProviderId {
    pub const ALL: [ProviderId; 5] = [
        ProviderId::Bolt,
        ProviderId::Bird,
        ProviderId::Dott,
        ProviderId::Lime,
        ProviderId::Voi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Bolt => "bolt",
            ProviderId::Bird => "bird",
            ProviderId::Dott => "dott",
            ProviderId::Lime => "lime",
            ProviderId::Voi => "voi",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    /// Sin distinguir mayúsculas, ignorando espacios
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ProviderId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownProvider(needle.to_string()))
    }
}

/// Variante de esquema del feed: decide dónde vive el array de vehículos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedSchema {
    /// `data.bikes` (free_bike_status)
    #[serde(rename = "v2")]
    V2,
    /// `data.vehicles` (vehicle_status)
    #[serde(rename = "v3")]
    V3,
}

impl FeedSchema {
    /// Ruta JSON del array de vehículos
    pub fn vehicles_path(&self) -> [&'static str; 2] {
        match self {
            FeedSchema::V2 => ["data", "bikes"],
            FeedSchema::V3 => ["data", "vehicles"],
        }
    }
}

/// Datos para la leyenda del mapa
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDisplay {
    pub name: &'static str,
    pub color: &'static str,
    pub initial: &'static str,
}

/// Definición estática de un feed
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDefinition {
    pub url: String,
    pub schema: FeedSchema,
    /// Descarta registros fuera del área de servicio declarada
    pub bounding_box: Option<BoundingBox>,
    pub display: ProviderDisplay,
}
