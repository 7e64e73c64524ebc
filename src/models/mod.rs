//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: vehículos normalizados,
//! definiciones de proveedores y la consulta/resultado de agregación.

pub mod aggregation;
pub mod provider;
pub mod vehicle;

pub use aggregation::*;
pub use provider::*;
pub use vehicle::*;
