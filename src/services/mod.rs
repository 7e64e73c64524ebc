//! Services module
//!
//! Este módulo contiene la lógica de negocio: el agregador de feeds de
//! micromovilidad y el passthrough de geocoding.

pub mod aggregator;
pub mod geocoding_service;

pub use aggregator::*;
pub use geocoding_service::*;
