//! Localizador de patinetes y bicis compartidas
//!
//! Agrega los feeds en vivo de varios proveedores de micromovilidad,
//! normaliza sus esquemas y filtra/ordena los vehículos respecto a la
//! posición del usuario y, opcionalmente, a un corredor hasta un destino.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
