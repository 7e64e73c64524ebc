//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y el registro estático
//! de proveedores.

pub mod environment;
pub mod providers;

pub use environment::*;
pub use providers::*;
