//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, geometría
//! esférica y validación de parámetros.

pub mod errors;
pub mod geometry;
pub mod validation;

pub use errors::*;
