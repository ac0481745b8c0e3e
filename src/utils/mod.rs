//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores
//! y su conversión a respuestas HTTP.

pub mod errors;
