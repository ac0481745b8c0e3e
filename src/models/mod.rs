//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al esquema SQLite con las convenciones estándar.

pub mod client;
pub mod rental;
pub mod vehicle;
