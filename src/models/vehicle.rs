//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se persiste.
//! Mapea exactamente a la tabla `vehicles` del esquema SQLite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo de la flota - mapea exactamente a la tabla vehicles
///
/// `available` materializa el invariante de disponibilidad: es `true`
/// si y solo si el vehículo no tiene un alquiler abierto.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub daily_rate: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}
