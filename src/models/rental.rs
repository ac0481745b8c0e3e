//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental y sus variantes unidas para los
//! historiales. Mapea exactamente a la tabla `rentals` del esquema SQLite.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Alquiler - mapea exactamente a la tabla rentals
///
/// Mientras el alquiler está abierto, `end_date` es la fecha de devolución
/// prevista; al devolver, queda estampada la fecha real. `total_cost` se
/// fija al crear el alquiler y no se recalcula nunca.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i64,
    pub vehicle_id: i64,
    pub client_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub returned: bool,
    pub created_at: DateTime<Utc>,
}

/// Alquiler unido con el nombre del cliente (historial por vehículo)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RentalWithRenter {
    pub id: i64,
    pub vehicle_id: i64,
    pub client_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub returned: bool,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
}

/// Alquiler unido con el descriptor del vehículo (historial por cliente)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RentalWithVehicle {
    pub id: i64,
    pub vehicle_id: i64,
    pub client_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub returned: bool,
    pub created_at: DateTime<Utc>,
    pub make: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
}
