//! Modelo de Client
//!
//! Este módulo contiene el struct Client tal como se persiste.
//! Mapea exactamente a la tabla `clients` del esquema SQLite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cliente registrado - mapea exactamente a la tabla clients
///
/// `email` y `license_number` son únicos en toda la tabla.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
}
