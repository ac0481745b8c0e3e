//! Conexión a SQLite
//!
//! Este módulo maneja la conexión a la base de datos SQLite y la creación
//! del esquema: las tablas `vehicles`, `clients` y `rentals`.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

use crate::config::database::DatabaseConfig;

/// Conexión a la base de datos con su esquema inicializado
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear la conexión a partir de una configuración explícita
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        Self::setup_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Crear la conexión con la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    /// Crear una base de datos en memoria con nombre único (tests y demos).
    ///
    /// Una sola conexión persistente: la base existe mientras la conexión
    /// siga abierta, así que el pool se fija en exactamente una.
    pub async fn new_in_memory() -> Result<Self> {
        let url = format!("file:memdb_{}?mode=memory&cache=shared", Uuid::new_v4());
        let options = SqliteConnectOptions::from_str(&url)?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Pool de conexiones compartido
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Crear las tablas e índices si no existen
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                make TEXT NOT NULL,
                model TEXT NOT NULL,
                year INTEGER NOT NULL,
                vehicle_type TEXT NOT NULL,
                daily_rate REAL NOT NULL CHECK (daily_rate >= 0),
                available BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone TEXT NOT NULL,
                license_number TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rentals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
                client_id INTEGER NOT NULL REFERENCES clients(id),
                start_date TEXT NOT NULL,
                end_date TEXT,
                total_cost REAL NOT NULL CHECK (total_cost >= 0),
                returned BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_rentals_vehicle_id ON rentals (vehicle_id)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_rentals_client_id ON rentals (client_id)")
            .execute(pool)
            .await?;

        // Respaldo en el esquema del invariante de disponibilidad:
        // a lo sumo un alquiler abierto por vehículo.
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_rentals_open_vehicle
            ON rentals (vehicle_id) WHERE returned = 0
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
