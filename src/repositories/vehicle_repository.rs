use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        make: String,
        model: String,
        year: i32,
        vehicle_type: String,
        daily_rate: f64,
    ) -> Result<Vehicle, AppError> {
        // Todo vehículo nuevo entra disponible
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (make, model, year, vehicle_type, daily_rate, available, created_at)
            VALUES (?, ?, ?, ?, ?, 1, ?)
            RETURNING *
            "#,
        )
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(vehicle_type)
        .bind(daily_rate)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Solo los vehículos disponibles; los alquilados no se listan
    pub async fn find_all_available(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE available = 1 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_make(&self, make: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE make LIKE ? AND available = 1 ORDER BY id",
        )
        .bind(format!("%{}%", make))
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_model(&self, model: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE model LIKE ? AND available = 1 ORDER BY id",
        )
        .bind(format!("%{}%", model))
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Ajuste directo del flag de disponibilidad (mantenimiento, baja).
    /// Alquilar y devolver NO pasan por acá: el gestor de alquileres hace
    /// este mismo UPDATE dentro de sus transacciones.
    pub async fn update_availability(&self, id: i64, available: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE vehicles SET available = ? WHERE id = ?")
            .bind(available)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
