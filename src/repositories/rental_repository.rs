//! Gestor de transacciones de alquiler
//!
//! Núcleo del sistema: alquilar y devolver mutan `rentals` y `vehicles`
//! dentro de una transacción explícita, de modo que o ambas tablas quedan
//! actualizadas o ninguna. El invariante que se protege: un vehículo está
//! disponible si y solo si no tiene un alquiler abierto.

use crate::models::rental::{Rental, RentalWithRenter, RentalWithVehicle};
use crate::utils::errors::AppError;
use chrono::{Duration, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

pub struct RentalRepository {
    pool: SqlitePool,
}

impl RentalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Leer el flag de disponibilidad de un vehículo
    pub async fn is_vehicle_available(&self, vehicle_id: i64) -> Result<bool, AppError> {
        let row: Option<(bool,)> = sqlx::query_as("SELECT available FROM vehicles WHERE id = ?")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((available,)) => Ok(available),
            None => Err(AppError::NotFound("Vehículo no encontrado".to_string())),
        }
    }

    /// Alquilar un vehículo: inserta el alquiler y marca el vehículo como
    /// no disponible, como unidad atómica.
    pub async fn rent(
        &self,
        vehicle_id: i64,
        client_id: i64,
        days: i64,
    ) -> Result<Rental, AppError> {
        if days < 1 {
            return Err(AppError::Validation(
                "El número de días debe ser un entero positivo".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        match Self::rent_in_tx(&mut tx, vehicle_id, client_id, days).await {
            Ok(rental) => {
                tx.commit().await?;
                Ok(rental)
            }
            // Si el rollback también falla, ese error reemplaza al original:
            // señala un estado del almacenamiento peor que el fallo de negocio.
            Err(err) => match tx.rollback().await {
                Ok(()) => Err(err),
                Err(rollback_err) => Err(AppError::Database(rollback_err)),
            },
        }
    }

    async fn rent_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        vehicle_id: i64,
        client_id: i64,
        days: i64,
    ) -> Result<Rental, AppError> {
        // El flip condicional es a la vez la re-verificación de
        // disponibilidad y la primera escritura de la transacción: dos
        // alquileres concurrentes del mismo vehículo se serializan acá
        // y solo uno encuentra available = 1.
        let flipped =
            sqlx::query("UPDATE vehicles SET available = 0 WHERE id = ? AND available = 1")
                .bind(vehicle_id)
                .execute(&mut **tx)
                .await?;

        if flipped.rows_affected() == 0 {
            // Distinguir vehículo inexistente de vehículo ocupado
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = ?)")
                    .bind(vehicle_id)
                    .fetch_one(&mut **tx)
                    .await?;

            if !exists.0 {
                return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
            }
            return Err(AppError::Conflict("Vehículo no disponible".to_string()));
        }

        let client_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?)")
                .bind(client_id)
                .fetch_one(&mut **tx)
                .await?;

        if !client_exists.0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        let (daily_rate,): (f64,) = sqlx::query_as("SELECT daily_rate FROM vehicles WHERE id = ?")
            .bind(vehicle_id)
            .fetch_one(&mut **tx)
            .await?;

        // El costo total queda fijado acá y no se recalcula nunca, ni
        // siquiera si la devolución llega antes o después de end_date.
        // El calendario tiene rango finito: un plazo que lo desborda es
        // entrada inválida, no un fallo del servidor.
        let start_date = Utc::now().date_naive();
        let end_date = Duration::try_days(days)
            .and_then(|span| start_date.checked_add_signed(span))
            .ok_or_else(|| {
                AppError::Validation("El número de días excede el rango de fechas".to_string())
            })?;
        let total_cost = daily_rate * days as f64;

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (vehicle_id, client_id, start_date, end_date, total_cost, returned, created_at)
            VALUES (?, ?, ?, ?, ?, 0, ?)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(client_id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_cost)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(rental)
    }

    /// Devolver un vehículo: cierra el alquiler y restaura la
    /// disponibilidad del vehículo, como unidad atómica.
    pub async fn return_rental(&self, rental_id: i64) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        match Self::return_in_tx(&mut tx, rental_id).await {
            Ok(rental) => {
                tx.commit().await?;
                Ok(rental)
            }
            Err(err) => match tx.rollback().await {
                Ok(()) => Err(err),
                Err(rollback_err) => Err(AppError::Database(rollback_err)),
            },
        }
    }

    async fn return_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        rental_id: i64,
    ) -> Result<Rental, AppError> {
        // Cierre condicional: un alquiler pasa de abierto a devuelto
        // exactamente una vez. end_date queda estampada con la fecha
        // real de devolución.
        let today = Utc::now().date_naive();
        let closed = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals SET returned = 1, end_date = ?
            WHERE id = ? AND returned = 0
            RETURNING *
            "#,
        )
        .bind(today)
        .bind(rental_id)
        .fetch_optional(&mut **tx)
        .await?;

        let rental = match closed {
            Some(rental) => rental,
            None => {
                // Distinguir alquiler inexistente de doble devolución
                let exists: (bool,) =
                    sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE id = ?)")
                        .bind(rental_id)
                        .fetch_one(&mut **tx)
                        .await?;

                if !exists.0 {
                    return Err(AppError::NotFound("Alquiler no encontrado".to_string()));
                }
                return Err(AppError::Conflict("El alquiler ya fue devuelto".to_string()));
            }
        };

        sqlx::query("UPDATE vehicles SET available = 1 WHERE id = ?")
            .bind(rental.vehicle_id)
            .execute(&mut **tx)
            .await?;

        Ok(rental)
    }

    /// Historial de un vehículo, unido con el nombre del cliente.
    /// Incluye alquileres abiertos y devueltos; sin filtro de existencia.
    pub async fn find_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<RentalWithRenter>, AppError> {
        let rentals = sqlx::query_as::<_, RentalWithRenter>(
            r#"
            SELECT r.*, c.first_name, c.last_name
            FROM rentals r
            JOIN clients c ON r.client_id = c.id
            WHERE r.vehicle_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Historial de un cliente, unido con el descriptor del vehículo
    pub async fn find_by_client(&self, client_id: i64) -> Result<Vec<RentalWithVehicle>, AppError> {
        let rentals = sqlx::query_as::<_, RentalWithVehicle>(
            r#"
            SELECT r.*, v.make, v.model, v.vehicle_type
            FROM rentals r
            JOIN vehicles v ON r.vehicle_id = v.id
            WHERE r.client_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }
}
