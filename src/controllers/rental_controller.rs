use crate::dto::rental_dto::CreateRentalRequest;
use crate::models::rental::{Rental, RentalWithRenter, RentalWithVehicle};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;

pub struct RentalController {
    rentals: RentalRepository,
    vehicles: VehicleRepository,
    clients: ClientRepository,
}

impl RentalController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rentals: RentalRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateRentalRequest) -> Result<Rental, AppError> {
        if request.days < 1 {
            return Err(AppError::Validation(
                "El número de días debe ser un entero positivo".to_string(),
            ));
        }

        // Vehículo y cliente tienen que existir antes de intentar la
        // transacción; la disponibilidad se re-verifica adentro.
        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        self.clients
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let rental = self
            .rentals
            .rent(request.vehicle_id, request.client_id, request.days)
            .await?;

        info!(
            "🔑 Alquiler {} creado: {} {} por {} días, costo total {}",
            rental.id, vehicle.make, vehicle.model, request.days, rental.total_cost
        );

        Ok(rental)
    }

    pub async fn return_rental(&self, rental_id: i64) -> Result<Rental, AppError> {
        let rental = self.rentals.return_rental(rental_id).await?;

        info!(
            "↩️ Alquiler {} devuelto: vehículo {} disponible nuevamente",
            rental.id, rental.vehicle_id
        );

        Ok(rental)
    }

    pub async fn history_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<RentalWithRenter>, AppError> {
        self.rentals.find_by_vehicle(vehicle_id).await
    }

    pub async fn history_by_client(&self, client_id: i64) -> Result<Vec<RentalWithVehicle>, AppError> {
        self.rentals.find_by_client(client_id).await
    }
}
