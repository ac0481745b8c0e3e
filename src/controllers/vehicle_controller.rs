use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        // Validar campos
        if request.make.trim().is_empty() {
            return Err(AppError::Validation("La marca es requerida".to_string()));
        }
        if request.model.trim().is_empty() {
            return Err(AppError::Validation("El modelo es requerido".to_string()));
        }
        if request.vehicle_type.trim().is_empty() {
            return Err(AppError::Validation("El tipo de vehículo es requerido".to_string()));
        }
        if request.year <= 0 {
            return Err(AppError::Validation("El año debe ser un entero positivo".to_string()));
        }
        if request.daily_rate < 0.0 {
            return Err(AppError::Validation("La tarifa diaria no puede ser negativa".to_string()));
        }

        let vehicle = self
            .repository
            .create(
                request.make,
                request.model,
                request.year,
                request.vehicle_type,
                request.daily_rate,
            )
            .await?;

        info!("🚙 Vehículo registrado: {} {} {} (id {})", vehicle.year, vehicle.make, vehicle.model, vehicle.id);

        Ok(vehicle)
    }

    pub async fn list_available(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.find_all_available().await
    }

    /// Búsqueda por marca o modelo; `make` tiene precedencia si llegan ambos
    pub async fn search(
        &self,
        make: Option<String>,
        model: Option<String>,
    ) -> Result<Vec<Vehicle>, AppError> {
        if let Some(make) = make.filter(|m| !m.trim().is_empty()) {
            self.repository.find_by_make(&make).await
        } else if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.repository.find_by_model(&model).await
        } else {
            Err(AppError::Validation(
                "Se requiere el parámetro 'make' o 'model'".to_string(),
            ))
        }
    }
}
