use crate::dto::client_dto::CreateClientRequest;
use crate::models::client::Client;
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<Client, AppError> {
        // Validar campos
        if request.first_name.trim().is_empty() {
            return Err(AppError::Validation("El nombre es requerido".to_string()));
        }
        if request.last_name.trim().is_empty() {
            return Err(AppError::Validation("El apellido es requerido".to_string()));
        }
        if !request.email.contains('@') {
            return Err(AppError::Validation("El email no es válido".to_string()));
        }
        if request.phone.trim().is_empty() {
            return Err(AppError::Validation("El teléfono es requerido".to_string()));
        }
        if request.license_number.trim().is_empty() {
            return Err(AppError::Validation("El número de licencia es requerido".to_string()));
        }

        // Verificar unicidad de email y de licencia
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }
        if self.repository.license_number_exists(&request.license_number).await? {
            return Err(AppError::Conflict(
                "El número de licencia ya está registrado".to_string(),
            ));
        }

        let client = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.email,
                request.phone,
                request.license_number,
            )
            .await?;

        info!("👤 Cliente registrado: {} {} (id {})", client.first_name, client.last_name, client.id);

        Ok(client)
    }

    pub async fn list_all(&self) -> Result<Vec<Client>, AppError> {
        self.repository.find_all().await
    }

    pub async fn search_by_name(&self, name: Option<String>) -> Result<Vec<Client>, AppError> {
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => self.repository.find_by_name(&name).await,
            None => Err(AppError::Validation("Se requiere el parámetro 'name'".to_string())),
        }
    }
}
