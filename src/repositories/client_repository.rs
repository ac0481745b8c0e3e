use crate::models::client::Client;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        license_number: String,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (first_name, last_name, email, phone, license_number, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .bind(license_number)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    /// Búsqueda por subcadena sobre nombre o apellido
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Client>, AppError> {
        let pattern = format!("%{}%", name);
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE first_name LIKE ? OR last_name LIKE ? ORDER BY id",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn license_number_exists(&self, license_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE license_number = ?)")
                .bind(license_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
