//! DTOs de la API
//!
//! Requests y respuestas compartidas entre los controllers y las rutas.

pub mod client_dto;
pub mod rental_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Respuesta de creación: el id autogenerado del nuevo recurso
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Respuesta con mensaje informativo
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
