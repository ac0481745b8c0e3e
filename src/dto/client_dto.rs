use serde::Deserialize;

// Request para registrar un cliente
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
}

// Parámetros de búsqueda (?name=)
#[derive(Debug, Deserialize)]
pub struct ClientSearchQuery {
    pub name: Option<String>,
}
