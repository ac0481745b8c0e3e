use serde::Deserialize;

// Request para crear un alquiler
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub vehicle_id: i64,
    pub client_id: i64,
    pub days: i64,
}
