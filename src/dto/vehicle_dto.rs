use serde::Deserialize;

// Request para registrar un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub daily_rate: f64,
}

// Parámetros de búsqueda (?make= o ?model=)
#[derive(Debug, Deserialize)]
pub struct VehicleSearchQuery {
    pub make: Option<String>,
    pub model: Option<String>,
}
