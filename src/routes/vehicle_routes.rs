use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::rental_controller::RentalController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleSearchQuery};
use crate::dto::CreatedResponse;
use crate::models::rental::RentalWithRenter;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/search", get(search_vehicles))
        .route("/:id/rentals", get(vehicle_rental_history))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: vehicle.id })))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list_available().await?;
    Ok(Json(vehicles))
}

async fn search_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleSearchQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.search(query.make, query.model).await?;
    Ok(Json(vehicles))
}

async fn vehicle_rental_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RentalWithRenter>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let history = controller.history_by_vehicle(id).await?;
    Ok(Json(history))
}
