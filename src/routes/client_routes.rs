use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::client_controller::ClientController;
use crate::controllers::rental_controller::RentalController;
use crate::dto::client_dto::{ClientSearchQuery, CreateClientRequest};
use crate::dto::CreatedResponse;
use crate::models::client::Client;
use crate::models::rental::RentalWithVehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/search", get(search_clients))
        .route("/:id/rentals", get(client_rental_history))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: client.id })))
}

async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Client>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let clients = controller.list_all().await?;
    Ok(Json(clients))
}

async fn search_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientSearchQuery>,
) -> Result<Json<Vec<Client>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let clients = controller.search_by_name(query.name).await?;
    Ok(Json(clients))
}

async fn client_rental_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RentalWithVehicle>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let history = controller.history_by_client(id).await?;
    Ok(Json(history))
}
