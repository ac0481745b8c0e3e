use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use crate::controllers::rental_controller::RentalController;
use crate::dto::rental_dto::CreateRentalRequest;
use crate::dto::{CreatedResponse, MessageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/:id/return", post(return_rental))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: rental.id })))
}

async fn return_rental(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.return_rental(id).await?;
    Ok(Json(MessageResponse {
        message: "Vehículo devuelto exitosamente".to_string(),
    }))
}
