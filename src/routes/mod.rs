pub mod client_routes;
pub mod rental_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Armar el router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/clients", client_routes::create_client_router())
        .nest("/rentals", rental_routes::create_rental_router())
        // CORS permite cualquier origen - solo para desarrollo
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
