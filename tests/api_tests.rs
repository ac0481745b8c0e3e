//! Tests de integración de la API HTTP
//!
//! Levantan el router completo sobre una base SQLite en memoria y lo
//! ejercitan request por request con `tower::ServiceExt`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::routes::create_router;
use vehicle_rental::state::AppState;

// Función helper para crear la app de test
async fn create_test_app() -> Router {
    let db = DatabaseConnection::new_in_memory()
        .await
        .expect("base de prueba en memoria");
    let state = AppState::new(db.pool().clone(), EnvironmentConfig::default());
    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("respuesta");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("cuerpo de la respuesta");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON de la respuesta")
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(Method::GET)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(Method::POST)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(Method::POST)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

async fn seed_vehicle(app: &Router) -> i64 {
    let (status, body) = post_json(
        app,
        "/vehicles",
        json!({
            "make": "Toyota",
            "model": "Corolla",
            "year": 2022,
            "type": "sedan",
            "dailyRate": 40.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("id del vehículo")
}

async fn seed_client(app: &Router) -> i64 {
    let (status, body) = post_json(
        app,
        "/clients",
        json!({
            "firstName": "Ana",
            "lastName": "García",
            "email": "ana@example.com",
            "phone": "555-0100",
            "licenseNumber": "LIC-001"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("id del cliente")
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "vehicle-rental");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_full_rental_flow() {
    let app = create_test_app().await;

    let vehicle_id = seed_vehicle(&app).await;
    let client_id = seed_client(&app).await;
    assert_eq!(vehicle_id, 1);
    assert_eq!(client_id, 1);

    // El vehículo recién registrado aparece disponible
    let (status, body) = get(&app, "/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().expect("lista de vehículos");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["make"], "Toyota");
    assert_eq!(vehicles[0]["type"], "sedan");
    assert_eq!(vehicles[0]["dailyRate"], 40.0);
    assert_eq!(vehicles[0]["available"], true);

    // Alquilar por 5 días
    let (status, body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": client_id, "days": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    // El historial del cliente trae el alquiler con el descriptor del vehículo
    let today = Utc::now().date_naive();
    let (status, body) = get(&app, "/clients/1/rentals").await;
    assert_eq!(status, StatusCode::OK);
    let rentals = body.as_array().expect("historial del cliente");
    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0]["totalCost"], 200.0);
    assert_eq!(rentals[0]["returned"], false);
    assert_eq!(rentals[0]["startDate"], today.to_string().as_str());
    assert_eq!(rentals[0]["endDate"], (today + Duration::days(5)).to_string().as_str());
    assert_eq!(rentals[0]["make"], "Toyota");
    assert_eq!(rentals[0]["model"], "Corolla");
    assert_eq!(rentals[0]["type"], "sedan");

    // Mientras está alquilado no se lista ni se puede volver a alquilar
    let (status, body) = get(&app, "/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("lista de vehículos").is_empty());

    let (status, body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": client_id, "days": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    // Devolver
    let (status, body) = post_empty(&app, "/rentals/1/return").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehículo devuelto exitosamente");

    // El historial del vehículo trae el alquiler cerrado con el nombre del cliente
    let (status, body) = get(&app, "/vehicles/1/rentals").await;
    assert_eq!(status, StatusCode::OK);
    let history = body.as_array().expect("historial del vehículo");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["returned"], true);
    assert_eq!(history[0]["endDate"], today.to_string().as_str());
    assert_eq!(history[0]["firstName"], "Ana");
    assert_eq!(history[0]["lastName"], "García");

    // Y el vehículo vuelve a estar disponible
    let (status, body) = get(&app, "/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().expect("lista de vehículos");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["available"], true);
}

#[tokio::test]
async fn test_create_vehicle_validation() {
    let app = create_test_app().await;

    let (status, body) = post_json(
        &app,
        "/vehicles",
        json!({
            "make": "",
            "model": "Corolla",
            "year": 2022,
            "type": "sedan",
            "dailyRate": 40.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, _body) = post_json(
        &app,
        "/vehicles",
        json!({
            "make": "Toyota",
            "model": "Corolla",
            "year": 2022,
            "type": "sedan",
            "dailyRate": -1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vehicle_search() {
    let app = create_test_app().await;

    seed_vehicle(&app).await;
    let (status, _body) = post_json(
        &app,
        "/vehicles",
        json!({
            "make": "Honda",
            "model": "Civic",
            "year": 2021,
            "type": "sedan",
            "dailyRate": 35.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/vehicles/search?make=Toy").await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().expect("resultado de búsqueda");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["make"], "Toyota");

    let (status, body) = get(&app, "/vehicles/search?model=Civ").await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().expect("resultado de búsqueda");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["model"], "Civic");

    // Sin parámetros la búsqueda es inválida
    let (status, body) = get(&app, "/vehicles/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    // Un vehículo alquilado desaparece de la búsqueda
    let client_id = seed_client(&app).await;
    let (status, _body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": 1, "clientId": client_id, "days": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/vehicles/search?make=Toy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("resultado de búsqueda").is_empty());
}

#[tokio::test]
async fn test_client_validation_and_conflicts() {
    let app = create_test_app().await;

    seed_client(&app).await;

    // Email duplicado
    let (status, body) = post_json(
        &app,
        "/clients",
        json!({
            "firstName": "Otra",
            "lastName": "Persona",
            "email": "ana@example.com",
            "phone": "555-0200",
            "licenseNumber": "LIC-099"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    // Licencia duplicada
    let (status, _body) = post_json(
        &app,
        "/clients",
        json!({
            "firstName": "Otra",
            "lastName": "Persona",
            "email": "otra@example.com",
            "phone": "555-0200",
            "licenseNumber": "LIC-001"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Email sin formato válido
    let (status, _body) = post_json(
        &app,
        "/clients",
        json!({
            "firstName": "Otra",
            "lastName": "Persona",
            "email": "sin-arroba",
            "phone": "555-0200",
            "licenseNumber": "LIC-100"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Los rechazos no dejaron registros
    let (status, body) = get(&app, "/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("lista de clientes").len(), 1);
}

#[tokio::test]
async fn test_client_search() {
    let app = create_test_app().await;

    seed_client(&app).await;
    let (status, _body) = post_json(
        &app,
        "/clients",
        json!({
            "firstName": "Luis",
            "lastName": "Pérez",
            "email": "luis@example.com",
            "phone": "555-0300",
            "licenseNumber": "LIC-002"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/clients/search?name=An").await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().expect("resultado de búsqueda");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["firstName"], "Ana");

    let (status, body) = get(&app, "/clients/search?name=P%C3%A9rez").await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().expect("resultado de búsqueda");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["lastName"], "Pérez");

    let (status, body) = get(&app, "/clients/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
}

#[tokio::test]
async fn test_rental_error_mapping() {
    let app = create_test_app().await;

    let vehicle_id = seed_vehicle(&app).await;
    let client_id = seed_client(&app).await;

    // Vehículo inexistente
    let (status, body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": 999, "clientId": client_id, "days": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    // Cliente inexistente
    let (status, _body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": 999, "days": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Días inválidos
    let (status, _body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": client_id, "days": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Un plazo que desborda el calendario responde con el sobre de error,
    // no con una conexión cortada, y deja el vehículo alquilable (el
    // CREATED de más abajo depende de eso)
    let (status, body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": client_id, "days": 100_000_000_000i64 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    // Devolución de un alquiler inexistente
    let (status, _body) = post_empty(&app, "/rentals/999/return").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Doble devolución
    let (status, body) = post_json(
        &app,
        "/rentals",
        json!({ "vehicleId": vehicle_id, "clientId": client_id, "days": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let rental_id = body["id"].as_i64().expect("id del alquiler");

    let (status, _body) = post_empty(&app, &format!("/rentals/{}/return", rental_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_empty(&app, &format!("/rentals/{}/return", rental_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn test_history_of_unknown_ids_is_empty() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/vehicles/999/rentals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("historial").is_empty());

    let (status, body) = get(&app, "/clients/999/rentals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("historial").is_empty());
}
