//! Controllers de la API
//!
//! Validan los requests, consultan los repositorios y arman las
//! respuestas. Las rutas los instancian por request con el pool compartido.

pub mod client_controller;
pub mod rental_controller;
pub mod vehicle_controller;
