//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de su tabla. El de alquileres es el
//! único que toca dos tablas a la vez y lo hace bajo transacción.

pub mod client_repository;
pub mod rental_repository;
pub mod vehicle_repository;
