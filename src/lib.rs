//! Sistema de gestión de alquiler de vehículos
//!
//! Backend HTTP para registrar vehículos y clientes, buscarlos y
//! administrar alquileres sobre SQLite. El núcleo es el gestor de
//! transacciones de alquiler: alquilar y devolver mutan `rentals` y
//! `vehicles` como unidades atómicas, preservando el invariante de que
//! un vehículo está disponible si y solo si no tiene un alquiler abierto.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
