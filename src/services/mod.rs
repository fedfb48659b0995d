//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios encapsulan operaciones que involucran varios
//! modelos o almacenes.

pub mod advisor_service;
pub mod booking_service;
