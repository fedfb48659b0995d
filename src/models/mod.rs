//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: usuarios, rutas con su
//! inventario de asientos, reservas y análisis de demanda.

pub mod analysis;
pub mod booking;
pub mod route;
pub mod user;
