//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs de la API.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    // Horario de salida en formato de 12 horas, p. ej. "08:00 AM"
    static ref DEPARTURE_TIME_REGEX: Regex =
        Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de horario de salida ("hh:mm AM/PM")
pub fn validate_departure_time(value: &str) -> Result<(), ValidationError> {
    if !DEPARTURE_TIME_REGEX.is_match(value) {
        let mut error = ValidationError::new("departure_time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"hh:mm AM/PM".to_string());
        return Err(error);
    }
    Ok(())
}

// Tope de precio por asiento. Mantiene el total de una reserva
// (precio x asientos x fechas) dentro del rango de Decimal.
const MAX_COST_PER_SEAT: u32 = 1_000_000;

/// Validar que un precio no sea negativo ni exceda el tope
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*value)?;
    let max = Decimal::from(MAX_COST_PER_SEAT);
    if *value > max {
        let mut error = ValidationError::new("price_range");
        error.add_param("value".into(), value);
        error.add_param("max".into(), &max);
        return Err(error);
    }
    Ok(())
}
