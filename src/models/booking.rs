//! Modelo de Booking
//!
//! Este módulo contiene el recibo inmutable de una reserva confirmada
//! y las entradas del libro de reservas por fecha.

use chrono::{NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::route::Route;

/// Resumen de la ruta incluido en el recibo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
}

/// Recibo inmutable de una reserva confirmada.
/// Se construye una única vez, después de descontar los asientos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: String,
    pub driver_name: String,
    pub route: RouteSummary,
    pub dates: Vec<NaiveDate>,
    pub seats_per_date: u32,
    pub total_price: Decimal,
}

impl BookingRecord {
    /// Ensamblar el recibo a partir de una reserva ya confirmada.
    ///
    /// El precio total es costo por asiento x asientos por fecha x
    /// cantidad de fechas. Las fechas se entregan ordenadas.
    pub fn assemble(
        route: &Route,
        driver_name: String,
        mut dates: Vec<NaiveDate>,
        seats_per_date: u32,
    ) -> Self {
        dates.sort_unstable();
        let total_price =
            route.cost_per_seat * Decimal::from(seats_per_date) * Decimal::from(dates.len() as u64);

        Self {
            booking_id: generate_booking_id(),
            driver_name,
            route: RouteSummary {
                origin: route.origin.clone(),
                destination: route.destination.clone(),
                departure_time: route.departure_time.clone(),
            },
            dates,
            seats_per_date,
            total_price,
        }
    }
}

/// Reserva individual registrada en el libro de una ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatBooking {
    pub passenger_name: String,
    pub seats_booked: u32,
}

/// Libro de reservas de una ruta: fecha -> reservas en orden de llegada
pub type RouteBookings = BTreeMap<NaiveDate, Vec<SeatBooking>>;

/// Referencia legible de reserva: "BK-<millis>-<sufijo>"
fn generate_booking_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();

    format!("BK-{}-{}", Utc::now().timestamp_millis(), suffix)
}
