use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::models::booking::BookingRecord;
use crate::repositories::route_repository::{RouteStore, SeatCommit};
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::{not_found_error, validation_error, AppError};

/// Orquestador del protocolo de reserva multi-fecha.
///
/// Valida la petición sin tocar el almacén, resuelve los nombres de
/// pasajero y conductor, y delega la confirmación atómica al almacén
/// de rutas. Nunca confirma parcialmente ni reintenta.
pub struct BookingService {
    routes: Arc<dyn RouteStore>,
    users: Arc<dyn UserStore>,
}

impl BookingService {
    pub fn new(routes: Arc<dyn RouteStore>, users: Arc<dyn UserStore>) -> Self {
        Self { routes, users }
    }

    /// Reservar asientos en varias fechas de una ruta, todo o nada
    pub async fn book_dates(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        passenger_id: Uuid,
        dates: Vec<NaiveDate>,
        seats_per_date: u32,
    ) -> Result<BookingRecord, AppError> {
        if seats_per_date == 0 {
            return Err(validation_error(
                "seats_per_date",
                "must book at least one seat",
            ));
        }

        // las fechas repetidas cuentan una sola vez
        let dates: BTreeSet<NaiveDate> = dates.into_iter().collect();
        if dates.is_empty() {
            return Err(AppError::EmptyDateSelection);
        }

        let passenger = self
            .users
            .find_by_id(passenger_id)
            .await?
            .ok_or_else(|| not_found_error("Passenger", &passenger_id.to_string()))?;
        let driver = self
            .users
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;

        let commit = SeatCommit {
            dates: dates.clone(),
            seats_per_date,
            passenger_name: passenger.full_name,
        };
        let route = self
            .routes
            .commit_booking(driver_id, route_id, &commit)
            .await?;

        let record = BookingRecord::assemble(
            &route,
            driver.full_name,
            dates.into_iter().collect(),
            seats_per_date,
        );

        info!(
            "✅ Reserva {} confirmada: {} asiento(s) x {} fecha(s) en ruta {}",
            record.booking_id,
            seats_per_date,
            record.dates.len(),
            route_id
        );
        Ok(record)
    }

    /// Reserva de conveniencia para un solo día
    pub async fn book_single_day(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        passenger_id: Uuid,
        date: NaiveDate,
        seats: u32,
    ) -> Result<BookingRecord, AppError> {
        self.book_dates(driver_id, route_id, passenger_id, vec![date], seats)
            .await
    }
}
