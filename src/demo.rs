//! Datos de demostración
//!
//! Este módulo carga usuarios y rutas de ejemplo en los almacenes
//! en memoria. Las reservas iniciales pasan por el servicio real,
//! así el libro de reservas y la disponibilidad quedan consistentes.

use bcrypt::{hash, DEFAULT_COST};
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::models::route::Route;
use crate::models::user::{User, UserRole};
use crate::services::booking_service::BookingService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn seed(state: &AppState) -> Result<(), AppError> {
    let password_hash = hash("password123", DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

    let ramesh = state
        .users
        .insert(User::new(
            "Ramesh Kumar".to_string(),
            "ramesh.kumar@demo.com".to_string(),
            password_hash.clone(),
            UserRole::Driver,
        ))
        .await?;
    let suresh = state
        .users
        .insert(User::new(
            "Suresh Singh".to_string(),
            "suresh.singh@demo.com".to_string(),
            password_hash.clone(),
            UserRole::Driver,
        ))
        .await?;
    let asha = state
        .users
        .insert(User::new(
            "Asha Rao".to_string(),
            "asha.rao@demo.com".to_string(),
            password_hash,
            UserRole::Passenger,
        ))
        .await?;

    // Calendario de los próximos siete días
    let today = Utc::now().date_naive();
    let week: Vec<NaiveDate> = (0..7).map(|i| today + Duration::days(i)).collect();

    let peenya = state
        .routes
        .insert(Route::new(
            ramesh.id,
            "Peenya Industrial Area".to_string(),
            "Majestic Bus Stand".to_string(),
            "08:00 AM".to_string(),
            Decimal::from(50),
            12,
            week.clone(),
        ))
        .await?;
    let ecity = state
        .routes
        .insert(Route::new(
            suresh.id,
            "Electronic City".to_string(),
            "Marathahalli".to_string(),
            "09:00 AM".to_string(),
            Decimal::from(45),
            10,
            week.clone(),
        ))
        .await?;

    // Reservas iniciales para que la disponibilidad no arranque plana
    let bookings = BookingService::new(state.routes.clone(), state.users.clone());
    for (route, day, seats) in [
        (&peenya, 1, 2u32),
        (&peenya, 3, 4),
        (&peenya, 4, 7),
        (&ecity, 2, 1),
        (&ecity, 3, 10),
        (&ecity, 4, 6),
    ] {
        bookings
            .book_single_day(route.driver_id, route.id, asha.id, week[day], seats)
            .await?;
    }

    info!("💾 Datos de demo cargados: 3 usuarios, 2 rutas, 6 reservas");
    Ok(())
}
