use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::route::{Route, RouteEdit, ScheduleEntry};

// Request para publicar una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(
        length(min = 2, max = 120),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub origin: String,

    #[validate(
        length(min = 2, max = 120),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub destination: String,

    #[validate(custom = "crate::utils::validation::validate_departure_time")]
    pub departure_time: String,

    #[validate(custom = "crate::utils::validation::validate_price")]
    pub cost_per_seat: Decimal,

    #[validate(range(min = 1, max = 120))]
    pub total_seats: u32,

    #[validate(length(min = 1))]
    pub dates: Vec<NaiveDate>,
}

// Request para editar una ruta (reemplazo completo de metadatos y fechas)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    #[validate(
        length(min = 2, max = 120),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub origin: String,

    #[validate(
        length(min = 2, max = 120),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub destination: String,

    #[validate(custom = "crate::utils::validation::validate_departure_time")]
    pub departure_time: String,

    #[validate(custom = "crate::utils::validation::validate_price")]
    pub cost_per_seat: Decimal,

    #[validate(range(min = 1, max = 120))]
    pub total_seats: u32,

    #[validate(length(min = 1))]
    pub dates: Vec<NaiveDate>,
}

impl UpdateRouteRequest {
    pub fn into_edit(self) -> RouteEdit {
        RouteEdit {
            origin: self.origin,
            destination: self.destination,
            departure_time: self.departure_time,
            cost_per_seat: self.cost_per_seat,
            total_seats: self.total_seats,
            dates: self.dates,
        }
    }
}

// Parámetros de búsqueda de rutas
#[derive(Debug, Deserialize)]
pub struct SearchRoutesQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

// Response de ruta con su calendario en orden de fecha
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub cost_per_seat: Decimal,
    pub total_seats: u32,
    pub schedule: Vec<ScheduleEntry>,
    pub created_at: DateTime<Utc>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            driver_id: route.driver_id,
            origin: route.origin,
            destination: route.destination,
            departure_time: route.departure_time,
            cost_per_seat: route.cost_per_seat,
            total_seats: route.total_seats,
            schedule: route.schedule.into_values().collect(),
            created_at: route.created_at,
        }
    }
}

// Resultado de búsqueda enriquecido con el nombre del conductor
#[derive(Debug, Serialize)]
pub struct SearchRouteResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub driver_name: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub cost_per_seat: Decimal,
    pub total_seats: u32,
    pub schedule: Vec<ScheduleEntry>,
}

impl SearchRouteResponse {
    pub fn from_route(route: Route, driver_name: String) -> Self {
        Self {
            id: route.id,
            driver_id: route.driver_id,
            driver_name,
            origin: route.origin,
            destination: route.destination,
            departure_time: route.departure_time,
            cost_per_seat: route.cost_per_seat,
            total_seats: route.total_seats,
            schedule: route.schedule.into_values().collect(),
        }
    }
}
