use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::BookDatesRequest;
use crate::models::booking::{BookingRecord, RouteBookings};
use crate::repositories::route_repository::RouteStore;
use crate::services::booking_service::BookingService;
use crate::utils::errors::AppError;

pub struct BookingController {
    routes: Arc<dyn RouteStore>,
    service: BookingService,
}

impl BookingController {
    pub fn new(routes: Arc<dyn RouteStore>, service: BookingService) -> Self {
        Self { routes, service }
    }

    pub async fn book(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        request: BookDatesRequest,
    ) -> Result<ApiResponse<BookingRecord>, AppError> {
        // Validar campos
        request.validate()?;

        let record = self
            .service
            .book_dates(
                driver_id,
                route_id,
                request.passenger_id,
                request.dates,
                request.seats_per_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            record,
            "Reserva confirmada exitosamente".to_string(),
        ))
    }

    /// El libro de reservas de una ruta, sólo visible para su conductor
    pub async fn list_for_route(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
    ) -> Result<RouteBookings, AppError> {
        self.routes.bookings_for_route(driver_id, route_id).await
    }
}
