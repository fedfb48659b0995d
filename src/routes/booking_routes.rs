use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::BookDatesRequest;
use crate::models::booking::{BookingRecord, RouteBookings};
use crate::services::booking_service::BookingService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(book_dates))
        .route("/", get(list_bookings))
}

async fn book_dates(
    State(state): State<AppState>,
    Path((driver_id, route_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<BookDatesRequest>,
) -> AppResult<Json<ApiResponse<BookingRecord>>> {
    let service = BookingService::new(state.routes.clone(), state.users.clone());
    let controller = BookingController::new(state.routes.clone(), service);
    let response = controller.book(driver_id, route_id, request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Path((driver_id, route_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<RouteBookings>> {
    let service = BookingService::new(state.routes.clone(), state.users.clone());
    let controller = BookingController::new(state.routes.clone(), service);
    let response = controller.list_for_route(driver_id, route_id).await?;
    Ok(Json(response))
}
