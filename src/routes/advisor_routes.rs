use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::advisor_controller::AdvisorController;
use crate::models::analysis::{RouteAnalysis, TripRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_advisor_router() -> Router<AppState> {
    Router::new()
        .route("/trip-requests", get(trip_requests))
        .route("/analysis", get(analysis))
}

async fn trip_requests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TripRequest>>> {
    let controller = AdvisorController::new(state.advisor.clone());
    let response = controller.trip_requests().await?;
    Ok(Json(response))
}

async fn analysis(State(state): State<AppState>) -> AppResult<Json<RouteAnalysis>> {
    let controller = AdvisorController::new(state.advisor.clone());
    let response = controller.analysis().await?;
    Ok(Json(response))
}
