use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::route_dto::{
    CreateRouteRequest, RouteResponse, SearchRouteResponse, SearchRoutesQuery, UpdateRouteRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:route_id", put(update_route))
        .route("/:route_id", delete(delete_route))
}

pub fn create_search_router() -> Router<AppState> {
    Router::new().route("/search", get(search_routes))
}

async fn create_route(
    State(state): State<AppState>,
    Path(driver_id): Path<Uuid>,
    Json(request): Json<CreateRouteRequest>,
) -> AppResult<Json<ApiResponse<RouteResponse>>> {
    let controller = RouteController::new(state.routes.clone(), state.users.clone());
    let response = controller.create(driver_id, request).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
    Path(driver_id): Path<Uuid>,
) -> AppResult<Json<Vec<RouteResponse>>> {
    let controller = RouteController::new(state.routes.clone(), state.users.clone());
    let response = controller.list_by_driver(driver_id).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path((driver_id, route_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateRouteRequest>,
) -> AppResult<Json<ApiResponse<RouteResponse>>> {
    let controller = RouteController::new(state.routes.clone(), state.users.clone());
    let response = controller.update(driver_id, route_id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path((driver_id, route_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = RouteController::new(state.routes.clone(), state.users.clone());
    controller.delete(driver_id, route_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ruta eliminada exitosamente"
    })))
}

async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<SearchRoutesQuery>,
) -> AppResult<Json<Vec<SearchRouteResponse>>> {
    let controller = RouteController::new(state.routes.clone(), state.users.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}
