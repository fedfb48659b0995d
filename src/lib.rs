//! Backend de reservas de shuttle
//!
//! Expone el router de la API y los módulos de la aplicación para
//! que el binario y los tests de integración compartan el mismo wiring.

pub mod config;
pub mod controllers;
pub mod demo;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::routes::advisor_routes::create_advisor_router;
use crate::routes::auth_routes::create_auth_router;
use crate::routes::booking_routes::create_booking_router;
use crate::routes::route_routes::{create_route_router, create_search_router};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", create_auth_router())
        .nest("/api/routes", create_search_router())
        .nest("/api/driver/:driver_id/routes", create_route_router())
        .nest(
            "/api/driver/:driver_id/routes/:route_id/bookings",
            create_booking_router(),
        )
        .nest("/api/advisor", create_advisor_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "shuttle-booking",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
