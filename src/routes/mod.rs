pub mod advisor_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod route_routes;
