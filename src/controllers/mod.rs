pub mod advisor_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod route_controller;
