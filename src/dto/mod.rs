pub mod auth_dto;
pub mod booking_dto;
pub mod route_dto;
