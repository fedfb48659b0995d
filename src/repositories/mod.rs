pub mod route_repository;
pub mod user_repository;
