pub mod organisation;
pub mod postgres_service;
pub mod user;
