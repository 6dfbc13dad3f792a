pub mod error;
pub mod organisation;
pub mod response;
pub mod token;
pub mod user;
