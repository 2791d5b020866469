pub mod auth;
pub mod courses;
pub mod error;
pub mod http;
pub mod mentoring;
pub mod messages;
pub mod users;

pub use error::ApiError;
