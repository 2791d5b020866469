pub mod course;
pub mod mentoring;
pub mod message;
pub mod models;

pub use course::*;
pub use mentoring::*;
pub use message::*;
pub use models::*;
