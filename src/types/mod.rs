pub mod course;
pub mod error;
pub mod response;
pub mod user;
