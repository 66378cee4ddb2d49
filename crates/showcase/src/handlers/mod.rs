pub mod demos;
pub mod error;
pub mod login;
pub mod pages;

pub use error::AppError;
