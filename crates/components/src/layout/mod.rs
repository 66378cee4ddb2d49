mod auth;
mod grid;

pub use auth::AuthLayout;
pub use grid::{container, container_fluid, row, Col};
