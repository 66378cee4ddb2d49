use bootwire_core::ComponentError;
use thiserror::Error;

/// Errors produced while building components.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
