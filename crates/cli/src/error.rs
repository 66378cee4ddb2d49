//! Doctor error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the doctor.
pub type Result<T> = std::result::Result<T, DoctorError>;

/// Failures that stop a scan. Findings are reported as issues instead.
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
