//! bootwire_cli - project diagnostics for bootwire applications.

pub mod cli;
pub mod doctor;
pub mod error;
pub mod output;

pub use doctor::{run_doctor, Issue, Report};
pub use error::{DoctorError, Result};
