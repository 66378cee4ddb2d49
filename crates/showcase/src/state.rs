//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use bootwire_web::{SessionStore, Shell};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Document shell with the Bootstrap and PWA head nodes.
    pub shell: Arc<Shell>,
    pub sessions: SessionStore,
    pub started: Instant,
}

impl AppState {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell: Arc::new(shell),
            sessions: SessionStore::default(),
            started: Instant::now(),
        }
    }
}
