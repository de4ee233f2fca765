//! Process-wide session context.
//!
//! Passed explicitly to the controllers that write it (login success,
//! logout confirm). Nothing is persisted across restarts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

/// Cheap-clone handle; all clones observe the same flag.
#[derive(Clone, Default)]
pub struct Session {
    authenticated: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub fn establish(&self) {
        if !self.authenticated.swap(true, Ordering::SeqCst) {
            info!("session established");
        }
    }

    pub fn clear(&self) {
        if self.authenticated.swap(false, Ordering::SeqCst) {
            info!("session cleared");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
