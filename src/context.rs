//! Collaborators injected into every screen controller.

use std::sync::Arc;

use crate::api::AuthApi;
use crate::config::TimingConfig;
use crate::nav::NavigationRouter;
use crate::session::Session;

/// Everything a screen needs from outside itself.
///
/// Cheap to clone; the router and session inside are shared handles.
#[derive(Clone)]
pub struct ScreenContext {
    pub api: Arc<dyn AuthApi>,
    pub router: NavigationRouter,
    pub session: Session,
    pub timing: TimingConfig,
}

impl ScreenContext {
    pub fn new(api: Arc<dyn AuthApi>, timing: TimingConfig) -> Self {
        Self {
            api,
            router: NavigationRouter::new(),
            session: Session::new(),
            timing,
        }
    }
}
