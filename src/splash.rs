//! Splash countdown that hands the app over to the login screen.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::context::ScreenContext;
use crate::nav::{NavigationRouter, ScreenId};
use crate::task::ScheduledTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashStatus {
    Pending,
    Fired,
    /// Torn down before the timer ran out.
    Cancelled,
}

/// Owns the single splash timer. Independent of the network.
pub struct SplashController {
    status: Arc<Mutex<SplashStatus>>,
    timer: Option<ScheduledTask>,
}

impl SplashController {
    /// Start the countdown from the configured splash duration.
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self::start(ctx.router.clone(), ctx.timing.splash())
    }

    pub fn start(router: NavigationRouter, duration: Duration) -> Self {
        let status = Arc::new(Mutex::new(SplashStatus::Pending));
        let shared = Arc::clone(&status);
        debug!(duration_ms = duration.as_millis() as u64, "splash timer started");
        let timer = ScheduledTask::after(duration, move || {
            let mut status = shared.lock();
            if *status != SplashStatus::Pending {
                return;
            }
            *status = SplashStatus::Fired;
            router.replace(ScreenId::Login);
        });
        Self {
            status,
            timer: Some(timer),
        }
    }

    pub fn status(&self) -> SplashStatus {
        *self.status.lock()
    }

    /// Cancel the timer if it has not fired. Idempotent.
    pub fn teardown(&mut self) {
        {
            let mut status = self.status.lock();
            if *status == SplashStatus::Pending {
                *status = SplashStatus::Cancelled;
                debug!("splash timer cancelled");
            }
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for SplashController {
    fn drop(&mut self) {
        self.teardown();
    }
}
