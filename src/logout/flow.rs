use tracing::info;

use crate::context::ScreenContext;
use crate::mvi::Reducer;
use crate::nav::{NavigationRouter, ScreenId};
use crate::session::Session;

use super::intent::LogoutIntent;
use super::reducer::LogoutReducer;
use super::state::LogoutDialogState;

/// Dashboard-owned logout. Only a confirmed dialog touches the session.
pub struct LogoutFlow {
    dialog: LogoutDialogState,
    session: Session,
    router: NavigationRouter,
}

impl LogoutFlow {
    pub fn new(ctx: &ScreenContext) -> Self {
        Self {
            dialog: LogoutDialogState::default(),
            session: ctx.session.clone(),
            router: ctx.router.clone(),
        }
    }

    pub fn dialog(&self) -> LogoutDialogState {
        self.dialog
    }

    pub fn dispatch(&mut self, intent: LogoutIntent) {
        self.dialog = LogoutReducer::reduce(self.dialog, intent);
        if self.dialog == LogoutDialogState::Confirmed {
            self.dialog = LogoutDialogState::Hidden;
            info!("logout confirmed");
            self.session.clear();
            self.router.replace(ScreenId::Login);
        }
    }

    pub fn request(&mut self) {
        self.dispatch(LogoutIntent::Request);
    }

    pub fn cancel(&mut self) {
        self.dispatch(LogoutIntent::Cancel);
    }

    pub fn confirm(&mut self) {
        self.dispatch(LogoutIntent::Confirm);
    }
}
