//! Screen lifecycle: mounts the controller for whatever screen the router
//! is on and tears the previous one down.

use tokio::sync::mpsc;
use tracing::debug;

use crate::auth::AuthController;
use crate::context::ScreenContext;
use crate::logout::LogoutFlow;
use crate::nav::{ScreenId, Transition};
use crate::splash::SplashController;

/// The mounted screen and the controller it owns.
pub enum Screen {
    Welcome(SplashController),
    Login(AuthController),
    Register(AuthController),
    Dashboard(LogoutFlow),
}

impl Screen {
    fn mount(id: ScreenId, ctx: &ScreenContext) -> Self {
        match id {
            ScreenId::Welcome => Screen::Welcome(SplashController::mount(ctx)),
            ScreenId::Login => Screen::Login(AuthController::login(ctx)),
            ScreenId::Register => Screen::Register(AuthController::register(ctx)),
            ScreenId::Dashboard => Screen::Dashboard(LogoutFlow::new(ctx)),
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Welcome(_) => ScreenId::Welcome,
            Screen::Login(_) => ScreenId::Login,
            Screen::Register(_) => ScreenId::Register,
            Screen::Dashboard(_) => ScreenId::Dashboard,
        }
    }
}

/// Holds the one mounted screen. Screens below the top of the back stack
/// are not kept alive; going back mounts a fresh one.
pub struct App {
    ctx: ScreenContext,
    screen: Screen,
    transitions: mpsc::UnboundedReceiver<Transition>,
}

impl App {
    /// Mount the screen the router is currently on (Welcome at launch).
    pub fn new(ctx: ScreenContext) -> Self {
        let transitions = ctx.router.subscribe();
        let screen = Screen::mount(ctx.router.current(), &ctx);
        Self {
            ctx,
            screen,
            transitions,
        }
    }

    pub fn context(&self) -> &ScreenContext {
        &self.ctx
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current(&self) -> ScreenId {
        self.screen.id()
    }

    /// The login or registration controller, if one of those is mounted.
    pub fn auth_form(&self) -> Option<&AuthController> {
        match &self.screen {
            Screen::Login(form) | Screen::Register(form) => Some(form),
            _ => None,
        }
    }

    pub fn dashboard(&mut self) -> Option<&mut LogoutFlow> {
        match &mut self.screen {
            Screen::Dashboard(flow) => Some(flow),
            _ => None,
        }
    }

    /// Leave the splash early. No-op on any other screen.
    pub fn skip_splash(&mut self) {
        if let Screen::Welcome(splash) = &mut self.screen {
            splash.teardown();
            self.ctx.router.replace(ScreenId::Login);
        }
    }

    pub fn back(&self) -> Option<Transition> {
        self.ctx.router.back()
    }

    /// Wait for the next transition and swap screens accordingly.
    pub async fn next_transition(&mut self) -> Option<Transition> {
        let transition = self.transitions.recv().await?;
        self.apply(transition);
        Some(transition)
    }

    /// Apply every transition already queued. Returns how many there were.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(transition) = self.transitions.try_recv() {
            self.apply(transition);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, transition: Transition) {
        debug!(from = %self.screen.id(), to = %transition.to, "remount");
        // Dropping the old controller cancels its timers and disposes its form.
        self.screen = Screen::mount(transition.to, &self.ctx);
    }
}
