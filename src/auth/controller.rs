use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{AuthApi, AuthOutcome, Credentials, RegistrationInput};
use crate::context::ScreenContext;
use crate::form::{FormIntent, FormReducer, FormState};
use crate::mvi::Reducer;
use crate::nav::{NavigationRouter, ScreenId};
use crate::session::Session;
use crate::task::ScheduledTask;

use super::validate::{validate_login, validate_registration, ValidationError};

/// Called with a snapshot after every state change.
pub type StateListener = Arc<dyn Fn(&FormState) + Send + Sync>;

/// Which form a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Where a successful submit leads. Registration does not sign the
    /// user in, it sends them to log in.
    pub fn success_target(self) -> ScreenId {
        match self {
            FormKind::Login => ScreenId::Dashboard,
            FormKind::Register => ScreenId::Login,
        }
    }

    /// The screen behind the "Sign Up" / "Login" link.
    pub fn link_target(self) -> ScreenId {
        match self {
            FormKind::Login => ScreenId::Register,
            FormKind::Register => ScreenId::Login,
        }
    }

    fn prepare(self, form: &FormState) -> Result<AuthCall, ValidationError> {
        match self {
            FormKind::Login => validate_login(form).map(AuthCall::Login),
            FormKind::Register => validate_registration(form).map(AuthCall::Register),
        }
    }
}

/// What a call to [`AuthController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A request is now in flight.
    Started,
    /// Local validation failed; nothing was sent.
    Rejected(ValidationError),
    /// A request was already in flight, or the form is gone.
    Ignored,
}

enum AuthCall {
    Login(Credentials),
    Register(RegistrationInput),
}

impl AuthCall {
    async fn run(&self, api: &dyn AuthApi) -> AuthOutcome {
        match self {
            AuthCall::Login(credentials) => api.login(credentials).await,
            AuthCall::Register(input) => api.register(input).await,
        }
    }
}

/// Drives one login or registration form.
///
/// Owned by its screen. Dropping it (or calling [`teardown`]) cancels the
/// in-flight request and any pending navigation, and late outcomes are
/// discarded.
///
/// [`teardown`]: AuthController::teardown
pub struct AuthController {
    form: FormKind,
    core: Arc<Core>,
    api: Arc<dyn AuthApi>,
    request: Mutex<Option<ScheduledTask>>,
}

/// State shared with the spawned request task.
struct Core {
    state: watch::Sender<FormState>,
    disposed: AtomicBool,
    /// Success target waiting for the delay to run out. The lock also
    /// orders navigation against teardown.
    pending: Mutex<Option<ScreenId>>,
    listener: Mutex<Option<StateListener>>,
    router: NavigationRouter,
    session: Session,
    success_delay: Duration,
}

impl AuthController {
    pub fn new(form: FormKind, ctx: &ScreenContext) -> Self {
        Self {
            form,
            core: Arc::new(Core {
                state: watch::Sender::new(FormState::default()),
                disposed: AtomicBool::new(false),
                pending: Mutex::new(None),
                listener: Mutex::new(None),
                router: ctx.router.clone(),
                session: ctx.session.clone(),
                success_delay: ctx.timing.success_delay(),
            }),
            api: Arc::clone(&ctx.api),
            request: Mutex::new(None),
        }
    }

    pub fn login(ctx: &ScreenContext) -> Self {
        Self::new(FormKind::Login, ctx)
    }

    pub fn register(ctx: &ScreenContext) -> Self {
        Self::new(FormKind::Register, ctx)
    }

    pub fn on_state_change(&self, listener: StateListener) {
        *self.core.listener.lock() = Some(listener);
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.core.state.subscribe()
    }

    pub fn state(&self) -> FormState {
        self.core.state.borrow().clone()
    }

    /// The screen a successful submit is about to navigate to.
    pub fn pending_navigation(&self) -> Option<ScreenId> {
        *self.core.pending.lock()
    }

    pub fn is_disposed(&self) -> bool {
        self.core.disposed.load(Ordering::SeqCst)
    }

    pub fn edit(&self, name: impl Into<String>, value: impl Into<String>) {
        self.core.dispatch(FormIntent::EditField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Set several fields at once.
    pub fn fill<'a>(&self, fields: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in fields {
            self.edit(name, value);
        }
    }

    pub fn dismiss(&self) {
        self.core.dispatch(FormIntent::Dismiss);
    }

    /// Validate the current fields and, if they pass, send the request.
    pub fn submit(&self) -> Submission {
        let mut request = self.request.lock();
        if self.is_disposed() {
            return Submission::Ignored;
        }

        let snapshot = self.state();
        if snapshot.submitting() {
            debug!(form = ?self.form, "submit ignored: request in flight");
            return Submission::Ignored;
        }

        let call = match self.form.prepare(&snapshot) {
            Ok(call) => call,
            Err(err) => {
                debug!(form = ?self.form, error = %err, "submit rejected");
                self.core.dispatch(FormIntent::Rejected {
                    message: err.to_string(),
                });
                return Submission::Rejected(err);
            }
        };

        // A new request supersedes navigation left over from an earlier success.
        self.core.pending.lock().take();
        self.core.dispatch(FormIntent::SubmitStarted);
        info!(form = ?self.form, "submitting");

        let core = Arc::clone(&self.core);
        let api = Arc::clone(&self.api);
        let form = self.form;
        *request = Some(ScheduledTask::spawn(async move {
            let outcome = call.run(api.as_ref()).await;
            core.settle(form, outcome).await;
        }));
        Submission::Started
    }

    /// Follow the link to the other auth form. Returns to it when it is
    /// already directly below on the back stack.
    pub fn follow_link(&self) {
        if !self.is_disposed() {
            self.core.router.push_or_pop_to(self.form.link_target());
        }
    }

    /// Stop all work for this form. Idempotent.
    pub fn teardown(&self) {
        {
            let mut pending = self.core.pending.lock();
            self.core.state.send_if_modified(|_| {
                self.core.disposed.store(true, Ordering::SeqCst);
                false
            });
            if pending.take().is_some() {
                debug!(form = ?self.form, "pending navigation cancelled");
            }
        }
        if let Some(task) = self.request.lock().take() {
            task.cancel();
        }
    }
}

impl Drop for AuthController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Core {
    /// Apply an intent unless the form is gone. Returns whether it was applied.
    fn dispatch(&self, intent: FormIntent) -> bool {
        let mut applied = false;
        let changed = self.state.send_if_modified(|state| {
            if self.disposed.load(Ordering::SeqCst) {
                return false;
            }
            applied = true;
            let next = FormReducer::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });

        if changed {
            let listener = self.listener.lock().clone();
            if let Some(listener) = listener {
                let snapshot = self.state.borrow().clone();
                listener(&snapshot);
            }
        }
        applied
    }

    async fn settle(&self, form: FormKind, outcome: AuthOutcome) {
        let success = outcome.is_success();
        match &outcome {
            AuthOutcome::Success { message } => info!(?form, %message, "auth succeeded"),
            AuthOutcome::Failure { kind, reason } => {
                warn!(?form, ?kind, %reason, "auth failed")
            }
        }

        if !self.dispatch(FormIntent::OutcomeReceived(outcome)) {
            debug!(?form, "outcome dropped: form torn down");
            return;
        }
        if !success {
            return;
        }

        let target = form.success_target();
        {
            let mut pending = self.pending.lock();
            if self.disposed.load(Ordering::SeqCst) {
                return;
            }
            *pending = Some(target);
        }
        debug!(?form, %target, delay_ms = self.success_delay.as_millis() as u64, "navigation scheduled");

        tokio::time::sleep(self.success_delay).await;

        let mut pending = self.pending.lock();
        if self.disposed.load(Ordering::SeqCst) || pending.take().is_none() {
            return;
        }
        // Signed in only once the dashboard is actually reached.
        if form == FormKind::Login {
            self.session.establish();
        }
        self.router.replace(target);
    }
}
