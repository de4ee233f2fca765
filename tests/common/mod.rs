//! Shared test utilities and stubs.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tripmate::api::{AuthApi, AuthOutcome, Credentials, FailureKind, RegistrationInput};
use tripmate::auth::AuthController;
use tripmate::config::TimingConfig;
use tripmate::context::ScreenContext;
use tripmate::form::FormState;

/// A call the stub received.
#[derive(Debug, Clone, PartialEq)]
pub enum StubCall {
    Login(Credentials),
    Register(RegistrationInput),
}

/// Scripted [`AuthApi`] that records calls.
pub struct StubApi {
    outcome: Mutex<AuthOutcome>,
    calls: Mutex<Vec<StubCall>>,
    delay: Duration,
    gate: Option<Arc<Notify>>,
}

impl StubApi {
    pub fn new(outcome: AuthOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
            gate: None,
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new(AuthOutcome::Success {
            message: message.to_string(),
        })
    }

    pub fn server_failure(reason: &str) -> Self {
        Self::new(AuthOutcome::Failure {
            kind: FailureKind::Server,
            reason: reason.to_string(),
        })
    }

    /// Answer only after the network has been "slow" for `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Hold every answer until `gate` is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_outcome(&self, outcome: AuthOutcome) {
        *self.outcome.lock() = outcome;
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    async fn answer(&self, call: StubCall) -> AuthOutcome {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let outcome = self.outcome.lock().clone();
        outcome
    }
}

#[async_trait]
impl AuthApi for StubApi {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome {
        self.answer(StubCall::Login(credentials.clone())).await
    }

    async fn register(&self, input: &RegistrationInput) -> AuthOutcome {
        self.answer(StubCall::Register(input.clone())).await
    }
}

// -- Context helpers ----------------------------------------------------------

pub fn make_context(api: Arc<StubApi>) -> ScreenContext {
    ScreenContext::new(api, TimingConfig::default())
}

/// Wait until the form leaves `Submitting` with an outcome.
pub async fn settled(form: &AuthController) -> FormState {
    let mut rx = form.subscribe();
    let state = rx
        .wait_for(|state| state.is_settled())
        .await
        .expect("form state channel closed")
        .clone();
    state
}
