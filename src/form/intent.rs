//! Intents for a login or registration form.

use crate::api::AuthOutcome;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// User typed into a field.
    EditField { name: String, value: String },

    /// Input passed local validation and the request is going out.
    SubmitStarted,

    /// Input failed local validation; no request was made.
    Rejected { message: String },

    /// The server (or transport) answered.
    OutcomeReceived(AuthOutcome),

    /// User acknowledged the last message.
    Dismiss,
}

impl Intent for FormIntent {}
