use std::collections::BTreeMap;

use crate::mvi::UiState;

/// Well-known field names.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LastMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl LastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: BTreeMap<String, String>,
    pub phase: SubmitPhase,
    pub last_message: LastMessage,
}

impl UiState for FormState {}

impl FormState {
    /// Value of a field, or `""` if it was never edited.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// True while a request is in flight; the submit control is disabled.
    pub fn submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, SubmitPhase::Succeeded | SubmitPhase::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let state = FormState::default();
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.last_message.kind, MessageKind::None);
        assert!(!state.submitting());
        assert_eq!(state.field(field::EMAIL), "");
    }

    #[test]
    fn submitting_tracks_phase() {
        let state = FormState {
            phase: SubmitPhase::Submitting,
            ..FormState::default()
        };
        assert!(state.submitting());
        assert!(!state.is_settled());
    }
}
