use crate::api::AuthOutcome;
use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, LastMessage, SubmitPhase};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::EditField { name, value } => {
                state.fields.insert(name, value);
                // Editing acknowledges a settled outcome.
                if state.is_settled() {
                    state.phase = SubmitPhase::Idle;
                    state.last_message = LastMessage::default();
                }
                state
            }

            FormIntent::SubmitStarted => {
                if !state.submitting() {
                    state.phase = SubmitPhase::Submitting;
                    state.last_message = LastMessage::default();
                }
                state
            }

            FormIntent::Rejected { message } => {
                if !state.submitting() {
                    state.phase = SubmitPhase::Failed;
                    state.last_message = LastMessage::error(message);
                }
                state
            }

            FormIntent::OutcomeReceived(outcome) => {
                // Only the request we are waiting for can settle the form.
                if !state.submitting() {
                    return state;
                }
                match outcome {
                    AuthOutcome::Success { message } => {
                        state.phase = SubmitPhase::Succeeded;
                        state.last_message = LastMessage::success(message);
                    }
                    AuthOutcome::Failure { reason, .. } => {
                        state.phase = SubmitPhase::Failed;
                        state.last_message = LastMessage::error(reason);
                    }
                }
                state
            }

            FormIntent::Dismiss => {
                if state.is_settled() {
                    state.phase = SubmitPhase::Idle;
                    state.last_message = LastMessage::default();
                }
                state
            }
        }
    }
}
