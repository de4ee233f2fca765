use crate::mvi::Reducer;

use super::intent::LogoutIntent;
use super::state::LogoutDialogState;

pub struct LogoutReducer;

impl Reducer for LogoutReducer {
    type State = LogoutDialogState;
    type Intent = LogoutIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (LogoutDialogState::Hidden, LogoutIntent::Request) => LogoutDialogState::Confirming,
            (LogoutDialogState::Confirming, LogoutIntent::Cancel) => LogoutDialogState::Hidden,
            (LogoutDialogState::Confirming, LogoutIntent::Confirm) => LogoutDialogState::Confirmed,
            // Confirm without the dialog up does nothing.
            (other, _) => other,
        }
    }
}
