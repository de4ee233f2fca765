use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutDialogState {
    #[default]
    Hidden,
    /// Two choices shown: cancel or confirm.
    Confirming,
    /// Confirmed; the flow clears the session and leaves the dashboard.
    Confirmed,
}

impl UiState for LogoutDialogState {}

impl LogoutDialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Confirming)
    }
}
