use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutIntent {
    /// User tapped "Logout".
    Request,
    Cancel,
    Confirm,
}

impl Intent for LogoutIntent {}
