//! Logout confirmation on the dashboard.
//!
//! Uses MVI:
//! - `state.rs` - dialog hidden or asking
//! - `intent.rs` - request, cancel, confirm
//! - `reducer.rs` - state transitions
//! - `flow.rs` - applies the confirmed logout to session and router

mod flow;
mod intent;
mod reducer;
mod state;

pub use flow::LogoutFlow;
pub use intent::LogoutIntent;
pub use reducer::LogoutReducer;
pub use state::LogoutDialogState;
