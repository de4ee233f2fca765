//! Per-screen form state.
//!
//! Uses MVI:
//! - `state.rs` - field values, submit phase, last message
//! - `intent.rs` - edits, submit lifecycle, outcomes
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{field, FormState, LastMessage, MessageKind, SubmitPhase};
