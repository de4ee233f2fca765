//! Model-View-Intent primitives shared by every screen state machine.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ onStateChange
//!    ↑                                  │
//!    └──── user input / net outcome ────┘
//! ```
//!
//! Reducers are pure. Anything with a side effect (network, timers,
//! navigation) lives in the controller that dispatches the intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
