//! Screen identity and navigation.

mod router;
mod screen;

pub use router::{NavigationRouter, Transition, TransitionKind};
pub use screen::ScreenId;
