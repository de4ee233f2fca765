//! Marker trait for intents.

/// Something that happened to a screen: a field edit, a submit tap,
/// a network outcome arriving, a confirmation choice.
pub trait Intent: Send + 'static {}
