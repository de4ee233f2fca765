//! Marker trait for screen state.

/// Snapshot of everything a screen needs to render.
///
/// States are cloned out to observers, so they must be cheap to copy
/// and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
