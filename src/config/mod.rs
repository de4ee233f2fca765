//! Client configuration: where the auth service lives and the two
//! navigation delays.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, TimingConfig};
