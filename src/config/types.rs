use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Remote authentication service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host + port, e.g. "http://172.20.10.3:5000".
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Navigation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the splash screen stays up (default: 4000).
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    /// Pause between a successful submit and the screen change, so the
    /// success message is visible (default: 1500, allowed 1000..=2000).
    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_splash_ms() -> u64 {
    4000
}

fn default_success_delay_ms() -> u64 {
    1500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_ms: default_splash_ms(),
            success_delay_ms: default_success_delay_ms(),
        }
    }
}

impl TimingConfig {
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}
