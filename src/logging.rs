use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file path; when unset, logs go to stderr.
pub const LOG_PATH_ENV: &str = "TRIPMATE_LOG";

/// Initialize tracing.
///
/// Filter comes from `RUST_LOG` (default `info`). Set `TRIPMATE_LOG` to a
/// file path to write there instead of stderr; if the file cannot be
/// created, stderr is used.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(path) = std::env::var(LOG_PATH_ENV) {
        match std::fs::File::create(&path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(err) => eprintln!("Warning: Failed to create log file {}: {}", path, err),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}
