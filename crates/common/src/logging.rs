use tracing_subscriber::EnvFilter;

use crate::errors::AppError;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (usually the
/// configured `LOG_LEVEL`) applies to every target.
pub fn init(default_level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
