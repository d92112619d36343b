use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter. A non-empty `RUST_LOG` replaces the configured level and may
/// hold full filter directives; either source must parse or startup fails.
pub fn env_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        return EnvFilter::try_new(directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e)));
    }

    configured_level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            configured_level
        ))
    })?;

    Ok(EnvFilter::new(configured_level))
}
