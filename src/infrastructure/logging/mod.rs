// Logging module - Logging infrastructure
use crate::domain::error::{DemoError, DemoResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging system
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug and
/// `log_level` applies to this crate.
pub fn init_logging(log_level: &str, verbose: bool) -> DemoResult<()> {
    let level = if verbose { "debug" } else { log_level };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("argdemo={},warn", level)))
        .map_err(|e| DemoError::Logging(format!("Invalid log level '{}': {}", level, e)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| DemoError::Logging(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("argdemo logging system initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_once() {
        assert!(init_logging("info", false).is_ok());
        assert!(matches!(
            init_logging("info", false),
            Err(DemoError::Logging(_))
        ));
    }
}
