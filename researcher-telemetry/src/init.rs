//! Telemetry initialization

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging at `info` unless `RUST_LOG` says otherwise.
///
/// # Example
/// ```
/// use researcher_telemetry::init_telemetry;
/// init_telemetry("investment-researcher").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry_with_level(service_name, Level::INFO)
}

/// Initialize console logging with `default_level` as the fallback filter.
///
/// `RUST_LOG` still wins when set. Only the first call installs a subscriber;
/// later calls are no-ops.
pub fn init_telemetry_with_level(
    service_name: &str,
    default_level: Level,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level.as_str().to_ascii_lowercase())?,
    };

    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).with_line_number(true))
            .try_init();

        if installed.is_ok() {
            tracing::info!(service.name = service_name, "Telemetry initialized");
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        assert!(init_telemetry("telemetry-test").is_ok());
        assert!(init_telemetry_with_level("telemetry-test", Level::DEBUG).is_ok());
    }
}
