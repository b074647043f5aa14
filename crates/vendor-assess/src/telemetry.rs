use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "APP_LOG_LEVEL '{}' is not a valid tracing filter", value)
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "tracing subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` wins over the configured level when it parses.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Variant of [`init`] for one-shot commands: logs go to stderr so stdout
/// carries only the command's report or JSON.
pub fn init_stderr(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter(&config("vendor_assess=debug,info")).is_ok());
    }

    #[test]
    fn malformed_level_is_reported_with_its_value() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let error = env_filter(&config("vendor_assess=loud")).expect_err("invalid level");
        assert!(error.to_string().contains("vendor_assess=loud"));
    }

    #[test]
    fn stderr_subscriber_installs_once() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        init_stderr(&config("info")).expect("first subscriber installs");
        assert!(matches!(
            init_stderr(&config("info")),
            Err(TelemetryError::Subscriber(_))
        ));
    }
}
