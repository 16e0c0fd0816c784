use crate::config::LoggingSettings;

/// Configuration for tracing initialization. Built from `Settings` so the
/// environment is read exactly once, at startup.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl From<&LoggingSettings> for TracingConfig {
    fn from(logging: &LoggingSettings) -> Self {
        Self {
            environment: logging.environment.clone(),
            json_format: logging.json_format,
        }
    }
}
