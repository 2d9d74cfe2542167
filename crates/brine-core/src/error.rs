use thiserror::Error;

/// Errors raised while loading or validating shading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse water config RON: {0}")]
    Parse(String),

    #[error("Invalid value {value} for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}
