use brine_core::ConfigError;

/// Errors that can occur while baking a normal map.
#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    #[error("invalid texture size {0} (expected 1..={max})", max = crate::bake::MAX_SIZE)]
    InvalidSize(u32),

    #[error("water config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("bad argument: {0}")]
    Argument(String),
}
