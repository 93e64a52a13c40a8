use thiserror::Error;

/// Errors that can occur while loading or validating a [`crate::CanvasConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Errors that abort canvas initialization
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The drawing surface could not be acquired. Fatal to the canvas, which
    /// then renders nothing.
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
