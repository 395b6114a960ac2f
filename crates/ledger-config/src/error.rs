use thiserror::Error;

/// Why configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or a value has the wrong type.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is outside the range the service accepts.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
