//! Error types for the triage engine

/// Result type alias using the triage Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for triage operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Submission failed validation; carries every violation message in order
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Rule set or configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A string did not name a known level, status, or duration bucket
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new validation error from violation messages
    pub fn validation<I, S>(violations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(violations.into_iter().map(Into::into).collect())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid value error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Violation messages, if this is a validation error
    pub fn violations(&self) -> Option<&[String]> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}
