/// Convenience result type used across bullycov.
pub type DashResult<T> = Result<T, DashError>;

/// Top-level error taxonomy used by chart and dashboard APIs.
#[derive(thiserror::Error, Debug)]
pub enum DashError {
    /// A point series that cannot be banked or mapped to pixels.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// Invalid caller-provided options, identifiers, colors or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Record data that cannot be summarized.
    #[error("data error: {0}")]
    Data(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashError {
    /// Build a [`DashError::InvalidSeries`] value.
    pub fn invalid_series(msg: impl Into<String>) -> Self {
        Self::InvalidSeries(msg.into())
    }

    /// Build a [`DashError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DashError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`DashError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
