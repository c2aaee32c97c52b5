/// Convenience result type used across chronolane.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Top-level error taxonomy for the fallible outer surfaces (IO, config, rendering).
///
/// Layout and interaction never fail on user data: malformed dates are dropped and
/// degenerate cases fall back to "draw less". These variants cover what remains.
#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    /// Invalid configuration or caller-provided geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input that could not be interpreted as timeline data.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failures while producing or rasterizing output.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimelineError {
    /// Build a [`TimelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TimelineError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TimelineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TimelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
