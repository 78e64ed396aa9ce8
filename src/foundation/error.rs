use crate::color::parse::ColorParseError;

/// Crate-wide result alias.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Errors surfaced to callers.
///
/// Per-frame and per-event failures inside a running renderer are logged and contained; only
/// construction, configuration and explicit surface operations return these to the caller.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Invalid configuration or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Drawing surface missing or unusable.
    #[error("surface error: {0}")]
    Surface(String),

    /// Host layout lookup failed (for example a missing anchor element).
    #[error("layout error: {0}")]
    Layout(String),

    /// Color text could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BackdropError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`BackdropError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`BackdropError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BackdropError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
