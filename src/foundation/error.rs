/// Convenience result type used across Flipbook.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Top-level error taxonomy used by player APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// Invalid animation configuration or sheet geometry.
    #[error("config error: {0}")]
    Config(String),

    /// A frame index outside `[0, number_of_frames)`.
    #[error("frame error: {0}")]
    Frame(String),

    /// An operation that is not valid in the animator's current lifecycle state.
    #[error("state error: {0}")]
    State(String),

    /// Errors when serializing or deserializing configs and snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    /// Build a [`FlipbookError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FlipbookError::Frame`] value.
    pub fn frame(msg: impl Into<String>) -> Self {
        Self::Frame(msg.into())
    }

    /// Build a [`FlipbookError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`FlipbookError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
