/// Convenience result type used across the crate.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Error type shared by layout, fitting, record loading and rendering.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// A caller-supplied value broke a precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// A produced animation schedule broke its invariants.
    #[error("layout error: {0}")]
    Layout(String),

    /// Input records were missing or malformed.
    #[error("input error: {0}")]
    Input(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Any other failure, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Build a [`BadgeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BadgeError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`BadgeError::Input`].
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`BadgeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for BadgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}
