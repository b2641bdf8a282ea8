/// Convenience result type used across illustra.
pub type IllustraResult<T> = Result<T, IllustraError>;

/// Top-level error taxonomy used by illustration APIs.
///
/// Errors are scoped to a single illustration instance: a failure in one instance never halts
/// another (see [`crate::IllustrationRegistry`]).
#[derive(thiserror::Error, Debug)]
pub enum IllustraError {
    /// A required configuration value is missing or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Fetching or parsing the flat shape description failed.
    #[error("geometry load error: {0}")]
    GeometryLoad(String),

    /// The drawing surface is missing or cannot be sized.
    #[error("surface error: {0}")]
    Surface(String),

    /// Rasterizing recorded draw operations failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IllustraError {
    /// Build an [`IllustraError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`IllustraError::GeometryLoad`] value.
    pub fn geometry_load(msg: impl Into<String>) -> Self {
        Self::GeometryLoad(msg.into())
    }

    /// Build an [`IllustraError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build an [`IllustraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`IllustraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a configuration problem detected before any rendering.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for IllustraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
