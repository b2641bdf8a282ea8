use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{IllustraError, IllustraResult};

/// Where an illustration's flat shape description comes from.
///
/// Loading happens once, in the controller's `start`, and gates the loaded state.
pub trait ShapeSource {
    fn load(&self) -> IllustraResult<String>;

    /// Short human-readable origin used in logs.
    fn describe(&self) -> String;
}

/// Reads the description from a file on disk.
#[derive(Clone, Debug)]
pub struct FileShapeSource {
    path: PathBuf,
}

impl FileShapeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShapeSource for FileShapeSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> IllustraResult<String> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read shape description {}", self.path.display()))
            .map_err(|e| IllustraError::geometry_load(format!("{e:#}")))?;
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory description, used by tests and embedded defaults.
#[derive(Clone, Debug)]
pub struct InlineShapeSource {
    text: String,
}

impl InlineShapeSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ShapeSource for InlineShapeSource {
    fn load(&self) -> IllustraResult<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("inline ({} bytes)", self.text.len())
    }
}
