// crates/shared-kernel/src/value_objects/target_path.rs
use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

/// Location of the source file holding the announcement field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    /// Relative path used when nothing else is configured.
    pub const DEFAULT: &'static str = "src/core/webview/ClineProvider.ts";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Absolute form for diagnostics; symlinks are not resolved.
    pub fn logical_absolute(&self) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&self.0))
                .unwrap_or_else(|_| self.0.clone())
        }
    }
}

impl Default for TargetPath {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<PathBuf> for TargetPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TargetPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
