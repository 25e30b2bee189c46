// crates/ports/src/source.rs
use announcement_id_shared_kernel::{InfraResult, TargetPath};
use serde::Serialize;

/// How replaced content reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate the file and write the new content in place.
    #[default]
    Truncate,
    /// Write a sibling temp file and rename it over the target.
    Atomic,
}

/// Port for loading and storing the full text of a source file.
pub trait SourceStore {
    fn read_to_string(&self, target: &TargetPath) -> InfraResult<String>;

    fn write(&self, target: &TargetPath, content: &str, mode: WriteMode) -> InfraResult<()>;
}
