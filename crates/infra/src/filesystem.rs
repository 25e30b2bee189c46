// crates/infra/src/filesystem.rs
use announcement_id_ports::{SourceStore, WriteMode};
use announcement_id_shared_kernel::{InfraResult, InfrastructureError, TargetPath};

use crate::persistence::{FileReader, FileWriter};

/// [`SourceStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceStore;

impl FsSourceStore {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for FsSourceStore {
    fn read_to_string(&self, target: &TargetPath) -> InfraResult<String> {
        let content = FileReader::read_to_string(target.as_path()).map_err(|source| InfrastructureError::FileRead {
            path: target.as_path().to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", content.len(), target.logical_absolute().display());
        Ok(content)
    }

    fn write(&self, target: &TargetPath, content: &str, mode: WriteMode) -> InfraResult<()> {
        let written = match mode {
            WriteMode::Truncate => FileWriter::overwrite(target, content.as_bytes()),
            WriteMode::Atomic => FileWriter::atomic_write(target, content.as_bytes()),
        };
        written.map_err(|source| InfrastructureError::FileWrite {
            path: target.as_path().to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {} ({mode:?})", content.len(), target.logical_absolute().display());
        Ok(())
    }
}
