// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Truncate `path` and write `data` in place. A crash mid-write can leave a partial file.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path.as_ref())?);
        w.write_all(data)?;
        w.flush()
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// The temp file lives next to the target so the rename stays on one filesystem,
    /// and it inherits the target's permissions when the target exists.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp = parent.join(Self::temp_name(path));

        let result = Self::write_temp(&tmp, path, data).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
            return result;
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(&parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_temp(tmp: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
        let file = File::create(tmp)?;
        if let Ok(meta) = fs::metadata(target) {
            file.set_permissions(meta.permissions())?;
        }
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }

    fn temp_name(path: &Path) -> String {
        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let stem = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        format!(".{stem}.{}.{nanos}.tmp", std::process::id())
    }
}
