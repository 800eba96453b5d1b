use super::backend::StorageBackend;
use crate::error::{ArticulateError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: each key lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ArticulateError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ArticulateError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(ArticulateError::Store(format!("Invalid storage key: {:?}", key)));
        }
        self.ensure_dir()?;

        let target = self.key_path(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        write_atomic(&tmp, &target, |file| file.write_all(value.as_bytes()))
    }
}

/// Fills `tmp` through `write`, then renames it onto `target`.
///
/// `tmp` is removed whenever any step fails, including a write that stopped
/// halfway, so readers only ever see the old file or the complete new one.
pub(crate) fn write_atomic<F>(tmp: &Path, target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut fs::File) -> io::Result<()>,
{
    let outcome = fs::File::create(tmp)
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(tmp, target));

    if let Err(e) = outcome {
        let _ = fs::remove_file(tmp);
        return Err(ArticulateError::Io(e));
    }
    Ok(())
}
