use crate::error::Result;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`CardStore`](super::CardStore) handles the "what".
pub trait StorageBackend {
    /// Read the text stored under `key`.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
