use crate::error::Result;

/// Abstract interface for raw named-entry storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CatalogStore handles the "what" (validation, transactions).
pub trait StorageBackend {
    /// Read a named entry. Returns Ok(None) if the entry has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace a named entry.
    /// MUST be atomic: readers see either the old or the new value, never a mix.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
