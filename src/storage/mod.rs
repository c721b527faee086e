//! Local key-value storage
//!
//! A small slot store in the spirit of browser local storage: every key maps
//! to a single string value that is read and overwritten as a whole.
//!
//! - `FileStorage` keeps one `<key>.json` file per slot in a data directory
//! - `MemoryStorage` keeps slots in process memory (tests, ephemeral sessions)

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::{Result, TicketHubError};

/// A string-valued key-value store with whole-slot reads and writes
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if the slot is empty
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the slot `key` with `value`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot `key`; removing an empty slot is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Validate a storage key
///
/// Keys become file names for `FileStorage`, so they must be non-empty and
/// must not contain path separators or start with a dot.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(TicketHubError::InvalidStorageKey(key.to_string()))
    }
}
