//! Local key-value persistence.
//!
//! The event store writes its whole snapshot as one string value under a
//! well-known key, so any backend that can get/set a string by key will do.

use anyhow::Result;

mod json_file;
mod memory;
mod sqlite;

pub use json_file::JsonFileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// String blobs addressed by key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
