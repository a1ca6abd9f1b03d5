//! Durable key/value backends for drafts.
//!
//! Values are opaque strings (the store writes JSON). Two backends ship with
//! the crate:
//! - [`MemoryStorage`] - an in-process map shared between clones
//! - [`FileStorage`] - one file per key in a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A synchronous string key/value storage.
pub trait DraftStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry for `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: DraftStorage + ?Sized> DraftStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
