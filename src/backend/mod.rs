//! Storage backends for the typed store.
//!
//! A backend is an opaque durable key-value surface with typed primitive
//! slots. The store treats it as a capability injected at construction
//! time and makes no assumption about its on-disk layout. Two
//! implementations ship with the crate: [`MemoryBackend`] (always
//! available, volatile) and [`FjallBackend`] (durable, requires the
//! `fjall` feature).

use std::collections::BTreeMap;

use crate::store::Value;

#[cfg(feature = "fjall")]
mod fjall;
mod memory;

#[cfg(feature = "fjall")]
pub use fjall::FjallBackend;
pub use memory::MemoryBackend;

/// Durable key-value surface consumed by the store.
///
/// Every operation is synchronous and may block the calling thread on
/// storage I/O. Writes carry their own commit: `put` and `remove` return
/// whether the backend confirmed the change durably, and a `false` return
/// is the only way a commit failure is reported. Implementations perform
/// no internal locking beyond what their own storage requires; concurrent
/// writers to the same key observe a last-commit-wins outcome.
pub trait StorageBackend {
    /// Write a value into the slot at `key`, replacing whatever was there.
    /// Returns whether the write was durably committed.
    fn put(&self, key: &str, value: Value) -> bool;

    /// Read the slot at `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<Value>;

    /// Remove the slot at `key`. Returns whether the removal was durably
    /// committed. Removing an absent key is a successful no-op.
    fn remove(&self, key: &str) -> bool;

    /// Remove every slot. Best-effort; cannot fail observably.
    fn clear(&self);

    /// Full-enumeration read of every readable slot. Slots whose stored
    /// bytes cannot be decoded are omitted.
    fn entries(&self) -> BTreeMap<String, Value>;
}
