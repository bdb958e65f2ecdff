//! Primitive store implementation.

use std::collections::BTreeMap;

use crate::backend::StorageBackend;
use crate::logging;

use super::error::{Result, StoreError};
use super::types::Value;

/// Typed synchronous store over an injected backend.
///
/// Every operation validates the key up front: an empty key is rejected
/// with [`StoreError::InvalidKey`] before any backend call, so a malformed
/// key can never reach the backend's persistent representation. Writes
/// return whether the backend confirmed the commit; a `false` return is
/// the only way a commit failure is reported.
///
/// Absent keys read back as per-type defaults: `-1` for the integer
/// slots, `-1.0` for the float slot, `None` for the string slot and
/// `false` for the boolean slot. These defaults are a sentinel
/// convention, not "no value" signaling; callers that need to tell
/// "absent" from "stored as -1/false" should use [`snapshot`] or the
/// string slot.
///
/// Operations may block the calling thread on backend I/O. The store adds
/// no locking of its own; callers needing non-blocking behavior offload
/// calls to their own execution context.
///
/// [`snapshot`]: PrefStore::snapshot
pub struct PrefStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PrefStore<B> {
    /// Create a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write an i32 slot. Returns whether the backend committed the write.
    pub fn put_int(&self, key: &str, value: i32) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.put(key, Value::Int(value)))
    }

    /// Write an i64 slot. Returns whether the backend committed the write.
    pub fn put_long(&self, key: &str, value: i64) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.put(key, Value::Long(value)))
    }

    /// Write an f32 slot. Returns whether the backend committed the write.
    pub fn put_float(&self, key: &str, value: f32) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.put(key, Value::Float(value)))
    }

    /// Write a string slot. Returns whether the backend committed the write.
    pub fn put_string(&self, key: &str, value: &str) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.put(key, Value::Str(value.to_string())))
    }

    /// Write a boolean slot. Returns whether the backend committed the write.
    pub fn put_bool(&self, key: &str, value: bool) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.put(key, Value::Bool(value)))
    }

    /// Read an i32 slot, or `-1` when the key is absent.
    pub fn get_int(&self, key: &str) -> Result<i32> {
        check_key(key)?;
        Ok(self.read_slot(key, Value::as_int).unwrap_or(-1))
    }

    /// Read an i64 slot, or `-1` when the key is absent.
    pub fn get_long(&self, key: &str) -> Result<i64> {
        check_key(key)?;
        Ok(self.read_slot(key, Value::as_long).unwrap_or(-1))
    }

    /// Read an f32 slot, or `-1.0` when the key is absent.
    pub fn get_float(&self, key: &str) -> Result<f32> {
        check_key(key)?;
        Ok(self.read_slot(key, Value::as_float).unwrap_or(-1.0))
    }

    /// Read a string slot, or `None` when the key is absent.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.read_slot(key, |v| v.as_str().map(str::to_string)))
    }

    /// Read a boolean slot, or `false` when the key is absent.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        check_key(key)?;
        Ok(self.read_slot(key, Value::as_bool).unwrap_or(false))
    }

    /// Remove the slot at `key`. Returns whether the backend committed the
    /// removal; removing an absent key is a successful no-op.
    pub fn remove(&self, key: &str) -> Result<bool> {
        check_key(key)?;
        Ok(self.backend.remove(key))
    }

    /// Remove every slot. Previously written keys read back as their
    /// absent-defaults afterwards.
    pub fn clear_all(&self) {
        self.backend.clear();
    }

    /// Read-only view of every slot. Mutation goes through the put/remove
    /// operations, never through this view.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.backend.entries()
    }

    /// Read a slot and coerce it with `extract`. A slot holding a
    /// different primitive type reads as absent, matching the policy that
    /// reads degrade rather than fault.
    fn read_slot<T>(&self, key: &str, extract: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let value = self.backend.get(key)?;
        let extracted = extract(&value);
        if extracted.is_none() {
            logging::debug!(
                key = %key,
                stored = value.type_name(),
                "slot holds a different primitive type, reading as absent"
            );
        }
        extracted
    }
}

pub(super) fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey);
    }
    Ok(())
}
