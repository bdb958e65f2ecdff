//! Durable storage backend using fjall.

use std::collections::BTreeMap;
use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging;
use crate::store::{Result, Value};

use super::StorageBackend;

/// Slot type tags. One byte ahead of the raw payload so that a slot can be
/// read back without any out-of-band type information.
const TAG_INT: u8 = 1;
const TAG_LONG: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_STR: u8 = 4;
const TAG_BOOL: u8 = 5;

/// Durable backend backed by fjall.
///
/// All slots of one store live in a single named keyspace (the store's
/// namespace). Each write is followed by a synchronous persist; the commit
/// outcome is what `put` and `remove` report.
pub struct FjallBackend {
    db: fjall::Database,
    slots: Keyspace,
}

impl FjallBackend {
    /// Open (or create) a durable backend at `path` against the named
    /// namespace.
    pub fn open(path: impl AsRef<Path>, namespace: &str) -> Result<Self> {
        let db = fjall::Database::builder(path.as_ref()).open()?;
        let slots = db.keyspace(namespace, KeyspaceCreateOptions::default)?;
        Ok(Self { db, slots })
    }

    fn commit(&self) -> bool {
        match self.db.persist(PersistMode::SyncAll) {
            Ok(()) => true,
            Err(e) => {
                logging::error!(error = %e, "backend commit failed");
                false
            }
        }
    }

    fn keys(&self) -> Vec<Vec<u8>> {
        // Skip any keys that fail to read
        self.slots
            .iter()
            .filter_map(|kv| kv.key().ok().map(|k| k.to_vec()))
            .collect()
    }
}

fn encode_value(value: &Value) -> Vec<u8> {
    match value {
        Value::Int(v) => {
            let mut buf = vec![TAG_INT];
            buf.extend_from_slice(&v.to_le_bytes());
            buf
        }
        Value::Long(v) => {
            let mut buf = vec![TAG_LONG];
            buf.extend_from_slice(&v.to_le_bytes());
            buf
        }
        Value::Float(v) => {
            let mut buf = vec![TAG_FLOAT];
            buf.extend_from_slice(&v.to_le_bytes());
            buf
        }
        Value::Str(s) => {
            let mut buf = vec![TAG_STR];
            buf.extend_from_slice(s.as_bytes());
            buf
        }
        Value::Bool(v) => vec![TAG_BOOL, u8::from(*v)],
    }
}

fn decode_value(bytes: &[u8]) -> Option<Value> {
    let (&tag, payload) = bytes.split_first()?;
    match tag {
        TAG_INT => Some(Value::Int(i32::from_le_bytes(payload.try_into().ok()?))),
        TAG_LONG => Some(Value::Long(i64::from_le_bytes(payload.try_into().ok()?))),
        TAG_FLOAT => Some(Value::Float(f32::from_le_bytes(payload.try_into().ok()?))),
        TAG_STR => Some(Value::Str(String::from_utf8(payload.to_vec()).ok()?)),
        TAG_BOOL => match payload {
            [0] => Some(Value::Bool(false)),
            [1] => Some(Value::Bool(true)),
            _ => None,
        },
        _ => None,
    }
}

impl StorageBackend for FjallBackend {
    fn put(&self, key: &str, value: Value) -> bool {
        if let Err(e) = self.slots.insert(key, encode_value(&value)) {
            logging::error!(key = %key, error = %e, "backend write failed");
            return false;
        }
        self.commit()
    }

    fn get(&self, key: &str) -> Option<Value> {
        let bytes = match self.slots.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                logging::warn!(key = %key, error = %e, "backend read failed");
                return None;
            }
        };

        let decoded = decode_value(bytes.as_ref());
        if decoded.is_none() {
            logging::warn!(key = %key, "stored slot bytes are not decodable");
        }
        decoded
    }

    fn remove(&self, key: &str) -> bool {
        if let Err(e) = self.slots.remove(key) {
            logging::error!(key = %key, error = %e, "backend remove failed");
            return false;
        }
        self.commit()
    }

    fn clear(&self) {
        for key in self.keys() {
            if let Err(e) = self.slots.remove(&key) {
                logging::warn!(error = %e, "failed to remove slot during clear");
            }
        }
        self.commit();
    }

    fn entries(&self) -> BTreeMap<String, Value> {
        let mut entries = BTreeMap::new();
        for key_bytes in self.keys() {
            let Ok(key) = String::from_utf8(key_bytes) else {
                continue;
            };
            if let Some(value) = self.get(&key) {
                entries.insert(key, value);
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_encoding_roundtrip() {
        let values = [
            Value::Int(-42),
            Value::Long(i64::MAX),
            Value::Float(2.5),
            Value::Str("hello".to_string()),
            Value::Bool(true),
            Value::Bool(false),
        ];
        for value in values {
            let encoded = encode_value(&value);
            assert_eq!(decode_value(&encoded), Some(value));
        }
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(decode_value(&[]), None);
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        assert_eq!(decode_value(&[99, 0, 0, 0, 0]), None);
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        assert_eq!(decode_value(&[TAG_INT, 0, 0]), None);
        assert_eq!(decode_value(&[TAG_LONG, 1, 2, 3]), None);
        assert_eq!(decode_value(&[TAG_BOOL]), None);
        assert_eq!(decode_value(&[TAG_BOOL, 2]), None);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(decode_value(&[TAG_STR, 0xff, 0xfe]), None);
    }
}
