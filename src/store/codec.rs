//! Object codec over the store's string slot.
//!
//! Single objects are encoded to JSON text and stored as one string slot.
//! Ordered lists use a two-level encoding: each element is encoded to its
//! own JSON text first, then the ordered sequence of texts is itself
//! encoded to a single blob. Decoding runs the two levels in reverse, so
//! each element is recovered from a self-contained text rather than from a
//! position inside one merged document. This keeps elements individually
//! decodable for any element type the caller asks for.
//!
//! Decode failures never fault: a corrupted or schema-mismatched slot
//! reads back as `None` (single object) or an empty `Vec` (list), with a
//! logged diagnostic. A partially corrupt list never yields a partially
//! populated result.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;
use crate::logging;

use super::error::Result;
use super::prefs::{check_key, PrefStore};

impl<B: StorageBackend> PrefStore<B> {
    /// Encode `object` to JSON and store it in the string slot at `key`.
    ///
    /// Returns whether the backend committed the write. An object that
    /// cannot be encoded reads as a failed write (`Ok(false)`), logged.
    pub fn put_object<T: Serialize>(&self, key: &str, object: &T) -> Result<bool> {
        check_key(key)?;
        let text = match serde_json::to_string(object) {
            Ok(text) => text,
            Err(e) => {
                logging::warn!(key = %key, error = %e, "failed to encode object");
                return Ok(false);
            }
        };
        self.put_string(key, &text)
    }

    /// Decode the string slot at `key` into a `T`.
    ///
    /// Returns `None` when the key is absent or the stored text does not
    /// decode as a `T`; the failure is logged, never raised.
    pub fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(text) = self.get_string(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(object) => Ok(Some(object)),
            Err(e) => {
                logging::warn!(key = %key, error = %e, "failed to decode stored object");
                Ok(None)
            }
        }
    }

    /// Store an ordered list of strings as one slot.
    pub fn put_string_list(&self, key: &str, items: &[String]) -> Result<bool> {
        check_key(key)?;
        let text = match serde_json::to_string(items) {
            Ok(text) => text,
            Err(e) => {
                logging::warn!(key = %key, error = %e, "failed to encode string list");
                return Ok(false);
            }
        };
        self.put_string(key, &text)
    }

    /// Read an ordered list of strings. Absent or undecodable slots read
    /// back as an empty list, logged.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        let Some(text) = self.get_string(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(items) => Ok(items),
            Err(e) => {
                logging::warn!(key = %key, error = %e, "failed to decode stored string list");
                Ok(Vec::new())
            }
        }
    }

    /// Store an ordered list of objects as one slot.
    ///
    /// Each element is encoded to its own JSON text before the sequence of
    /// texts is encoded and stored. If any element fails to encode, nothing
    /// is written and the operation reads as a failed write (`Ok(false)`).
    pub fn put_object_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<bool> {
        check_key(key)?;
        let mut texts = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::to_string(item) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    logging::warn!(key = %key, error = %e, "failed to encode list element");
                    return Ok(false);
                }
            }
        }
        self.put_string_list(key, &texts)
    }

    /// Read an ordered list of objects, preserving stored order.
    ///
    /// Any decode failure, at the sequence level or for any single
    /// element, reads back as an empty list with a logged diagnostic.
    /// Callers can treat an empty result as "truly empty or unreadable"
    /// without per-element special cases.
    pub fn get_object_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let texts = self.get_string_list(key)?;
        let mut objects = Vec::with_capacity(texts.len());
        for text in &texts {
            match serde_json::from_str(text) {
                Ok(object) => objects.push(object),
                Err(e) => {
                    logging::warn!(key = %key, error = %e, "failed to decode list element");
                    return Ok(Vec::new());
                }
            }
        }
        Ok(objects)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::backend::MemoryBackend;
    use crate::store::{PrefStore, StoreError};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        logins: u32,
        active: bool,
    }

    fn session(user: &str, logins: u32) -> Session {
        Session {
            user: user.to_string(),
            logins,
            active: true,
        }
    }

    fn store() -> PrefStore<MemoryBackend> {
        PrefStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_object_roundtrip() {
        let store = store();
        let original = session("ada", 3);

        assert!(store.put_object("session", &original).unwrap());
        let restored: Option<Session> = store.get_object("session").unwrap();
        assert_eq!(restored, Some(original));
    }

    #[test]
    fn test_object_absent_reads_none() {
        let store = store();
        let restored: Option<Session> = store.get_object("missing").unwrap();
        assert_eq!(restored, None);
    }

    #[test]
    fn test_object_corrupt_reads_none() {
        let store = store();
        store.put_string("session", "{not json").unwrap();

        let restored: Option<Session> = store.get_object("session").unwrap();
        assert_eq!(restored, None);
    }

    #[test]
    fn test_object_shape_mismatch_reads_none() {
        let store = store();
        store.put_object("slot", &vec![1, 2, 3]).unwrap();

        let restored: Option<Session> = store.get_object("slot").unwrap();
        assert_eq!(restored, None);
    }

    #[test]
    fn test_object_list_roundtrip_preserves_order() {
        let store = store();
        let original = vec![session("a", 1), session("b", 2), session("c", 3)];

        assert!(store.put_object_list("sessions", &original).unwrap());
        let restored: Vec<Session> = store.get_object_list("sessions").unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_object_list_roundtrip() {
        let store = store();

        assert!(store.put_object_list::<Session>("sessions", &[]).unwrap());
        let restored: Vec<Session> = store.get_object_list("sessions").unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_object_list_absent_reads_empty() {
        let store = store();
        let restored: Vec<Session> = store.get_object_list("missing").unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_object_list_corrupt_blob_reads_empty() {
        let store = store();
        store.put_string("sessions", "][").unwrap();

        let restored: Vec<Session> = store.get_object_list("sessions").unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_object_list_corrupt_element_reads_empty_not_partial() {
        let store = store();
        // A valid outer sequence whose middle element is not a Session
        let texts = vec![
            serde_json::to_string(&session("a", 1)).unwrap(),
            "{broken".to_string(),
            serde_json::to_string(&session("c", 3)).unwrap(),
        ];
        store.put_string_list("sessions", &texts).unwrap();

        let restored: Vec<Session> = store.get_object_list("sessions").unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_string_list_roundtrip() {
        let store = store();
        let tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        assert!(store.put_string_list("tags", &tags).unwrap());
        assert_eq!(store.get_string_list("tags").unwrap(), tags);
    }

    #[test]
    fn test_codec_rejects_empty_key() {
        let store = store();

        assert!(matches!(
            store.put_object("", &session("a", 1)),
            Err(StoreError::InvalidKey)
        ));
        assert!(matches!(
            store.put_object_list("", &[session("a", 1)]),
            Err(StoreError::InvalidKey)
        ));
        assert!(matches!(
            store.get_object::<Session>(""),
            Err(StoreError::InvalidKey)
        ));
        assert!(matches!(
            store.get_object_list::<Session>(""),
            Err(StoreError::InvalidKey)
        ));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_list_elements_are_individually_encoded() {
        let store = store();
        store.put_object_list("sessions", &[session("a", 1)]).unwrap();

        // The stored blob is a sequence of texts, not a sequence of objects
        let texts = store.get_string_list("sessions").unwrap();
        assert_eq!(texts.len(), 1);
        let element: Session = serde_json::from_str(&texts[0]).unwrap();
        assert_eq!(element, session("a", 1));
    }
}
