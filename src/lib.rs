//! Typed persistent key-value store with a pluggable durable backend.
//!
//! This library provides a small, synchronous preference-style store: typed
//! accessor/mutator pairs for the primitive slot types (i32, i64, f32,
//! String, bool) over an injected [`StorageBackend`], plus a JSON object
//! codec for persisting arbitrary serde values and ordered lists of them
//! through the string slot.
//!
//! # Quick Start
//!
//! ```ignore
//! use prefstore::prelude::*;
//!
//! // Open a durable store against a named namespace
//! let backend = FjallBackend::open(".prefstore", "app")?;
//! let store = PrefStore::new(backend);
//!
//! // Store and retrieve typed values
//! store.put_int("retries", 3)?;
//! assert_eq!(store.get_int("retries")?, 3);
//!
//! // Store and retrieve structured values
//! store.put_object("session", &session)?;
//! let restored: Option<Session> = store.get_object("session")?;
//! ```
//!
//! # Modules
//!
//! - [`store`] - The typed store and its object codec (always available)
//! - [`backend`] - The backend trait plus bundled implementations
//!
//! # Feature Flags
//!
//! - `fjall` - Enable the durable fjall-backed storage backend (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features
//!
//! # Failure Semantics
//!
//! An empty key is the only condition surfaced as an error, and it is
//! reported before any backend I/O. Backend commit failures surface as an
//! `Ok(false)` return; decode failures on the read path degrade to the
//! documented absent-defaults (`None` for objects, an empty `Vec` for
//! lists) with a logged diagnostic. Read operations never fault over the
//! key space.

pub mod backend;
mod logging;
pub mod prelude;
pub mod store;

// Re-export the store types at crate root for convenience
pub use store::{PrefStore, Result, StoreError, Value};

// Re-export backend types at crate root for convenience
pub use backend::{MemoryBackend, StorageBackend};

#[cfg(feature = "fjall")]
pub use backend::FjallBackend;
