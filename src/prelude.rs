//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::prelude::*;
//!
//! let store = PrefStore::new(MemoryBackend::new());
//! store.put_string("greeting", "hello")?;
//! ```

// Unified error handling
pub use crate::store::{Result, StoreError};

// Store types
pub use crate::store::{PrefStore, Value};

// Backend trait and bundled implementations
pub use crate::backend::{MemoryBackend, StorageBackend};

#[cfg(feature = "fjall")]
pub use crate::backend::FjallBackend;
