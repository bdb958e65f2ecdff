//! Typed store over an injected storage backend.
//!
//! This module provides the primitive store (typed get/put pairs with
//! centralized key validation) and the object codec layered on its string
//! slot. Values are persisted through a [`StorageBackend`] supplied by the
//! caller; the store never assumes anything about the backend's on-disk
//! layout.
//!
//! [`StorageBackend`]: crate::backend::StorageBackend

mod codec;
mod error;
mod prefs;
mod types;

pub use error::{Result, StoreError};
pub use prefs::PrefStore;
pub use types::Value;
