//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Key validity is the only condition surfaced through this type by the
/// store's get/put/remove operations; backend commit failures are reported
/// as a `false` return value and decode failures degrade to the documented
/// absent-defaults.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The supplied key is empty. Raised before any backend I/O so that a
    /// malformed key can never reach the backend's persistent
    /// representation.
    #[error("invalid key: keys must be non-empty")]
    InvalidKey,

    /// The durable backend failed to open or initialize.
    #[cfg(feature = "fjall")]
    #[error("backend error: {0}")]
    Backend(#[from] fjall::Error),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
