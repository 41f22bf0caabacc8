//! Persistence port for serialized board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Storage for the single serialized board snapshot.
///
/// Stores move opaque strings; parsing and schema validation stay in the
/// domain so every adapter rejects bad blobs the same way.
#[cfg_attr(test, mockall::automock)]
pub trait BoardStore {
    /// Reads the persisted blob.
    ///
    /// Returns `None` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the backing storage
    /// cannot be read.
    fn load(&self) -> BoardStoreResult<Option<String>>;

    /// Replaces the persisted blob with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the backing storage
    /// cannot be written.
    fn save(&self, snapshot: &str) -> BoardStoreResult<()>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// The storage key cannot be used as a storage location.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
