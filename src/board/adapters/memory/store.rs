//! In-memory implementation of the board store port.

use crate::board::ports::{BoardStore, BoardStoreError, BoardStoreResult};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory board store for tests and ephemeral sessions.
///
/// Clones share the same slot, so a test can keep one handle while a session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    slot: Arc<RwLock<InMemoryBoardSlot>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardSlot {
    snapshot: Option<String>,
    save_count: usize,
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        let slot = InMemoryBoardSlot {
            snapshot: Some(snapshot.into()),
            save_count: 0,
        };
        Self {
            slot: Arc::new(RwLock::new(slot)),
        }
    }

    /// Returns how many times [`BoardStore::save`] has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] if the lock is poisoned.
    pub fn save_count(&self) -> BoardStoreResult<usize> {
        let slot = self.slot.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slot.save_count)
    }
}

impl BoardStore for InMemoryBoardStore {
    fn load(&self) -> BoardStoreResult<Option<String>> {
        let slot = self.slot.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slot.snapshot.clone())
    }

    fn save(&self, snapshot: &str) -> BoardStoreResult<()> {
        let mut slot = self.slot.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        slot.snapshot = Some(snapshot.to_owned());
        slot.save_count += 1;
        Ok(())
    }
}
