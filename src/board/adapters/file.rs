//! Filesystem adapter for the board store port.
//!
//! Snapshots are written as `<storage_key>.json` inside a capability-scoped
//! directory. Each save writes a sibling temporary file and renames it over
//! the previous snapshot, so a crash mid-write leaves the old snapshot intact.

use crate::board::ports::{BoardStore, BoardStoreError, BoardStoreResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::debug;

/// Storage key used by [`FileBoardStore::open_default`].
pub const DEFAULT_STORAGE_KEY: &str = "task-board-state-v1";

/// Board store backed by a JSON file.
#[derive(Debug)]
pub struct FileBoardStore {
    dir: Dir,
    file_name: String,
    temp_name: String,
}

impl FileBoardStore {
    /// Opens (creating if needed) `root` and stores the snapshot under
    /// `storage_key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::InvalidKey`] when `storage_key` is not a
    /// plain file stem, or [`BoardStoreError::Persistence`] when the directory
    /// cannot be created or opened.
    pub fn open(root: &Utf8Path, storage_key: &str) -> BoardStoreResult<Self> {
        validate_storage_key(storage_key)?;
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(BoardStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(BoardStoreError::persistence)?;
        Self::from_dir(dir, storage_key)
    }

    /// Opens `root` and stores the snapshot under [`DEFAULT_STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open_default(root: &Utf8Path) -> BoardStoreResult<Self> {
        Self::open(root, DEFAULT_STORAGE_KEY)
    }

    /// Uses an already-opened directory capability.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::InvalidKey`] when `storage_key` is not a
    /// plain file stem.
    pub fn from_dir(dir: Dir, storage_key: &str) -> BoardStoreResult<Self> {
        validate_storage_key(storage_key)?;
        Ok(Self {
            dir,
            file_name: format!("{storage_key}.json"),
            temp_name: format!("{storage_key}.json.tmp"),
        })
    }

    /// Returns the snapshot file name inside the store directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn validate_storage_key(storage_key: &str) -> BoardStoreResult<()> {
    let is_valid = !storage_key.trim().is_empty()
        && storage_key != "."
        && storage_key != ".."
        && !storage_key.contains(['/', '\\']);
    if is_valid {
        Ok(())
    } else {
        Err(BoardStoreError::InvalidKey(storage_key.to_owned()))
    }
}

impl BoardStore for FileBoardStore {
    fn load(&self) -> BoardStoreResult<Option<String>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BoardStoreError::persistence(err)),
        }
    }

    fn save(&self, snapshot: &str) -> BoardStoreResult<()> {
        self.dir
            .write(&self.temp_name, snapshot)
            .map_err(BoardStoreError::persistence)?;
        self.dir
            .rename(&self.temp_name, &self.dir, &self.file_name)
            .map_err(BoardStoreError::persistence)?;
        debug!(file = %self.file_name, bytes = snapshot.len(), "board snapshot written");
        Ok(())
    }
}
