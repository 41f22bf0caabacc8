//! Adapter implementations for board ports.

pub mod file;
pub mod ids;
pub mod memory;

pub use file::{DEFAULT_STORAGE_KEY, FileBoardStore};
pub use ids::{PrefixedIdGenerator, SequentialIdGenerator};
pub use memory::InMemoryBoardStore;
