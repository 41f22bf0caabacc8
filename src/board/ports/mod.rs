//! Port contracts for the board context.
//!
//! Ports define infrastructure-agnostic interfaces used by the board session
//! and the drag controller.

pub mod dispatcher;
pub mod ids;
pub mod store;

pub use dispatcher::BoardDispatcher;
pub use ids::IdGenerator;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};

#[cfg(test)]
pub use dispatcher::MockBoardDispatcher;
#[cfg(test)]
pub use store::MockBoardStore;
