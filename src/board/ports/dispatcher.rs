//! Dispatch port used by interaction controllers.

use crate::board::domain::{BoardAction, BoardState, Transition};

/// The engine dispatch path seen from an interaction controller.
///
/// Implementors apply the action to the snapshot they own and report whether
/// it changed. Forwarding never fails: an intent that cannot be applied is
/// absorbed, and storage problems are the implementor's to log.
#[cfg_attr(test, mockall::automock)]
pub trait BoardDispatcher {
    /// Returns the current snapshot.
    fn snapshot(&self) -> &BoardState;

    /// Applies `action` to the current snapshot.
    fn forward(&mut self, action: BoardAction) -> Transition;
}
