//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    board::{
        adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardStore},
        services::{BoardConfig, BoardSession},
    },
    drag::{DragController, DragOutcome},
};

/// Session type used by the BDD world.
pub type DragSession = BoardSession<InMemoryBoardStore, SequentialIdGenerator, DefaultClock>;

/// Scenario world for drag behaviour tests.
pub struct DragWorld {
    pub store: InMemoryBoardStore,
    pub session: DragSession,
    pub controller: DragController,
    pub last_outcome: Option<DragOutcome>,
}

impl DragWorld {
    /// Creates a world over the demo board with an idle controller.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryBoardStore::new();
        let session = BoardSession::open(
            Arc::new(store.clone()),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DefaultClock),
            BoardConfig::default(),
        );

        Self {
            store,
            session,
            controller: DragController::new(),
            last_outcome: None,
        }
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}
