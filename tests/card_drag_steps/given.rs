//! Given steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;
use taskboard::board::services::LoadSource;

#[given("a board session on the demo board")]
fn demo_board_session(world: &mut DragWorld) -> Result<(), eyre::Report> {
    if world.session.load_source() != LoadSource::Default {
        return Err(eyre::eyre!("expected the scenario to start on the demo board"));
    }
    Ok(())
}
