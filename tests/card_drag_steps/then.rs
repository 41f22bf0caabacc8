//! Then steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::then;
use taskboard::{
    board::domain::ListId,
    drag::{DragOutcome, DragPreview},
};

fn card_ids_of(world: &DragWorld, list_id: &str) -> Result<Vec<String>, eyre::Report> {
    let list = world
        .session
        .state()
        .list(&ListId::new(list_id))
        .ok_or_else(|| eyre::eyre!("list {list_id} does not exist"))?;
    Ok(list
        .card_ids
        .iter()
        .map(|card_id| card_id.as_str().to_owned())
        .collect())
}

#[then(r#"list "{list_id}" holds cards "{cards}""#)]
fn list_holds_cards(world: &DragWorld, list_id: String, cards: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = cards.split(',').map(str::trim).collect();
    let actual = card_ids_of(world, &list_id)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected list {list_id} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"list "{list_id}" holds no cards"#)]
fn list_holds_no_cards(world: &DragWorld, list_id: String) -> Result<(), eyre::Report> {
    let actual = card_ids_of(world, &list_id)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected list {list_id} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the column order is "{order}""#)]
fn column_order(world: &DragWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = order.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .session
        .state()
        .board()
        .list_ids
        .iter()
        .map(ListId::as_str)
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected columns {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the preview targets list \"{list_id}\" at gap {gap_index:usize}")]
fn preview_targets(
    world: &DragWorld,
    list_id: String,
    gap_index: usize,
) -> Result<(), eyre::Report> {
    let expected = DragPreview {
        to_list_id: ListId::new(list_id),
        gap_index,
    };
    let preview = world.controller.preview();
    if preview != Some(&expected) {
        return Err(eyre::eyre!("expected preview {expected:?}, found {preview:?}"));
    }
    Ok(())
}

#[then("the drop was discarded")]
fn drop_was_discarded(world: &DragWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_outcome, Some(DragOutcome::Discarded(_))) {
        return Err(eyre::eyre!(
            "expected a discarded drop, got {:?}",
            world.last_outcome
        ));
    }
    Ok(())
}

#[then("the controller is idle")]
fn controller_is_idle(world: &DragWorld) -> Result<(), eyre::Report> {
    if !world.controller.is_idle() {
        return Err(eyre::eyre!(
            "expected idle controller, found {:?}",
            world.controller.phase()
        ));
    }
    Ok(())
}

#[then("the board has been saved {count:usize} times")]
fn board_saved_times(world: &DragWorld, count: usize) -> Result<(), eyre::Report> {
    let saves = world.store.save_count()?;
    if saves != count {
        return Err(eyre::eyre!("expected {count} saves, found {saves}"));
    }
    Ok(())
}
