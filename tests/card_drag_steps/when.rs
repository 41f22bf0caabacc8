//! When steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::{
    board::{domain::ListId, ports::BoardDispatcher},
    drag::{DragDescriptor, GestureEvent},
};

fn feed(world: &mut DragWorld, event: GestureEvent) {
    let outcome = world.controller.handle(event, &mut world.session);
    world.last_outcome = Some(outcome);
}

#[when(r#"card "{card_id}" from list "{list_id}" is picked up"#)]
fn pick_up_card(world: &mut DragWorld, card_id: String, list_id: String) {
    feed(
        world,
        GestureEvent::Start {
            active: DragDescriptor::card(card_id, list_id),
        },
    );
}

#[when(r#"list "{list_id}" is picked up"#)]
fn pick_up_list(world: &mut DragWorld, list_id: String) {
    feed(
        world,
        GestureEvent::Start {
            active: DragDescriptor::list(list_id),
        },
    );
}

#[when(r#"the pointer hovers card "{card_id}" in list "{list_id}""#)]
fn hover_card(world: &mut DragWorld, card_id: String, list_id: String) {
    feed(
        world,
        GestureEvent::Over {
            over: Some(DragDescriptor::card(card_id, list_id)),
        },
    );
}

#[when(r#"the pointer hovers the dropzone of list "{list_id}""#)]
fn hover_dropzone(world: &mut DragWorld, list_id: String) {
    feed(
        world,
        GestureEvent::Over {
            over: Some(DragDescriptor::dropzone(list_id)),
        },
    );
}

#[when(r#"the pointer is released over card "{card_id}" in list "{list_id}""#)]
fn release_over_card(world: &mut DragWorld, card_id: String, list_id: String) {
    feed(
        world,
        GestureEvent::End {
            over: Some(DragDescriptor::card(card_id, list_id)),
        },
    );
}

#[when(r#"the pointer is released over the dropzone of list "{list_id}""#)]
fn release_over_dropzone(world: &mut DragWorld, list_id: String) {
    feed(
        world,
        GestureEvent::End {
            over: Some(DragDescriptor::dropzone(list_id)),
        },
    );
}

#[when(r#"the pointer is released over list "{list_id}""#)]
fn release_over_list(world: &mut DragWorld, list_id: String) {
    feed(
        world,
        GestureEvent::End {
            over: Some(DragDescriptor::list(list_id)),
        },
    );
}

#[when("the pointer is released over nothing")]
fn release_over_nothing(world: &mut DragWorld) {
    feed(world, GestureEvent::End { over: None });
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut DragWorld) {
    feed(world, GestureEvent::Cancel);
}

#[when(r#"list "{list_id}" is removed during the drag"#)]
fn remove_list_mid_drag(world: &mut DragWorld, list_id: String) -> Result<(), eyre::Report> {
    world
        .session
        .remove_list(&ListId::new(list_id))
        .wrap_err("remove list while a drag is in progress")?;
    if world.session.snapshot().board().list_ids.is_empty() {
        return Err(eyre::eyre!("every list was removed"));
    }
    Ok(())
}
