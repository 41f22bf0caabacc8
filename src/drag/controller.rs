//! Drag interaction controller.
//!
//! A small state machine over one pointer-drag gesture. The controller uses a
//! preview-then-commit strategy: `over` events only update a transient
//! [`DragPreview`], and the board is mutated once, when the gesture ends.

use super::{DragDescriptor, DragKind, DropTarget, resolve_drop_target};
use crate::board::{
    domain::{BoardAction, BoardState, CardId, ListId, Transition, insertion_index},
    ports::BoardDispatcher,
};
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::{debug, trace};

/// Where the dragged card would land if released now.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPreview {
    /// Destination list.
    pub to_list_id: ListId,
    /// Gap index within the destination list, counted with the dragged card
    /// removed.
    pub gap_index: usize,
}

/// Transient state of a card drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDrag {
    card_id: CardId,
    source_list_id: Option<ListId>,
    last_target: Option<DropTarget>,
    preview: Option<DragPreview>,
}

impl CardDrag {
    /// Returns the dragged card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the list the card was picked up from, when known.
    #[must_use]
    pub const fn source_list_id(&self) -> Option<&ListId> {
        self.source_list_id.as_ref()
    }

    /// Returns the most recently resolved target.
    #[must_use]
    pub const fn last_target(&self) -> Option<&DropTarget> {
        self.last_target.as_ref()
    }

    /// Returns the current landing preview.
    #[must_use]
    pub const fn preview(&self) -> Option<&DragPreview> {
        self.preview.as_ref()
    }
}

/// Phase of the drag state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A list is being dragged.
    DraggingList {
        /// The dragged list.
        list_id: ListId,
    },
    /// A card is being dragged.
    DraggingCard(CardDrag),
}

/// Why a gesture ended without a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// The pointer was not over a recognizable drop target.
    NoTarget,
    /// The card's source list was unknown at drag start.
    MissingSourceList,
    /// A list was dropped onto itself.
    SameList,
    /// A list was released over something other than a list.
    NotAList,
    /// A card was released over itself.
    OverSelf,
}

/// The observable result of feeding one event to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A gesture began.
    Started(DragKind),
    /// The event does not apply in the current phase.
    Ignored,
    /// The landing preview changed.
    PreviewChanged(Option<DragPreview>),
    /// The resolved target matches the previous one.
    PreviewUnchanged,
    /// An action was forwarded to the engine.
    Dispatched {
        /// The forwarded action.
        action: BoardAction,
        /// Whether it changed the board.
        transition: Transition,
    },
    /// The gesture ended without a dispatch.
    Discarded(DiscardReason),
    /// The gesture was aborted.
    Cancelled,
}

/// A raw gesture event, as delivered by the drag framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    /// The pointer picked up `active`.
    Start {
        /// The dragged element.
        active: DragDescriptor,
    },
    /// The pointer moved over `over`, or over nothing.
    Over {
        /// The element under the pointer.
        #[serde(default)]
        over: Option<DragDescriptor>,
    },
    /// The pointer was released.
    End {
        /// The element under the pointer at release.
        #[serde(default)]
        over: Option<DragDescriptor>,
    },
    /// The gesture was aborted.
    Cancel,
}

/// Turns drag gestures into board intents.
///
/// Transient drag state lives for exactly one gesture: `end` and `cancel`
/// always reset it, and `start` abandons any gesture still in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    /// Returns the landing preview of an in-progress card drag.
    #[must_use]
    pub const fn preview(&self) -> Option<&DragPreview> {
        match &self.phase {
            DragPhase::DraggingCard(drag) => drag.preview(),
            DragPhase::Idle | DragPhase::DraggingList { .. } => None,
        }
    }

    /// Feeds one gesture event through the state machine.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        dispatcher: &mut impl BoardDispatcher,
    ) -> DragOutcome {
        match event {
            GestureEvent::Start { active } => self.start(&active),
            GestureEvent::Over { over } => self.over(over.as_ref(), dispatcher.snapshot()),
            GestureEvent::End { over } => self.end(over.as_ref(), dispatcher),
            GestureEvent::Cancel => self.cancel(),
        }
    }

    /// Begins a gesture on `active`.
    ///
    /// Cards record their owning list here, once, because the card's list
    /// can change during the gesture. Elements that are neither lists nor
    /// cards leave the controller idle.
    pub fn start(&mut self, active: &DragDescriptor) -> DragOutcome {
        if !self.is_idle() {
            debug!("drag started before previous gesture ended; abandoning it");
        }

        let (phase, outcome) = match active.drag_kind() {
            Some(DragKind::List) => (
                DragPhase::DraggingList {
                    list_id: ListId::new(active.id.as_str()),
                },
                DragOutcome::Started(DragKind::List),
            ),
            Some(DragKind::Card) => (
                DragPhase::DraggingCard(CardDrag {
                    card_id: CardId::new(active.id.as_str()),
                    source_list_id: active.owning_list(),
                    last_target: None,
                    preview: None,
                }),
                DragOutcome::Started(DragKind::Card),
            ),
            Some(DragKind::Dropzone) | None => (DragPhase::Idle, DragOutcome::Ignored),
        };

        debug!(active = %active.id, ?outcome, "drag start");
        self.phase = phase;
        outcome
    }

    /// Tracks the pointer during a card drag.
    ///
    /// Never mutates the board. A target value-equal to the previously
    /// resolved one reports [`DragOutcome::PreviewUnchanged`] without
    /// recomputing the preview.
    pub fn over(&mut self, over: Option<&DragDescriptor>, snapshot: &BoardState) -> DragOutcome {
        let DragPhase::DraggingCard(drag) = &mut self.phase else {
            return DragOutcome::Ignored;
        };

        let target = resolve_drop_target(over);
        if target == drag.last_target {
            return DragOutcome::PreviewUnchanged;
        }

        drag.preview = target
            .as_ref()
            .and_then(|resolved| preview_for(snapshot, &drag.card_id, resolved));
        drag.last_target = target;
        trace!(card = %drag.card_id, preview = ?drag.preview, "drag preview updated");
        DragOutcome::PreviewChanged(drag.preview.clone())
    }

    /// Completes the gesture, forwarding at most one intent.
    pub fn end(
        &mut self,
        over: Option<&DragDescriptor>,
        dispatcher: &mut impl BoardDispatcher,
    ) -> DragOutcome {
        let outcome = match mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::Ignored,
            DragPhase::DraggingList { list_id } => end_list_drag(list_id, over, dispatcher),
            DragPhase::DraggingCard(drag) => end_card_drag(drag, over, dispatcher),
        };
        debug!(?outcome, "drag end");
        outcome
    }

    /// Aborts the gesture without dispatching anything.
    pub fn cancel(&mut self) -> DragOutcome {
        self.phase = DragPhase::Idle;
        debug!("drag cancelled");
        DragOutcome::Cancelled
    }
}

fn end_list_drag(
    list_id: ListId,
    over: Option<&DragDescriptor>,
    dispatcher: &mut impl BoardDispatcher,
) -> DragOutcome {
    let Some(descriptor) = over else {
        return DragOutcome::Discarded(DiscardReason::NoTarget);
    };
    if descriptor.drag_kind() != Some(DragKind::List) {
        return DragOutcome::Discarded(DiscardReason::NotAList);
    }
    if descriptor.id == list_id.as_str() {
        return DragOutcome::Discarded(DiscardReason::SameList);
    }

    let action = BoardAction::reorder_lists(list_id, ListId::new(descriptor.id.as_str()));
    forward(action, dispatcher)
}

fn end_card_drag(
    drag: CardDrag,
    over: Option<&DragDescriptor>,
    dispatcher: &mut impl BoardDispatcher,
) -> DragOutcome {
    let Some(target) = resolve_drop_target(over) else {
        return DragOutcome::Discarded(DiscardReason::NoTarget);
    };
    let Some(source_list_id) = drag.source_list_id else {
        return DragOutcome::Discarded(DiscardReason::MissingSourceList);
    };
    if target.over_card_id.as_ref() == Some(&drag.card_id) {
        return DragOutcome::Discarded(DiscardReason::OverSelf);
    }

    let action = BoardAction::move_card(
        drag.card_id,
        source_list_id,
        target.to_list_id,
        target.over_card_id,
    );
    forward(action, dispatcher)
}

fn forward(action: BoardAction, dispatcher: &mut impl BoardDispatcher) -> DragOutcome {
    let transition = dispatcher.forward(action.clone());
    DragOutcome::Dispatched { action, transition }
}

fn preview_for(snapshot: &BoardState, card_id: &CardId, target: &DropTarget) -> Option<DragPreview> {
    let list = snapshot.list(&target.to_list_id)?;
    if target.over_card_id.as_ref() == Some(card_id) {
        return list.position_of(card_id).map(|gap_index| DragPreview {
            to_list_id: target.to_list_id.clone(),
            gap_index,
        });
    }
    let remaining: Vec<CardId> = list
        .card_ids
        .iter()
        .filter(|id| *id != card_id)
        .cloned()
        .collect();
    Some(DragPreview {
        to_list_id: target.to_list_id.clone(),
        gap_index: insertion_index(&remaining, target.over_card_id.as_ref()),
    })
}
