//! The board transition function.
//!
//! [`apply`] is total: every action either produces a new snapshot or is
//! absorbed, in which case the returned snapshot equals the input. Actions
//! built from stale UI data (a list removed between drag start and drag end,
//! say) therefore degrade to no-ops instead of corrupting state.

use super::{BoardAction, BoardList, BoardState, Card, CardId, Comment, ListId, Transition};

/// Applies `action` to `state` and returns the resulting snapshot.
///
/// The input snapshot is never modified.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::{apply, BoardAction, BoardState, ListId, default_board_state};
///
/// let state = default_board_state();
/// let next = apply(&state, BoardAction::AddList {
///     list_id: ListId::new("backlog"),
///     title: "Backlog".to_owned(),
/// });
/// assert_eq!(next.board().list_ids.last(), Some(&ListId::new("backlog")));
/// assert_ne!(next, state);
/// ```
#[must_use]
pub fn apply(state: &BoardState, action: BoardAction) -> BoardState {
    apply_traced(state, action).0
}

/// Applies `action` and reports whether the snapshot changed.
///
/// An action that passes its preconditions but leaves the snapshot
/// value-equal (renaming a list to its current title, say) reports
/// [`Transition::Unchanged`].
#[must_use]
pub fn apply_traced(state: &BoardState, action: BoardAction) -> (BoardState, Transition) {
    match transition(state, action) {
        Some(next) if next != *state => (next, Transition::Changed),
        _ => (state.clone(), Transition::Unchanged),
    }
}

fn transition(state: &BoardState, action: BoardAction) -> Option<BoardState> {
    match action {
        BoardAction::ReplaceAll { snapshot } => Some(*snapshot),
        BoardAction::SetBoardTitle { title } => {
            let mut next = state.clone();
            next.board_mut().title = title;
            Some(next)
        }
        BoardAction::AddList { list_id, title } => add_list(state, list_id, title),
        BoardAction::RemoveList { list_id } => remove_list(state, &list_id),
        BoardAction::SetListTitle { list_id, title } => {
            state.list(&list_id)?;
            let mut next = state.clone();
            next.list_mut(&list_id)?.title = title;
            Some(next)
        }
        BoardAction::AddCard {
            list_id,
            card_id,
            title,
        } => add_card(state, &list_id, card_id, title),
        BoardAction::SetCardTitle { card_id, title } => {
            state.card(&card_id)?;
            let mut next = state.clone();
            next.card_mut(&card_id)?.title = title;
            Some(next)
        }
        BoardAction::ReorderLists { active_id, over_id } => {
            reorder_lists(state, &active_id, &over_id)
        }
        BoardAction::MoveCard {
            card_id,
            from_list_id,
            to_list_id,
            over_card_id,
        } => move_card(
            state,
            &card_id,
            &from_list_id,
            &to_list_id,
            over_card_id.as_ref(),
        ),
        BoardAction::AddComment { card_id, comment } => add_comment(state, &card_id, comment),
    }
}

fn add_list(state: &BoardState, list_id: ListId, title: String) -> Option<BoardState> {
    if state.list(&list_id).is_some() || state.board().position_of(&list_id).is_some() {
        return None;
    }
    let mut next = state.clone();
    next.insert_list(BoardList::new(list_id, title));
    Some(next)
}

fn remove_list(state: &BoardState, list_id: &ListId) -> Option<BoardState> {
    state.list(list_id)?;
    let mut next = state.clone();
    let removed = next.take_list(list_id)?;
    for card_id in &removed.card_ids {
        next.remove_card(card_id);
    }
    Some(next)
}

fn add_card(
    state: &BoardState,
    list_id: &ListId,
    card_id: CardId,
    title: String,
) -> Option<BoardState> {
    state.list(list_id)?;
    if state.card(&card_id).is_some() || state.list_containing(&card_id).is_some() {
        return None;
    }
    let mut next = state.clone();
    next.list_mut(list_id)?.card_ids.push(card_id.clone());
    next.insert_card(Card::new(card_id, title));
    Some(next)
}

fn reorder_lists(state: &BoardState, active_id: &ListId, over_id: &ListId) -> Option<BoardState> {
    if active_id == over_id {
        return None;
    }
    let old_index = state.board().position_of(active_id)?;
    let new_index = state.board().position_of(over_id)?;
    let mut next = state.clone();
    relocate(&mut next.board_mut().list_ids, old_index, new_index);
    Some(next)
}

fn move_card(
    state: &BoardState,
    card_id: &CardId,
    from_list_id: &ListId,
    to_list_id: &ListId,
    over_card_id: Option<&CardId>,
) -> Option<BoardState> {
    let from_list = state.list(from_list_id)?;
    let to_list = state.list(to_list_id)?;
    let source_index = from_list.position_of(card_id)?;

    if from_list_id == to_list_id {
        let mut reordered = from_list.card_ids.clone();
        reordered.remove(source_index);
        let destination_index = insertion_index(&reordered, over_card_id);
        let already_last = source_index == reordered.len();
        if destination_index == source_index
            || (destination_index == reordered.len() && already_last)
        {
            return None;
        }
        reordered.insert(destination_index, card_id.clone());

        let mut next = state.clone();
        next.list_mut(from_list_id)?.card_ids = reordered;
        return Some(next);
    }

    if to_list.contains(card_id) {
        return None;
    }

    let mut source_cards = from_list.card_ids.clone();
    source_cards.remove(source_index);

    let mut destination_cards = to_list.card_ids.clone();
    let destination_index = insertion_index(&destination_cards, over_card_id);
    destination_cards.insert(destination_index, card_id.clone());

    let mut next = state.clone();
    next.list_mut(from_list_id)?.card_ids = source_cards;
    next.list_mut(to_list_id)?.card_ids = destination_cards;
    Some(next)
}

fn add_comment(state: &BoardState, card_id: &CardId, comment: Comment) -> Option<BoardState> {
    let card = state.card(card_id)?;
    if card.comments.iter().any(|existing| existing.id == comment.id) {
        return None;
    }
    let mut next = state.clone();
    next.card_mut(card_id)?.comments.insert(0, comment);
    Some(next)
}

/// Resolves where a card lands in `card_ids`.
///
/// `card_ids` must already exclude the moving card. The card is inserted in
/// front of `over_card_id`, or appended when `over_card_id` is absent or not
/// in the sequence.
#[must_use]
pub fn insertion_index(card_ids: &[CardId], over_card_id: Option<&CardId>) -> usize {
    over_card_id
        .and_then(|over| card_ids.iter().position(|id| id == over))
        .unwrap_or(card_ids.len())
}

/// Moves the element at `from` to `to`, keeping the relative order of all
/// other elements. Out-of-range indices leave `items` untouched.
fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
