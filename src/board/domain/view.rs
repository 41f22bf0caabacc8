//! Read model handed to the rendering layer.

use super::{Board, BoardList, BoardState, Card, CardId};
use std::collections::BTreeMap;

/// A borrowed, render-ready projection of a [`BoardState`].
///
/// `lists` follows column order with dangling list ids filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    /// Board header.
    pub board: &'a Board,
    /// Lists in column order.
    pub lists: Vec<&'a BoardList>,
    /// Flat card lookup.
    pub cards_by_id: &'a BTreeMap<CardId, Card>,
}

impl<'a> BoardView<'a> {
    /// Projects `state`.
    #[must_use]
    pub fn new(state: &'a BoardState) -> Self {
        Self {
            board: state.board(),
            lists: state.ordered_lists().collect(),
            cards_by_id: state.cards(),
        }
    }

    /// Resolves the cards of `list` in order, skipping dangling ids.
    #[must_use]
    pub fn cards_of(&self, list: &BoardList) -> Vec<&'a Card> {
        list.card_ids
            .iter()
            .filter_map(|card_id| self.cards_by_id.get(card_id))
            .collect()
    }
}

impl<'a> From<&'a BoardState> for BoardView<'a> {
    fn from(state: &'a BoardState) -> Self {
        Self::new(state)
    }
}
