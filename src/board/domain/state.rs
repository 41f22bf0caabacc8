//! The `BoardState` aggregate root.

use super::{Board, BoardList, Card, CardId, IntegrityViolation, ListId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One immutable snapshot of the whole board.
///
/// `BoardState` is the single unit of persistence and the argument and result
/// type of [`super::apply`]. Snapshots are plain values: a snapshot handed to
/// an observer is never mutated afterwards, because every transition works on
/// a fresh clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    lists: BTreeMap<ListId, BoardList>,
    cards: BTreeMap<CardId, Card>,
}

impl BoardState {
    /// Creates a snapshot holding `board` and no lists or cards.
    ///
    /// Any ids already present in `board.list_ids` are dropped so the
    /// snapshot starts out consistent.
    #[must_use]
    pub fn new(mut board: Board) -> Self {
        board.list_ids.clear();
        Self {
            board,
            lists: BTreeMap::new(),
            cards: BTreeMap::new(),
        }
    }

    /// Assembles a snapshot from its parts without checking integrity.
    ///
    /// Lists and cards are keyed by their own ids. Use
    /// [`Self::integrity_violations`] to inspect the result.
    #[must_use]
    pub fn from_parts(
        board: Board,
        lists: impl IntoIterator<Item = BoardList>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            board,
            lists: lists.into_iter().map(|list| (list.id.clone(), list)).collect(),
            cards: cards.into_iter().map(|card| (card.id.clone(), card)).collect(),
        }
    }

    /// Returns the board header.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns every list keyed by id, in id order.
    #[must_use]
    pub const fn lists(&self) -> &BTreeMap<ListId, BoardList> {
        &self.lists
    }

    /// Returns every card keyed by id.
    #[must_use]
    pub const fn cards(&self) -> &BTreeMap<CardId, Card> {
        &self.cards
    }

    /// Looks up a list.
    #[must_use]
    pub fn list(&self, list_id: &ListId) -> Option<&BoardList> {
        self.lists.get(list_id)
    }

    /// Looks up a card.
    #[must_use]
    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.get(card_id)
    }

    /// Returns the list whose `card_ids` holds `card_id`.
    #[must_use]
    pub fn list_containing(&self, card_id: &CardId) -> Option<&BoardList> {
        self.lists.values().find(|list| list.contains(card_id))
    }

    /// Returns the lists in column order, skipping dangling ids.
    pub fn ordered_lists(&self) -> impl Iterator<Item = &BoardList> {
        self.board
            .list_ids
            .iter()
            .filter_map(|list_id| self.lists.get(list_id))
    }

    /// Counts card references across all lists.
    #[must_use]
    pub fn placed_card_count(&self) -> usize {
        self.lists.values().map(|list| list.card_ids.len()).sum()
    }

    pub(super) const fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(super) fn list_mut(&mut self, list_id: &ListId) -> Option<&mut BoardList> {
        self.lists.get_mut(list_id)
    }

    pub(super) fn card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.cards.get_mut(card_id)
    }

    pub(super) fn insert_list(&mut self, list: BoardList) {
        self.board.list_ids.push(list.id.clone());
        self.lists.insert(list.id.clone(), list);
    }

    pub(super) fn take_list(&mut self, list_id: &ListId) -> Option<BoardList> {
        self.board.list_ids.retain(|id| id != list_id);
        self.lists.remove(list_id)
    }

    pub(super) fn insert_card(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    pub(super) fn remove_card(&mut self, card_id: &CardId) {
        self.cards.remove(card_id);
    }

    /// Reports every referential-integrity breach in the snapshot.
    ///
    /// An empty result means every listed id resolves, every card is placed in
    /// exactly one list, and map keys agree with entity ids.
    #[must_use]
    pub fn integrity_violations(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();
        let mut seen_lists = BTreeSet::new();

        for list_id in &self.board.list_ids {
            if !seen_lists.insert(list_id) {
                violations.push(IntegrityViolation::DuplicateListId(list_id.clone()));
            }
            if !self.lists.contains_key(list_id) {
                violations.push(IntegrityViolation::DanglingListId(list_id.clone()));
            }
        }

        let mut placements: BTreeMap<&CardId, usize> = BTreeMap::new();
        for (key, list) in &self.lists {
            if key != &list.id {
                violations.push(IntegrityViolation::MismatchedListKey(key.clone()));
            }
            if !seen_lists.contains(key) {
                violations.push(IntegrityViolation::OrphanedList(key.clone()));
            }
            for card_id in &list.card_ids {
                *placements.entry(card_id).or_default() += 1;
                if !self.cards.contains_key(card_id) {
                    violations.push(IntegrityViolation::DanglingCardId {
                        list_id: key.clone(),
                        card_id: card_id.clone(),
                    });
                }
            }
        }

        for (card_id, count) in &placements {
            if *count > 1 {
                violations.push(IntegrityViolation::CardPlacedMoreThanOnce((*card_id).clone()));
            }
        }

        for (key, card) in &self.cards {
            if key != &card.id {
                violations.push(IntegrityViolation::MismatchedCardKey(key.clone()));
            }
            if !placements.contains_key(key) {
                violations.push(IntegrityViolation::OrphanedCard(key.clone()));
            }
        }

        violations
    }
}
