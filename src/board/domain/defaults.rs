//! Built-in board used when no valid persisted snapshot exists.

use super::{Board, BoardId, BoardList, BoardState, Card, CardId, ListId};

const SEED_LISTS: [(&str, &str, &[(&str, &str)]); 3] = [
    (
        "b1l1",
        "Todo",
        &[
            ("b1l1c1", "Create interview Kanban"),
            ("b1l1c2", "Review Drag & Drop"),
        ],
    ),
    ("b1l2", "In Progress", &[("b1l2c1", "Set up Next.js project")]),
    ("b1l3", "Done", &[]),
];

/// Returns the seed board: three lists, three cards, no comments.
#[must_use]
pub fn default_board_state() -> BoardState {
    let mut board = Board::new(BoardId::new("b1"), "Demo Board", "#2E7EAF");
    let mut lists = Vec::with_capacity(SEED_LISTS.len());
    let mut cards = Vec::new();

    for (list_id, list_title, seed_cards) in SEED_LISTS {
        let mut list = BoardList::new(ListId::new(list_id), list_title);
        for (card_id, card_title) in seed_cards {
            list.card_ids.push(CardId::new(*card_id));
            cards.push(Card::new(CardId::new(*card_id), *card_title));
        }
        board.list_ids.push(list.id.clone());
        lists.push(list);
    }

    BoardState::from_parts(board, lists, cards)
}
