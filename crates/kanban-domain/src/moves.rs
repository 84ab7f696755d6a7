//! Pure card-move transform over a board tree.
//!
//! A move is resolved by card identifier on every call, so replaying the same
//! move, or applying a remote copy of a move already applied locally, lands
//! the card at the same place.

use crate::board::Board;
use crate::card::CardId;
use crate::list::ListId;

/// Where a card currently sits in a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    pub list_index: usize,
    pub list_id: ListId,
    pub card_index: usize,
}

/// Find a card by scanning every list in order. First match wins.
pub fn locate_card(board: &Board, card_id: CardId) -> Option<CardLocation> {
    board.lists.iter().enumerate().find_map(|(list_index, list)| {
        list.index_of(card_id).map(|card_index| CardLocation {
            list_index,
            list_id: list.id,
            card_index,
        })
    })
}

/// Map a requested position onto a list of `len` cards.
///
/// Negative or out-of-range positions append.
pub fn resolve_target_index(target_position: i32, len: usize) -> usize {
    match usize::try_from(target_position) {
        Ok(idx) if idx < len => idx,
        _ => len,
    }
}

/// Move `card_id` into `target_list_id` at `target_position`.
///
/// Returns the board unchanged when the card or the target list is unknown.
/// The card is never copied: it is removed from its source list before being
/// inserted, and the insertion index is computed against the target list
/// after that removal.
pub fn move_card(
    board: &Board,
    card_id: CardId,
    target_list_id: ListId,
    target_position: i32,
) -> Board {
    let Some(location) = locate_card(board, card_id) else {
        return board.clone();
    };
    let Some(target_index) = board.lists.iter().position(|l| l.id == target_list_id) else {
        return board.clone();
    };

    let mut next = board.clone();
    let mut card = next.lists[location.list_index]
        .cards
        .remove(location.card_index);
    card.list_id = target_list_id;

    let target = &mut next.lists[target_index];
    let insert_at = resolve_target_index(target_position, target.cards.len());
    target.cards.insert(insert_at, card);
    target.reindex();

    if location.list_index != target_index {
        next.lists[location.list_index].reindex();
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::list::List;
    use std::collections::HashSet;

    struct Fixture {
        board: Board,
        list_a: ListId,
        list_b: ListId,
        c1: CardId,
        c2: CardId,
        c3: CardId,
    }

    fn fixture() -> Fixture {
        let mut board = Board::new("Board".to_string(), "owner".to_string());
        let mut a = List::new(board.id, "A".to_string(), 0);
        let mut b = List::new(board.id, "B".to_string(), 1);
        let c1 = Card::new(a.id, "C1".to_string(), None, 0);
        let c2 = Card::new(a.id, "C2".to_string(), None, 1);
        let c3 = Card::new(b.id, "C3".to_string(), None, 0);
        let ids = (c1.id, c2.id, c3.id);
        a.cards = vec![c1, c2];
        b.cards = vec![c3];
        let (list_a, list_b) = (a.id, b.id);
        board.lists = vec![a, b];
        Fixture {
            board,
            list_a,
            list_b,
            c1: ids.0,
            c2: ids.1,
            c3: ids.2,
        }
    }

    fn titles(board: &Board, list_id: ListId) -> Vec<String> {
        board
            .list(list_id)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    fn all_ids(board: &Board) -> Vec<CardId> {
        board
            .lists
            .iter()
            .flat_map(|l| l.cards.iter().map(|c| c.id))
            .collect()
    }

    #[test]
    fn test_move_across_lists() {
        let f = fixture();
        let moved = move_card(&f.board, f.c1, f.list_b, 1);

        assert_eq!(titles(&moved, f.list_a), vec!["C2"]);
        assert_eq!(titles(&moved, f.list_b), vec!["C3", "C1"]);
        let c1 = moved.card(f.c1).unwrap();
        assert_eq!(c1.list_id, f.list_b);
        assert_eq!(c1.position, 1);
    }

    #[test]
    fn test_move_within_list() {
        let f = fixture();
        let moved = move_card(&f.board, f.c1, f.list_a, 1);
        assert_eq!(titles(&moved, f.list_a), vec!["C2", "C1"]);
    }

    #[test]
    fn test_negative_position_appends() {
        let f = fixture();
        let moved = move_card(&f.board, f.c2, f.list_b, -1);
        assert_eq!(titles(&moved, f.list_b), vec!["C3", "C2"]);
    }

    #[test]
    fn test_oversized_position_appends() {
        let f = fixture();
        let moved = move_card(&f.board, f.c3, f.list_a, 99);
        assert_eq!(titles(&moved, f.list_a), vec!["C1", "C2", "C3"]);
        assert!(moved.list(f.list_b).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_card_is_noop() {
        let f = fixture();
        let moved = move_card(&f.board, uuid::Uuid::new_v4(), f.list_b, 0);
        assert_eq!(moved, f.board);
    }

    #[test]
    fn test_unknown_target_list_keeps_card() {
        let f = fixture();
        let moved = move_card(&f.board, f.c1, uuid::Uuid::new_v4(), 0);
        assert_eq!(moved, f.board);
    }

    #[test]
    fn test_replay_is_idempotent() {
        let f = fixture();
        let once = move_card(&f.board, f.c1, f.list_b, 0);
        let twice = move_card(&once, f.c1, f.list_b, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_move_preserves_cardinality() {
        let f = fixture();
        let cards = [f.c1, f.c2, f.c3];
        let lists = [f.list_a, f.list_b];
        let expected: HashSet<CardId> = cards.iter().copied().collect();

        for card in cards {
            for list in lists {
                for pos in -1..4 {
                    let moved = move_card(&f.board, card, list, pos);
                    let ids = all_ids(&moved);
                    assert_eq!(ids.len(), 3, "card count changed");
                    assert_eq!(ids.iter().copied().collect::<HashSet<_>>(), expected);

                    let location = locate_card(&moved, card).unwrap();
                    assert_eq!(location.list_id, list);
                    let len = moved.lists[location.list_index].len();
                    let expected_index = if pos < 0 || pos as usize >= len {
                        len - 1
                    } else {
                        pos as usize
                    };
                    assert_eq!(location.card_index, expected_index);
                }
            }
        }
    }

    #[test]
    fn test_resolve_target_index() {
        assert_eq!(resolve_target_index(-1, 3), 3);
        assert_eq!(resolve_target_index(0, 0), 0);
        assert_eq!(resolve_target_index(2, 3), 2);
        assert_eq!(resolve_target_index(3, 3), 3);
    }
}
