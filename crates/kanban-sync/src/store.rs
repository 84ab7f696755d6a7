use chrono::Utc;
use kanban_domain::{locate_card, move_card, Board, CardId, CardLocation, ListId};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

struct StoreInner {
    board: RwLock<Option<Board>>,
    revision: watch::Sender<u64>,
}

/// In-memory board tree for one board view.
///
/// Cheap to clone; clones share the same tree. Every change bumps a
/// revision counter that renderers can watch.
#[derive(Clone)]
pub struct BoardStore {
    inner: Arc<StoreInner>,
}

impl BoardStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                board: RwLock::new(None),
                revision,
            }),
        }
    }

    pub fn snapshot(&self) -> Option<Board> {
        self.inner.board.read().clone()
    }

    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> Option<R> {
        self.inner.board.read().as_ref().map(f)
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.board.read().is_some()
    }

    /// Replace the whole tree, as after a full-board fetch.
    pub fn replace(&self, mut board: Board) {
        board.normalize_members();
        *self.inner.board.write() = Some(board);
        self.bump();
    }

    pub fn clear(&self) {
        let had_board = self.inner.board.write().take().is_some();
        if had_board {
            self.bump();
        }
    }

    pub fn locate(&self, card_id: CardId) -> Option<CardLocation> {
        self.with_board(|b| locate_card(b, card_id)).flatten()
    }

    /// Index of `card_id` within `list_id`, if it is there.
    pub fn index_in_list(&self, card_id: CardId, list_id: ListId) -> Option<usize> {
        self.with_board(|b| b.list(list_id).and_then(|l| l.index_of(card_id)))
            .flatten()
    }

    /// Apply a card move. Returns false when nothing changed.
    pub fn apply_move(&self, card_id: CardId, target_list_id: ListId, target_position: i32) -> bool {
        let changed = {
            let mut guard = self.inner.board.write();
            let Some(board) = guard.as_mut() else {
                return false;
            };
            let moved = move_card(board, card_id, target_list_id, target_position);
            if moved == *board {
                false
            } else {
                *board = moved;
                true
            }
        };
        if changed {
            self.bump();
        }
        changed
    }

    /// Apply a move reported by another client and mark the board as updated now.
    ///
    /// Returns false when no board is loaded.
    pub fn apply_remote_move(
        &self,
        card_id: CardId,
        target_list_id: ListId,
        target_position: i32,
    ) -> bool {
        {
            let mut guard = self.inner.board.write();
            let Some(board) = guard.as_mut() else {
                return false;
            };
            let mut moved = move_card(board, card_id, target_list_id, target_position);
            moved.last_update = Utc::now();
            *board = moved;
        }
        self.bump();
        true
    }

    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    /// Receiver that wakes on every change to the tree.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    fn bump(&self) {
        self.inner.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::{Card, List};

    fn seeded() -> (BoardStore, ListId, ListId, CardId) {
        let mut board = Board::new("Board".to_string(), "owner".to_string());
        let mut a = List::new(board.id, "A".to_string(), 0);
        let b = List::new(board.id, "B".to_string(), 1);
        let card = Card::new(a.id, "C1".to_string(), None, 0);
        let card_id = card.id;
        a.cards.push(card);
        let (a_id, b_id) = (a.id, b.id);
        board.lists = vec![a, b];

        let store = BoardStore::new();
        store.replace(board);
        (store, a_id, b_id, card_id)
    }

    #[test]
    fn test_empty_store() {
        let store = BoardStore::new();
        assert!(!store.is_loaded());
        assert!(!store.apply_move(uuid::Uuid::new_v4(), uuid::Uuid::new_v4(), 0));
        assert!(!store.apply_remote_move(uuid::Uuid::new_v4(), uuid::Uuid::new_v4(), 0));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_apply_move_bumps_revision() {
        let (store, _, b, card) = seeded();
        let before = store.revision();

        assert!(store.apply_move(card, b, 0));
        assert_eq!(store.revision(), before + 1);
        assert_eq!(store.index_in_list(card, b), Some(0));

        assert!(!store.apply_move(card, b, 0));
        assert_eq!(store.revision(), before + 1);
    }

    #[test]
    fn test_replace_normalizes_members() {
        let store = BoardStore::new();
        let mut board = Board::new("Board".to_string(), "owner".to_string());
        board.member_ids = vec!["owner".to_string(), "alice".to_string()];
        store.replace(board);
        let members = store.with_board(|b| b.member_ids.clone()).unwrap();
        assert_eq!(members, vec!["alice".to_string()]);
    }

    #[test]
    fn test_remote_move_touches_last_update() {
        let (store, _, b, card) = seeded();
        let before = store.with_board(|b| b.last_update).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));

        assert!(store.apply_remote_move(card, b, 0));
        let after = store.with_board(|b| b.last_update).unwrap();
        assert!(after > before);
        assert_eq!(store.locate(card).unwrap().list_id, b);
    }

    #[tokio::test]
    async fn test_subscribers_wake_on_change() {
        let (store, _, b, card) = seeded();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.apply_move(card, b, 0);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), store.revision());
    }

    #[test]
    fn test_clear() {
        let (store, ..) = seeded();
        store.clear();
        assert!(store.snapshot().is_none());
    }
}
