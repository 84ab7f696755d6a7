//! Optimistic card moves from drag-and-drop.
//!
//! The store is updated before the move request goes out. A failed request
//! is reported but not rolled back; reloading the board is the recovery
//! path.

use kanban_domain::{BoardId, CardId, DragGesture, ListId, MoveCardRequest, UserId};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::api::BoardApi;
use crate::notifications::NotificationCenter;
use crate::store::BoardStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped where it was picked up; nothing sent.
    Skipped,
    /// Drop with no drag in progress.
    NoGesture,
    /// Applied locally and confirmed by the server.
    Confirmed,
    /// Applied locally; the server rejected it. Holds the reported message.
    Failed(String),
}

pub struct OptimisticMover {
    store: BoardStore,
    api: Arc<dyn BoardApi>,
    notifications: NotificationCenter,
    board_id: BoardId,
    user_id: UserId,
    gesture: Mutex<Option<DragGesture>>,
}

impl OptimisticMover {
    pub fn new(
        store: BoardStore,
        api: Arc<dyn BoardApi>,
        notifications: NotificationCenter,
        board_id: BoardId,
        user_id: UserId,
    ) -> Self {
        Self {
            store,
            api,
            notifications,
            board_id,
            user_id,
            gesture: Mutex::new(None),
        }
    }

    pub fn drag_start(&self, card_id: CardId, source_list_id: ListId) {
        *self.gesture.lock() = Some(DragGesture::new(card_id, source_list_id));
    }

    /// Abandon the gesture without dropping.
    pub fn drag_end(&self) {
        self.gesture.lock().take();
    }

    pub fn gesture(&self) -> Option<DragGesture> {
        *self.gesture.lock()
    }

    /// Finish the current drag onto `target_list_id` at `target_index`.
    ///
    /// The gesture is cleared whatever the outcome.
    pub async fn drop_on(&self, target_list_id: ListId, target_index: usize) -> MoveOutcome {
        let Some(gesture) = self.gesture.lock().take() else {
            return MoveOutcome::NoGesture;
        };
        self.move_card(
            gesture.card_id,
            gesture.source_list_id,
            target_list_id,
            target_index,
        )
        .await
    }

    /// Move a card optimistically and ask the server to do the same.
    pub async fn move_card(
        &self,
        card_id: CardId,
        source_list_id: ListId,
        target_list_id: ListId,
        target_index: usize,
    ) -> MoveOutcome {
        let current_index = self.store.index_in_list(card_id, source_list_id);
        if source_list_id == target_list_id && current_index == Some(target_index) {
            tracing::debug!(%card_id, "Drop at original position, nothing to move");
            return MoveOutcome::Skipped;
        }

        let target_position = i32::try_from(target_index).unwrap_or(-1);
        self.store.apply_move(card_id, target_list_id, target_position);

        let request = MoveCardRequest {
            target_list_id,
            target_position,
        };
        match self
            .api
            .move_card(self.board_id, card_id, &request, &self.user_id)
            .await
        {
            Ok(()) => MoveOutcome::Confirmed,
            Err(e) => {
                self.notifications.report(&e);
                MoveOutcome::Failed(e.user_message())
            }
        }
    }
}
