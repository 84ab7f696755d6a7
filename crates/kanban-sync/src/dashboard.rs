use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{Board, BoardId, CreateBoardRequest, UserId};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::BoardApi;
use crate::notifications::NotificationCenter;

/// The boards a user owns or belongs to.
pub struct Dashboard {
    api: Arc<dyn BoardApi>,
    user_id: UserId,
    notifications: NotificationCenter,
    boards: RwLock<Vec<Board>>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn BoardApi>, user_id: UserId, notifications: NotificationCenter) -> Self {
        Self {
            api,
            user_id,
            notifications,
            boards: RwLock::new(Vec::new()),
        }
    }

    pub fn boards(&self) -> Vec<Board> {
        self.boards.read().clone()
    }

    pub fn owned(&self) -> Vec<Board> {
        self.boards
            .read()
            .iter()
            .filter(|b| b.is_owner(&self.user_id))
            .cloned()
            .collect()
    }

    pub async fn load_boards(&self) -> KanbanResult<Vec<Board>> {
        let mut boards = self
            .notifications
            .run(self.api.user_boards(&self.user_id))
            .await?;
        for board in &mut boards {
            board.normalize_members();
        }
        tracing::debug!(count = boards.len(), "Loaded boards");
        *self.boards.write() = boards.clone();
        Ok(boards)
    }

    pub async fn create_board(&self, name: &str) -> KanbanResult<()> {
        let request = self
            .notifications
            .check(CreateBoardRequest::new(name, &self.user_id))?;
        self.notifications
            .run(self.api.create_board(&request))
            .await?;
        self.notifications
            .show_success("Board created", &format!("Created board \"{}\"", request.name));
        self.load_boards().await.map(|_| ())
    }

    /// Delete a board. Only its owner may do this.
    pub async fn delete_board(&self, board_id: BoardId) -> KanbanResult<()> {
        let owned = self
            .boards
            .read()
            .iter()
            .find(|b| b.id == board_id)
            .map(|b| b.is_owner(&self.user_id));
        if owned == Some(false) {
            let error = KanbanError::AccessDenied(
                "Only the board owner can delete the board".to_string(),
            );
            self.notifications.report(&error);
            return Err(error);
        }
        self.notifications
            .run(self.api.delete_board(board_id, &self.user_id))
            .await?;
        self.boards.write().retain(|b| b.id != board_id);
        Ok(())
    }
}
