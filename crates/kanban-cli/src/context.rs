use async_trait::async_trait;
use kanban_core::{KanbanError, KanbanResult, SyncConfig};
use kanban_domain::{BoardId, UserId};
use kanban_sync::{BoardSession, Dashboard, EventBus, HubClient, HubState, NotificationCenter};
use std::sync::Arc;

use crate::http::HttpBoardApi;

/// One-shot commands never open the real-time channel.
struct DetachedHub;

#[async_trait]
impl HubClient for DetachedHub {
    async fn start(&self, _board_id: BoardId, _user_id: &str, _events: EventBus) -> KanbanResult<()> {
        Err(KanbanError::Connection(
            "real-time updates are not available from the command line".to_string(),
        ))
    }

    async fn stop(&self) -> KanbanResult<()> {
        Ok(())
    }

    async fn invoke(&self, _method: &str, _board_id: BoardId) -> KanbanResult<()> {
        Ok(())
    }

    fn state(&self) -> HubState {
        HubState::Disconnected
    }
}

pub struct CliContext {
    pub user_id: UserId,
    pub config: SyncConfig,
    api: Arc<HttpBoardApi>,
}

impl CliContext {
    pub fn new(user_id: UserId, config: SyncConfig) -> KanbanResult<Self> {
        let api = Arc::new(HttpBoardApi::new(&config)?);
        Ok(Self {
            user_id,
            config,
            api,
        })
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            self.api.clone(),
            self.user_id.clone(),
            NotificationCenter::new(),
        )
    }

    /// Session for `board_id` with the board already fetched.
    pub async fn session(&self, board_id: BoardId) -> KanbanResult<BoardSession> {
        let session = BoardSession::new(
            board_id,
            self.user_id.clone(),
            self.api.clone(),
            Arc::new(DetachedHub),
            &self.config,
        );
        session.reload().await?;
        Ok(session)
    }

    /// Session without a fetched board, for commands that only read the log.
    pub fn detached_session(&self, board_id: BoardId) -> BoardSession {
        BoardSession::new(
            board_id,
            self.user_id.clone(),
            self.api.clone(),
            Arc::new(DetachedHub),
            &self.config,
        )
    }
}
