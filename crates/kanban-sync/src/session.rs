//! One board view: store, channel, mover, reconciler, and activity log.
//!
//! Created on navigation to a board and torn down on navigation away. The
//! channel must be torn down before a session for another board mounts.

use kanban_core::{KanbanError, KanbanResult, SyncConfig};
use kanban_domain::{
    AddMemberRequest, Board, BoardId, CardId, CreateCardRequest, CreateListRequest, ListId,
    RenameListRequest, UpdateCardRequest, UserId,
};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, Mutex};

use crate::activity::ActivityLogStream;
use crate::api::BoardApi;
use crate::connection::ConnectionManager;
use crate::events::EventBus;
use crate::hub::{HubClient, HubEvent};
use crate::mover::OptimisticMover;
use crate::notifications::NotificationCenter;
use crate::reconciler::{Reconciliation, RemoteEventReconciler};
use crate::store::BoardStore;

pub struct BoardSession {
    board_id: BoardId,
    user_id: UserId,
    api: Arc<dyn BoardApi>,
    store: BoardStore,
    events: EventBus,
    inbox: Mutex<broadcast::Receiver<HubEvent>>,
    connection: ConnectionManager,
    mover: OptimisticMover,
    reconciler: RemoteEventReconciler,
    activity: ActivityLogStream,
    notifications: NotificationCenter,
}

impl BoardSession {
    pub fn new(
        board_id: BoardId,
        user_id: UserId,
        api: Arc<dyn BoardApi>,
        hub: Arc<dyn HubClient>,
        config: &SyncConfig,
    ) -> Self {
        let notifications = NotificationCenter::new();
        let store = BoardStore::new();
        let events = EventBus::new(config.event_buffer);
        let inbox = Mutex::new(events.subscribe());
        let activity = ActivityLogStream::new(
            api.clone(),
            notifications.clone(),
            board_id,
            user_id.clone(),
            config,
        );

        Self {
            board_id,
            user_id: user_id.clone(),
            connection: ConnectionManager::new(hub, board_id, user_id.clone()),
            mover: OptimisticMover::new(
                store.clone(),
                api.clone(),
                notifications.clone(),
                board_id,
                user_id.clone(),
            ),
            reconciler: RemoteEventReconciler::new(store.clone(), activity.clone(), user_id),
            api,
            store,
            events,
            inbox,
            activity,
            notifications,
        }
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn board(&self) -> Option<Board> {
        self.store.snapshot()
    }

    pub fn connection(&self) -> &ConnectionManager {
        &self.connection
    }

    pub fn mover(&self) -> &OptimisticMover {
        &self.mover
    }

    pub fn activity(&self) -> &ActivityLogStream {
        &self.activity
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Connect the channel, hydrate the board, and load the first log page.
    ///
    /// A failed connection is reported and the view carries on offline.
    pub async fn mount(&self) -> KanbanResult<()> {
        if let Err(e) = self.connection.connect(self.events.clone()).await {
            self.notifications.report(&e);
        }
        self.reload().await?;
        self.activity.load(1, true, None).await;
        Ok(())
    }

    /// Replace the store with a fresh copy of the board.
    pub async fn reload(&self) -> KanbanResult<()> {
        let board = self
            .notifications
            .run(self.api.board(self.board_id, &self.user_id))
            .await?;
        self.store.replace(board);
        Ok(())
    }

    /// Wait for the next push event and reconcile it.
    ///
    /// Returns `None` once the bus is closed. If the inbox overflowed the
    /// board is reloaded, since skipped moves cannot be replayed.
    pub async fn pump(&self) -> Option<Reconciliation> {
        loop {
            let received = self.inbox.lock().await.recv().await;
            match received {
                Ok(event) => return Some(self.handle_event(&event)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Board event inbox overflowed, reloading board");
                    if let Err(e) = self.reload().await {
                        tracing::warn!(board_id = %self.board_id, "Reload after inbox overflow failed: {}", e);
                    }
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Reconcile every event already queued, without waiting.
    pub fn drain_pending(&self) -> Vec<Reconciliation> {
        let mut applied = Vec::new();
        let Ok(mut inbox) = self.inbox.try_lock() else {
            return applied;
        };
        while let Ok(event) = inbox.try_recv() {
            applied.push(self.handle_event(&event));
        }
        applied
    }

    pub fn handle_event(&self, event: &HubEvent) -> Reconciliation {
        match event {
            HubEvent::StateChanged(state) => {
                self.connection.observe(*state);
                Reconciliation::Ignored
            }
            _ => self.reconciler.apply(event),
        }
    }

    pub async fn create_list(&self, name: &str) -> KanbanResult<()> {
        let request = self.notifications.check(CreateListRequest::new(name))?;
        self.notifications
            .run(self.api.create_list(self.board_id, &request, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn rename_list(&self, list_id: ListId, name: &str) -> KanbanResult<()> {
        let request = self.notifications.check(RenameListRequest::new(name))?;
        self.notifications
            .run(self.api.rename_list(self.board_id, list_id, &request, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn delete_list(&self, list_id: ListId) -> KanbanResult<()> {
        self.notifications
            .run(self.api.delete_list(self.board_id, list_id, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn create_card(
        &self,
        list_id: ListId,
        title: &str,
        description: Option<&str>,
    ) -> KanbanResult<()> {
        let request = self
            .notifications
            .check(CreateCardRequest::new(title, description))?;
        self.notifications
            .run(self.api.create_card(self.board_id, list_id, &request, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn update_card(
        &self,
        card_id: CardId,
        title: &str,
        description: Option<&str>,
    ) -> KanbanResult<()> {
        let request = self
            .notifications
            .check(UpdateCardRequest::new(title, description))?;
        self.notifications
            .run(self.api.update_card(self.board_id, card_id, &request, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn delete_card(&self, card_id: CardId) -> KanbanResult<()> {
        self.notifications
            .run(self.api.delete_card(self.board_id, card_id, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn add_member(&self, member_id: &str) -> KanbanResult<()> {
        let request = self.notifications.check(AddMemberRequest::new(member_id))?;
        let permitted = self
            .loaded_board()
            .and_then(|b| b.check_add_member(&request.user_id));
        self.notifications.check(permitted)?;
        self.notifications
            .run(self.api.add_member(self.board_id, &request, &self.user_id))
            .await?;
        self.reload().await
    }

    pub async fn remove_member(&self, member_id: &str) -> KanbanResult<()> {
        let permitted = self
            .loaded_board()
            .and_then(|b| b.check_remove_member(&self.user_id, member_id));
        self.notifications.check(permitted)?;
        self.notifications
            .run(self.api.remove_member(self.board_id, member_id, &self.user_id))
            .await?;
        self.reload().await
    }

    /// Send the explicit "leave board" notification on the channel.
    pub async fn announce_leave(&self) -> KanbanResult<()> {
        self.notifications.run(self.connection.leave_board()).await
    }

    /// Leave the board as a non-owner member and tear the view down.
    pub async fn leave_board(&self) -> KanbanResult<()> {
        let permitted = self
            .loaded_board()
            .and_then(|b| b.check_remove_member(&self.user_id, &self.user_id));
        self.notifications.check(permitted)?;
        if let Err(e) = self.connection.leave_board().await {
            tracing::warn!("LeaveBoard failed: {}", e);
        }
        self.notifications
            .run(self.api.remove_member(self.board_id, &self.user_id, &self.user_id))
            .await?;
        self.teardown().await;
        Ok(())
    }

    /// Delete the board (owner only) and tear the view down.
    pub async fn delete_board(&self) -> KanbanResult<()> {
        let permitted = self.loaded_board().and_then(|b| {
            if b.is_owner(&self.user_id) {
                Ok(())
            } else {
                Err(KanbanError::AccessDenied(
                    "Only the board owner can delete the board".to_string(),
                ))
            }
        });
        self.notifications.check(permitted)?;
        self.notifications
            .run(self.api.delete_board(self.board_id, &self.user_id))
            .await?;
        self.teardown().await;
        Ok(())
    }

    /// Disconnect the channel (announcing departure first) and drop the board.
    pub async fn teardown(&self) {
        if let Err(e) = self.connection.disconnect().await {
            tracing::warn!(board_id = %self.board_id, "Channel teardown failed: {}", e);
        }
        self.store.clear();
    }

    fn loaded_board(&self) -> KanbanResult<Board> {
        self.store
            .snapshot()
            .ok_or_else(|| KanbanError::NotFound(format!("Board {} is not loaded", self.board_id)))
    }
}
