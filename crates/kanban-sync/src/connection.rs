//! Lifecycle of the real-time channel for one board view.
//!
//! ```text
//! Disconnected --connect--> Connecting --ok--> Connected
//!                               |                  |
//!                               +--err--> Disconnected <--disconnect--+
//! ```
//!
//! Reconnection is the hub client's job; the manager only mirrors the
//! latest state it reports.

use kanban_core::KanbanResult;
use kanban_domain::{BoardId, UserId};
use std::sync::Arc;
use tokio::sync::watch;

use crate::events::EventBus;
use crate::hub::{HubClient, HubState, LEAVE_BOARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

impl From<HubState> for ConnectionState {
    fn from(state: HubState) -> Self {
        match state {
            HubState::Disconnected => Self::Disconnected,
            HubState::Connecting | HubState::Reconnecting => Self::Connecting,
            HubState::Connected => Self::Connected,
        }
    }
}

pub struct ConnectionManager {
    hub: Arc<dyn HubClient>,
    board_id: BoardId,
    user_id: UserId,
    state: watch::Sender<ConnectionState>,
}

impl ConnectionManager {
    pub fn new(hub: Arc<dyn HubClient>, board_id: BoardId, user_id: UserId) -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            hub,
            board_id,
            user_id,
            state,
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Open the channel. A no-op while already connecting or connected.
    ///
    /// A `disconnect` issued while the hub is still starting wins: the state
    /// stays `Disconnected` and the late start is stopped again.
    pub async fn connect(&self, events: EventBus) -> KanbanResult<()> {
        let claimed = self.state.send_if_modified(|state| {
            if *state == ConnectionState::Disconnected {
                *state = ConnectionState::Connecting;
                true
            } else {
                false
            }
        });
        if !claimed {
            tracing::debug!(board_id = %self.board_id, "Connect ignored, channel already {:?}", self.state());
            return Ok(());
        }

        match self.hub.start(self.board_id, &self.user_id, events).await {
            Ok(()) => {
                let mut still_wanted = false;
                self.state.send_if_modified(|state| {
                    if *state == ConnectionState::Disconnected {
                        return false;
                    }
                    still_wanted = true;
                    let changed = *state != ConnectionState::Connected;
                    *state = ConnectionState::Connected;
                    changed
                });
                if still_wanted {
                    tracing::info!(board_id = %self.board_id, "Board channel connected");
                    return Ok(());
                }
                // Disconnected while starting; close what the hub just opened.
                tracing::debug!(board_id = %self.board_id, "Board channel started after disconnect, stopping");
                self.hub.stop().await
            }
            Err(e) => {
                self.state.send_replace(ConnectionState::Disconnected);
                tracing::warn!(board_id = %self.board_id, "Board channel connection failed: {}", e);
                Err(e)
            }
        }
    }

    /// Tell the server this client is leaving. Skipped unless connected.
    pub async fn leave_board(&self) -> KanbanResult<()> {
        if !self.is_connected() {
            return Ok(());
        }
        self.hub.invoke(LEAVE_BOARD, self.board_id).await
    }

    /// Close the channel, announcing the departure first when connected.
    pub async fn disconnect(&self) -> KanbanResult<()> {
        if self.state() == ConnectionState::Disconnected {
            return Ok(());
        }

        if let Err(e) = self.leave_board().await {
            tracing::warn!(board_id = %self.board_id, "LeaveBoard failed: {}", e);
        }

        let result = self.hub.stop().await;
        self.state.send_replace(ConnectionState::Disconnected);
        match &result {
            Ok(()) => tracing::info!(board_id = %self.board_id, "Board channel disconnected"),
            Err(e) => tracing::warn!(board_id = %self.board_id, "Board channel stop failed: {}", e),
        }
        result
    }

    /// Record a state change reported by the hub client.
    ///
    /// Reports arriving after a local disconnect are ignored unless they
    /// confirm the disconnect.
    pub fn observe(&self, hub_state: HubState) {
        let next = ConnectionState::from(hub_state);
        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            if *state == ConnectionState::Disconnected {
                return false;
            }
            tracing::info!("Board channel state {:?} -> {:?}", *state, next);
            *state = next;
            true
        });
    }
}
