use async_trait::async_trait;
use kanban_core::KanbanResult;
use kanban_domain::{ActivityLogEntry, BoardId, CardId, ListId, UserId};

use crate::events::EventBus;

/// Hub method telling the server this client is leaving the board.
pub const LEAVE_BOARD: &str = "LeaveBoard";

/// Transport-level state reported by the hub client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

/// Push events delivered over the real-time channel.
///
/// The hub broadcasts to every participant, the sender included.
#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
    CardMoved {
        card_id: CardId,
        list_id: ListId,
        position: i32,
        origin_user_id: UserId,
    },
    BoardLogged(ActivityLogEntry),
    /// The transport changed state on its own (reconnecting, reconnected, closed).
    StateChanged(HubState),
}

/// Persistent real-time channel to the board hub.
///
/// Framing, wire encoding, and automatic reconnection are the
/// implementation's concern. Inbound events are published to the
/// [`EventBus`] handed to `start`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HubClient: Send + Sync {
    async fn start(&self, board_id: BoardId, user_id: &str, events: EventBus) -> KanbanResult<()>;

    async fn stop(&self) -> KanbanResult<()>;

    async fn invoke(&self, method: &str, board_id: BoardId) -> KanbanResult<()>;

    fn state(&self) -> HubState;
}
