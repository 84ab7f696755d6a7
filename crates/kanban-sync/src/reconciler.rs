//! Merges push events from other clients into the local board view.
//!
//! Events are applied in arrival order with no reordering buffer. Moves are
//! resolved by card identifier, so a remote move that repeats the local
//! state is harmless.

use kanban_domain::UserId;

use crate::activity::ActivityLogStream;
use crate::hub::HubEvent;
use crate::store::BoardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// A remote move was applied to the store.
    Moved,
    /// The move originated here and is already reflected locally.
    SelfEcho,
    /// No board is loaded yet.
    NoBoard,
    LogPrepended,
    /// The log entry did not match the active search, or was already listed.
    LogFiltered,
    /// Not a board event.
    Ignored,
}

pub struct RemoteEventReconciler {
    store: BoardStore,
    activity: ActivityLogStream,
    local_user_id: UserId,
}

impl RemoteEventReconciler {
    pub fn new(store: BoardStore, activity: ActivityLogStream, local_user_id: UserId) -> Self {
        Self {
            store,
            activity,
            local_user_id,
        }
    }

    pub fn apply(&self, event: &HubEvent) -> Reconciliation {
        match event {
            HubEvent::CardMoved {
                card_id,
                list_id,
                position,
                origin_user_id,
            } => {
                if *origin_user_id == self.local_user_id {
                    tracing::debug!(%card_id, "Discarding self-originated card move");
                    return Reconciliation::SelfEcho;
                }
                if self.store.apply_remote_move(*card_id, *list_id, *position) {
                    tracing::debug!(%card_id, %list_id, position, origin = %origin_user_id, "Applied remote card move");
                    Reconciliation::Moved
                } else {
                    Reconciliation::NoBoard
                }
            }
            HubEvent::BoardLogged(entry) => {
                if self.activity.prepend_live(entry.clone()) {
                    Reconciliation::LogPrepended
                } else {
                    Reconciliation::LogFiltered
                }
            }
            HubEvent::StateChanged(_) => Reconciliation::Ignored,
        }
    }
}
