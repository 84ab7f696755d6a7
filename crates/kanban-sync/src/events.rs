use tokio::sync::broadcast;

use crate::hub::HubEvent;

/// Typed publish/subscribe channel scoped to one board view.
///
/// The hub publishes into it and the session consumes from it. Dropping the
/// session drops the last receiver, so nothing keeps delivering to a board
/// view that no longer exists.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<HubEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event, returning how many subscribers will see it.
    pub fn publish(&self, event: HubEvent) -> usize {
        match self.tx.send(event) {
            Ok(count) => count,
            Err(_) => {
                tracing::debug!("Dropped hub event with no subscribers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HubEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
