//! Transient user-facing notifications.
//!
//! Request failures are caught at the call boundary and land here instead
//! of propagating into rendering code.

use chrono::{DateTime, Utc};
use kanban_core::{KanbanError, KanbanResult};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn default_duration(self) -> Duration {
        match self {
            Self::Error => Duration::from_millis(6000),
            Self::Success => Duration::from_millis(4000),
            Self::Warning => Duration::from_millis(5000),
            Self::Info => Duration::from_millis(4000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration: Duration,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        chrono::Duration::from_std(self.duration)
            .map(|duration| now - self.created_at >= duration)
            .unwrap_or(false)
    }
}

#[derive(Clone)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<Notification>>>,
    tx: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(32);
        Self {
            active: Arc::new(Mutex::new(Vec::new())),
            tx,
        }
    }

    pub fn show(&self, kind: NotificationKind, title: &str, message: &str) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            duration: kind.default_duration(),
            created_at: Utc::now(),
        };
        let id = notification.id;
        self.active.lock().push(notification.clone());
        let _ = self.tx.send(notification);
        id
    }

    pub fn show_error(&self, title: &str, message: &str) -> Uuid {
        self.show(NotificationKind::Error, title, message)
    }

    pub fn show_success(&self, title: &str, message: &str) -> Uuid {
        self.show(NotificationKind::Success, title, message)
    }

    pub fn show_warning(&self, title: &str, message: &str) -> Uuid {
        self.show(NotificationKind::Warning, title, message)
    }

    pub fn show_info(&self, title: &str, message: &str) -> Uuid {
        self.show(NotificationKind::Info, title, message)
    }

    /// Surface a classified error.
    ///
    /// Failed requests are logged at warn; local rejections only at debug.
    pub fn report(&self, error: &KanbanError) -> Uuid {
        if error.is_request_error() {
            tracing::warn!(title = error.title(), "Request failed: {}", error);
        } else {
            tracing::debug!(title = error.title(), "Rejected locally: {}", error);
        }
        self.show_error(error.title(), &error.user_message())
    }

    /// Report `result` if it failed, then hand it back unchanged.
    pub fn check<T>(&self, result: KanbanResult<T>) -> KanbanResult<T> {
        result.inspect_err(|e| {
            self.report(e);
        })
    }

    /// Await a request and [`check`](Self::check) its result.
    pub async fn run<T, F>(&self, request: F) -> KanbanResult<T>
    where
        F: Future<Output = KanbanResult<T>>,
    {
        self.check(request.await)
    }

    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut active = self.active.lock();
        let before = active.len();
        active.retain(|n| n.id != id);
        active.len() != before
    }

    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut active = self.active.lock();
        let before = active.len();
        active.retain(|n| !n.is_expired(now));
        before - active.len()
    }

    pub fn active(&self) -> Vec<Notification> {
        self.active.lock().clone()
    }

    pub fn latest(&self) -> Option<Notification> {
        self.active.lock().last().cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
