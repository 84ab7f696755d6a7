//! Keeps one client's copy of a board consistent with the server and with
//! every other client editing it.
//!
//! Three sources mutate a board view: optimistic local moves
//! ([`OptimisticMover`]), responses from the board service ([`BoardApi`]),
//! and push events from the real-time hub ([`HubClient`], reconciled by
//! [`RemoteEventReconciler`]). [`BoardSession`] wires them together for the
//! lifetime of one board view.

pub mod activity;
pub mod api;
pub mod connection;
pub mod dashboard;
pub mod events;
pub mod hub;
pub mod mover;
pub mod notifications;
pub mod reconciler;
pub mod session;
pub mod store;

pub use activity::{ActivityLogStream, LoadOutcome, SearchOutcome};
pub use api::BoardApi;
pub use connection::{ConnectionManager, ConnectionState};
pub use dashboard::Dashboard;
pub use events::EventBus;
pub use hub::{HubClient, HubEvent, HubState, LEAVE_BOARD};
pub use mover::{MoveOutcome, OptimisticMover};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
pub use reconciler::{Reconciliation, RemoteEventReconciler};
pub use session::BoardSession;
pub use store::BoardStore;
