pub mod activity;
pub mod board;
pub mod card;
pub mod drag;
pub mod list;
pub mod moves;
pub mod requests;

pub use activity::{sort_newest_first, ActivityLogEntry, ActivityLogId};
pub use board::{Board, BoardId, UserId};
pub use card::{Card, CardId};
pub use drag::{resolve_insertion_index, Bounds, CardBounds, DragGesture, DropTarget};
pub use list::{List, ListId};
pub use moves::{locate_card, move_card, resolve_target_index, CardLocation};
pub use requests::{
    AddMemberRequest, CreateBoardRequest, CreateCardRequest, CreateListRequest, MoveCardRequest,
    RenameListRequest, UpdateCardRequest,
};
