use async_trait::async_trait;
use kanban_core::{KanbanResult, PageRequest};
use kanban_domain::{
    ActivityLogEntry, AddMemberRequest, Board, BoardId, CardId, CreateBoardRequest,
    CreateCardRequest, CreateListRequest, ListId, MoveCardRequest, RenameListRequest,
    UpdateCardRequest,
};

/// Request/response access to the authoritative board service.
///
/// Every call carries the acting user's identifier. Implementations classify
/// failed responses with [`kanban_core::KanbanError::from_status`] and report
/// transport failures as `KanbanError::Connection`.
#[async_trait]
pub trait BoardApi: Send + Sync {
    // Boards
    async fn user_boards(&self, user_id: &str) -> KanbanResult<Vec<Board>>;
    async fn board(&self, board_id: BoardId, user_id: &str) -> KanbanResult<Board>;
    async fn create_board(&self, request: &CreateBoardRequest) -> KanbanResult<()>;
    async fn delete_board(&self, board_id: BoardId, user_id: &str) -> KanbanResult<()>;

    // Activity log
    async fn board_logs(
        &self,
        board_id: BoardId,
        query: &PageRequest,
        user_id: &str,
    ) -> KanbanResult<Vec<ActivityLogEntry>>;

    // Lists
    async fn create_list(
        &self,
        board_id: BoardId,
        request: &CreateListRequest,
        user_id: &str,
    ) -> KanbanResult<()>;
    async fn rename_list(
        &self,
        board_id: BoardId,
        list_id: ListId,
        request: &RenameListRequest,
        user_id: &str,
    ) -> KanbanResult<()>;
    async fn delete_list(&self, board_id: BoardId, list_id: ListId, user_id: &str)
        -> KanbanResult<()>;

    // Cards
    async fn create_card(
        &self,
        board_id: BoardId,
        list_id: ListId,
        request: &CreateCardRequest,
        user_id: &str,
    ) -> KanbanResult<()>;
    async fn update_card(
        &self,
        board_id: BoardId,
        card_id: CardId,
        request: &UpdateCardRequest,
        user_id: &str,
    ) -> KanbanResult<()>;
    async fn delete_card(&self, board_id: BoardId, card_id: CardId, user_id: &str)
        -> KanbanResult<()>;
    async fn move_card(
        &self,
        board_id: BoardId,
        card_id: CardId,
        request: &MoveCardRequest,
        user_id: &str,
    ) -> KanbanResult<()>;

    // Members
    async fn add_member(
        &self,
        board_id: BoardId,
        request: &AddMemberRequest,
        user_id: &str,
    ) -> KanbanResult<()>;
    async fn remove_member(
        &self,
        board_id: BoardId,
        member_id: &str,
        user_id: &str,
    ) -> KanbanResult<()>;
}
