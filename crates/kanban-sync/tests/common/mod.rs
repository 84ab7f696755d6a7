#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use kanban_core::{KanbanError, KanbanResult, PageRequest, SyncConfig};
use kanban_domain::{
    ActivityLogEntry, AddMemberRequest, Board, BoardId, Card, CardId, CreateBoardRequest,
    CreateCardRequest, CreateListRequest, List, ListId, MoveCardRequest, RenameListRequest,
    UpdateCardRequest,
};
use kanban_sync::{EventBus, HubClient, HubEvent, HubState};
use parking_lot::Mutex;
use std::collections::VecDeque;
use uuid::Uuid;

/// A recorded call against [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    UserBoards,
    Board(BoardId),
    CreateBoard(CreateBoardRequest),
    DeleteBoard(BoardId),
    Logs(PageRequest),
    CreateList(CreateListRequest),
    RenameList(ListId, RenameListRequest),
    DeleteList(ListId),
    CreateCard(ListId, CreateCardRequest),
    UpdateCard(CardId, UpdateCardRequest),
    DeleteCard(CardId),
    MoveCard(CardId, MoveCardRequest),
    AddMember(AddMemberRequest),
    RemoveMember(String),
}

/// In-memory board service that records every request.
#[derive(Default)]
pub struct FakeApi {
    pub board: Mutex<Option<Board>>,
    pub boards: Mutex<Vec<Board>>,
    pub calls: Mutex<Vec<ApiCall>>,
    /// Pages returned by successive `board_logs` calls.
    pub log_pages: Mutex<VecDeque<Vec<ActivityLogEntry>>>,
    /// Status code to fail the next request with.
    pub fail_with: Mutex<Option<u16>>,
    /// Latency added to `board_logs`.
    pub log_latency: Mutex<Option<std::time::Duration>>,
}

impl FakeApi {
    pub fn with_board(board: Board) -> Self {
        let api = Self::default();
        *api.board.lock() = Some(board);
        api
    }

    pub fn fail_next(&self, status: u16) {
        *self.fail_with.lock() = Some(status);
    }

    pub fn queue_logs(&self, page: Vec<ActivityLogEntry>) {
        self.log_pages.lock().push_back(page);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn move_requests(&self) -> Vec<(CardId, MoveCardRequest)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::MoveCard(card, request) => Some((card, request)),
                _ => None,
            })
            .collect()
    }

    pub fn log_requests(&self) -> Vec<PageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Logs(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) -> KanbanResult<()> {
        self.calls.lock().push(call);
        match self.fail_with.lock().take() {
            Some(status) => Err(KanbanError::from_status(status, "rejected")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl kanban_sync::BoardApi for FakeApi {
    async fn user_boards(&self, _user_id: &str) -> KanbanResult<Vec<Board>> {
        self.record(ApiCall::UserBoards)?;
        Ok(self.boards.lock().clone())
    }

    async fn board(&self, board_id: BoardId, _user_id: &str) -> KanbanResult<Board> {
        self.record(ApiCall::Board(board_id))?;
        self.board
            .lock()
            .clone()
            .ok_or_else(|| KanbanError::NotFound(board_id.to_string()))
    }

    async fn create_board(&self, request: &CreateBoardRequest) -> KanbanResult<()> {
        self.record(ApiCall::CreateBoard(request.clone()))?;
        self.boards
            .lock()
            .push(Board::new(request.name.clone(), request.owner_user_id.clone()));
        Ok(())
    }

    async fn delete_board(&self, board_id: BoardId, _user_id: &str) -> KanbanResult<()> {
        self.record(ApiCall::DeleteBoard(board_id))
    }

    async fn board_logs(
        &self,
        _board_id: BoardId,
        query: &PageRequest,
        _user_id: &str,
    ) -> KanbanResult<Vec<ActivityLogEntry>> {
        let latency = *self.log_latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.record(ApiCall::Logs(query.clone()))?;
        Ok(self.log_pages.lock().pop_front().unwrap_or_default())
    }

    async fn create_list(
        &self,
        _board_id: BoardId,
        request: &CreateListRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::CreateList(request.clone()))?;
        if let Some(board) = self.board.lock().as_mut() {
            let position = board.lists.len() as i32;
            board
                .lists
                .push(List::new(board.id, request.name.clone(), position));
        }
        Ok(())
    }

    async fn rename_list(
        &self,
        _board_id: BoardId,
        list_id: ListId,
        request: &RenameListRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::RenameList(list_id, request.clone()))
    }

    async fn delete_list(
        &self,
        _board_id: BoardId,
        list_id: ListId,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::DeleteList(list_id))
    }

    async fn create_card(
        &self,
        _board_id: BoardId,
        list_id: ListId,
        request: &CreateCardRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::CreateCard(list_id, request.clone()))
    }

    async fn update_card(
        &self,
        _board_id: BoardId,
        card_id: CardId,
        request: &UpdateCardRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::UpdateCard(card_id, request.clone()))
    }

    async fn delete_card(
        &self,
        _board_id: BoardId,
        card_id: CardId,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::DeleteCard(card_id))
    }

    async fn move_card(
        &self,
        _board_id: BoardId,
        card_id: CardId,
        request: &MoveCardRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::MoveCard(card_id, *request))
    }

    async fn add_member(
        &self,
        _board_id: BoardId,
        request: &AddMemberRequest,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::AddMember(request.clone()))
    }

    async fn remove_member(
        &self,
        _board_id: BoardId,
        member_id: &str,
        _user_id: &str,
    ) -> KanbanResult<()> {
        self.record(ApiCall::RemoveMember(member_id.to_string()))
    }
}

/// Hub stand-in. Tests push events through the bus handed to `start`.
#[derive(Default)]
pub struct FakeHub {
    pub bus: Mutex<Option<EventBus>>,
    pub invoked: Mutex<Vec<String>>,
    pub state: Mutex<Option<HubState>>,
    pub refuse: bool,
    pub stopped: Mutex<bool>,
}

impl FakeHub {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn push(&self, event: HubEvent) -> usize {
        self.bus
            .lock()
            .as_ref()
            .map(|bus| bus.publish(event))
            .unwrap_or(0)
    }

    pub fn invoked(&self) -> Vec<String> {
        self.invoked.lock().clone()
    }
}

#[async_trait]
impl HubClient for FakeHub {
    async fn start(&self, _board_id: BoardId, _user_id: &str, events: EventBus) -> KanbanResult<()> {
        if self.refuse {
            return Err(KanbanError::Connection("hub unreachable".to_string()));
        }
        *self.bus.lock() = Some(events);
        *self.state.lock() = Some(HubState::Connected);
        Ok(())
    }

    async fn stop(&self) -> KanbanResult<()> {
        *self.stopped.lock() = true;
        *self.state.lock() = Some(HubState::Disconnected);
        Ok(())
    }

    async fn invoke(&self, method: &str, _board_id: BoardId) -> KanbanResult<()> {
        self.invoked.lock().push(method.to_string());
        Ok(())
    }

    fn state(&self) -> HubState {
        self.state.lock().unwrap_or(HubState::Disconnected)
    }
}

/// Board "Sprint" owned by `owner` with lists A = [C1, C2] and B = [C3].
pub struct Fixture {
    pub board: Board,
    pub list_a: ListId,
    pub list_b: ListId,
    pub c1: CardId,
    pub c2: CardId,
    pub c3: CardId,
}

pub fn fixture(owner: &str) -> Fixture {
    let mut board = Board::new("Sprint".to_string(), owner.to_string());
    let mut a = List::new(board.id, "A".to_string(), 0);
    let mut b = List::new(board.id, "B".to_string(), 1);
    let c1 = Card::new(a.id, "C1".to_string(), None, 0);
    let c2 = Card::new(a.id, "C2".to_string(), None, 1);
    let c3 = Card::new(b.id, "C3".to_string(), None, 0);
    let ids = (a.id, b.id, c1.id, c2.id, c3.id);
    a.cards = vec![c1, c2];
    b.cards = vec![c3];
    board.lists = vec![a, b];
    Fixture {
        board,
        list_a: ids.0,
        list_b: ids.1,
        c1: ids.2,
        c2: ids.3,
        c3: ids.4,
    }
}

pub fn entry(details: &str, minutes_ago: i64) -> ActivityLogEntry {
    ActivityLogEntry::new(
        Uuid::new_v4(),
        Some("someone".to_string()),
        details.to_string(),
        Utc::now() - Duration::minutes(minutes_ago),
    )
}

pub fn config() -> SyncConfig {
    SyncConfig {
        log_page_size: 2,
        ..SyncConfig::default()
    }
}

pub fn card_ids(board: &Board, list_id: ListId) -> Vec<CardId> {
    board
        .list(list_id)
        .map(|l| l.cards.iter().map(|c| c.id).collect())
        .unwrap_or_default()
}
