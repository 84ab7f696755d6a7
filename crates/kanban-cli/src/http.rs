//! REST client for the board service.

use async_trait::async_trait;
use kanban_core::{KanbanError, KanbanResult, PageRequest, SyncConfig};
use kanban_domain::{
    ActivityLogEntry, AddMemberRequest, Board, BoardId, CardId, CreateBoardRequest,
    CreateCardRequest, CreateListRequest, ListId, MoveCardRequest, RenameListRequest,
    UpdateCardRequest,
};
use kanban_sync::BoardApi;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_HEADER: &str = "X-User-Id";

pub struct HttpBoardApi {
    client: Client,
    base_url: String,
}

impl HttpBoardApi {
    pub fn new(config: &SyncConfig) -> KanbanResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| KanbanError::Internal(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base().to_string(),
        })
    }

    fn request(&self, method: Method, path: &str, user_id: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match user_id {
            Some(user_id) => builder.header(USER_HEADER, user_id),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> KanbanResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| KanbanError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        let detail = if detail.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            detail
        };
        tracing::debug!(status = status.as_u16(), "Board service rejected request: {}", detail);
        Err(KanbanError::from_status(status.as_u16(), detail))
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> KanbanResult<T> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    async fn execute(&self, builder: RequestBuilder) -> KanbanResult<()> {
        self.send(builder).await.map(|_| ())
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn user_boards(&self, user_id: &str) -> KanbanResult<Vec<Board>> {
        self.fetch(self.request(Method::GET, "/boards/me", Some(user_id)))
            .await
    }

    async fn board(&self, board_id: BoardId, user_id: &str) -> KanbanResult<Board> {
        let path = format!("/boards/{}", board_id);
        self.fetch(self.request(Method::GET, &path, Some(user_id)))
            .await
    }

    async fn create_board(&self, request: &CreateBoardRequest) -> KanbanResult<()> {
        self.execute(self.request(Method::POST, "/boards", None).json(request))
            .await
    }

    async fn delete_board(&self, board_id: BoardId, user_id: &str) -> KanbanResult<()> {
        let path = format!("/boards/{}", board_id);
        self.execute(self.request(Method::DELETE, &path, Some(user_id)))
            .await
    }

    async fn board_logs(
        &self,
        board_id: BoardId,
        query: &PageRequest,
        user_id: &str,
    ) -> KanbanResult<Vec<ActivityLogEntry>> {
        let path = format!("/boards/{}/action-logs", board_id);
        self.fetch(self.request(Method::GET, &path, Some(user_id)).query(query))
            .await
    }

    async fn create_list(
        &self,
        board_id: BoardId,
        request: &CreateListRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/lists", board_id);
        self.execute(self.request(Method::POST, &path, Some(user_id)).json(request))
            .await
    }

    async fn rename_list(
        &self,
        board_id: BoardId,
        list_id: ListId,
        request: &RenameListRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/lists/{}", board_id, list_id);
        self.execute(self.request(Method::PUT, &path, Some(user_id)).json(request))
            .await
    }

    async fn delete_list(
        &self,
        board_id: BoardId,
        list_id: ListId,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/lists/{}", board_id, list_id);
        self.execute(self.request(Method::DELETE, &path, Some(user_id)))
            .await
    }

    async fn create_card(
        &self,
        board_id: BoardId,
        list_id: ListId,
        request: &CreateCardRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/lists/{}/cards", board_id, list_id);
        self.execute(self.request(Method::POST, &path, Some(user_id)).json(request))
            .await
    }

    async fn update_card(
        &self,
        board_id: BoardId,
        card_id: CardId,
        request: &UpdateCardRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/cards/{}", board_id, card_id);
        self.execute(self.request(Method::PUT, &path, Some(user_id)).json(request))
            .await
    }

    async fn delete_card(
        &self,
        board_id: BoardId,
        card_id: CardId,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/cards/{}", board_id, card_id);
        self.execute(self.request(Method::DELETE, &path, Some(user_id)))
            .await
    }

    async fn move_card(
        &self,
        board_id: BoardId,
        card_id: CardId,
        request: &MoveCardRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/cards/{}/move", board_id, card_id);
        self.execute(self.request(Method::POST, &path, Some(user_id)).json(request))
            .await
    }

    async fn add_member(
        &self,
        board_id: BoardId,
        request: &AddMemberRequest,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/members", board_id);
        self.execute(self.request(Method::POST, &path, Some(user_id)).json(request))
            .await
    }

    async fn remove_member(
        &self,
        board_id: BoardId,
        member_id: &str,
        user_id: &str,
    ) -> KanbanResult<()> {
        let path = format!("/boards/{}/members/{}", board_id, member_id);
        self.execute(self.request(Method::DELETE, &path, Some(user_id)))
            .await
    }
}
