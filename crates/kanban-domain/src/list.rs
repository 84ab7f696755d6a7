use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;
use crate::card::{Card, CardId};

pub type ListId = Uuid;

/// An ordered column of cards. The index in `cards` is the local order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(board_id: BoardId, name: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            board_id,
            position,
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    /// Rewrite each card's stored position and list back-reference from its index.
    pub fn reindex(&mut self) {
        let list_id = self.id;
        for (idx, card) in self.cards.iter_mut().enumerate() {
            card.list_id = list_id;
            card.position = idx as i32;
        }
    }

    pub fn validate_name(name: &str) -> KanbanResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(KanbanError::Validation("List name is required".to_string()));
        }
        Ok(trimmed.to_string())
    }
}
