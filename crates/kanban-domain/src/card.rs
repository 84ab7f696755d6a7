use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::list::ListId;

pub type CardId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub list_id: ListId,
    #[serde(default)]
    pub position: i32,
}

impl Card {
    pub const MAX_TITLE_LENGTH: usize = 100;
    pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

    pub fn new(list_id: ListId, title: String, description: Option<String>, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            list_id,
            position,
        }
    }

    /// Trim and bound a card title.
    pub fn validate_title(title: &str) -> KanbanResult<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(KanbanError::Validation("Card title is required".to_string()));
        }
        if trimmed.chars().count() > Self::MAX_TITLE_LENGTH {
            return Err(KanbanError::Validation(format!(
                "Card title must be at most {} characters",
                Self::MAX_TITLE_LENGTH
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Trim and bound a card description. Blank descriptions become `None`.
    pub fn validate_description(description: Option<&str>) -> KanbanResult<Option<String>> {
        let Some(trimmed) = description.map(str::trim).filter(|d| !d.is_empty()) else {
            return Ok(None);
        };
        if trimmed.chars().count() > Self::MAX_DESCRIPTION_LENGTH {
            return Err(KanbanError::Validation(format!(
                "Card description must be at most {} characters",
                Self::MAX_DESCRIPTION_LENGTH
            )));
        }
        Ok(Some(trimmed.to_string()))
    }
}
