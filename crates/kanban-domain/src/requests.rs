//! Request bodies sent to the board service.
//!
//! Constructors validate and trim user input so a malformed request is
//! rejected before it leaves the client.

use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};

use crate::board::UserId;
use crate::card::Card;
use crate::list::{List, ListId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub name: String,
    pub owner_user_id: UserId,
}

impl CreateBoardRequest {
    pub fn new(name: &str, owner_user_id: &str) -> KanbanResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KanbanError::Validation("Board name is required".to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            owner_user_id: owner_user_id.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

impl CreateListRequest {
    pub fn new(name: &str) -> KanbanResult<Self> {
        Ok(Self {
            name: List::validate_name(name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameListRequest {
    pub name: String,
}

impl RenameListRequest {
    pub fn new(name: &str) -> KanbanResult<Self> {
        Ok(Self {
            name: List::validate_name(name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub title: String,
    pub description: String,
}

impl CreateCardRequest {
    pub fn new(title: &str, description: Option<&str>) -> KanbanResult<Self> {
        Ok(Self {
            title: Card::validate_title(title)?,
            description: Card::validate_description(description)?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCardRequest {
    pub title: String,
    pub description: String,
}

impl UpdateCardRequest {
    pub fn new(title: &str, description: Option<&str>) -> KanbanResult<Self> {
        Ok(Self {
            title: Card::validate_title(title)?,
            description: Card::validate_description(description)?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub target_list_id: ListId,
    pub target_position: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: UserId,
}

impl AddMemberRequest {
    pub fn new(user_id: &str) -> KanbanResult<Self> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(KanbanError::Validation("User id is required".to_string()));
        }
        Ok(Self {
            user_id: user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_move_request_wire_shape() {
        let list_id = Uuid::new_v4();
        let req = MoveCardRequest {
            target_list_id: list_id,
            target_position: 1,
        };
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["targetListId"], list_id.to_string());
        assert_eq!(json["targetPosition"], 1);
    }

    #[test]
    fn test_create_board_request() {
        let req = CreateBoardRequest::new("  Launch ", "alice").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Launch");
        assert_eq!(json["ownerUserId"], "alice");
        assert!(CreateBoardRequest::new(" ", "alice").is_err());
    }

    #[test]
    fn test_create_card_request_defaults_description() {
        let req = CreateCardRequest::new("Title", None).unwrap();
        assert_eq!(req.description, "");
        assert!(CreateCardRequest::new("", Some("body")).is_err());
    }

    #[test]
    fn test_add_member_request_trims() {
        assert_eq!(AddMemberRequest::new(" bob ").unwrap().user_id, "bob");
        assert!(AddMemberRequest::new("").is_err());
    }
}
