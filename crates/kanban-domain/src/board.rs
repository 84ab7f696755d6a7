use chrono::{DateTime, Utc};
use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardId};
use crate::list::{List, ListId};

pub type BoardId = Uuid;

/// Opaque user identifier carried with every request.
pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub owner_user_id: UserId,
    /// Members other than the owner.
    #[serde(default)]
    pub member_ids: Vec<UserId>,
    #[serde(default)]
    pub lists: Vec<List>,
    pub last_update: DateTime<Utc>,
}

impl Board {
    pub fn new(name: String, owner_user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            owner_user_id,
            member_ids: Vec::new(),
            lists: Vec::new(),
            last_update: Utc::now(),
        }
    }

    /// Drop the owner and duplicates from the member set.
    ///
    /// Applied to every board hydrated from the server so the member set
    /// never repeats the owner.
    pub fn normalize_members(&mut self) {
        let owner = self.owner_user_id.clone();
        let mut seen = Vec::with_capacity(self.member_ids.len());
        self.member_ids.retain(|m| {
            if *m == owner || seen.contains(m) {
                false
            } else {
                seen.push(m.clone());
                true
            }
        });
    }

    /// Owner plus members.
    pub fn member_count(&self) -> usize {
        self.member_ids.len() + 1
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_user_id == user_id
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.member_ids.iter().any(|m| m == user_id)
    }

    /// Check that `user_id` may be added as a member.
    pub fn check_add_member(&self, user_id: &str) -> KanbanResult<()> {
        if user_id.trim().is_empty() {
            return Err(KanbanError::Validation("User id is required".to_string()));
        }
        if self.is_owner(user_id) {
            return Err(KanbanError::Validation(
                "The board owner is already a member".to_string(),
            ));
        }
        if self.is_member(user_id) {
            return Err(KanbanError::Validation(format!(
                "{} is already a member",
                user_id
            )));
        }
        Ok(())
    }

    /// Check that `actor` may remove `member_id` from the board.
    ///
    /// The owner may remove anyone but themselves; a member may only remove
    /// themselves (leaving the board).
    pub fn check_remove_member(&self, actor: &str, member_id: &str) -> KanbanResult<()> {
        if self.is_owner(member_id) {
            return Err(KanbanError::Validation(
                "The board owner cannot be removed".to_string(),
            ));
        }
        if !self.is_owner(actor) && actor != member_id {
            return Err(KanbanError::AccessDenied(
                "Only the board owner can remove other members".to_string(),
            ));
        }
        if !self.member_ids.iter().any(|m| m == member_id) {
            return Err(KanbanError::NotFound(format!("Member {}", member_id)));
        }
        Ok(())
    }

    pub fn add_member(&mut self, user_id: UserId) -> KanbanResult<()> {
        self.check_add_member(&user_id)?;
        self.member_ids.push(user_id);
        self.touch();
        Ok(())
    }

    pub fn remove_member(&mut self, actor: &str, member_id: &str) -> KanbanResult<()> {
        self.check_remove_member(actor, member_id)?;
        self.member_ids.retain(|m| m != member_id);
        self.touch();
        Ok(())
    }

    pub fn list(&self, list_id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|l| l.cards.iter())
            .find(|c| c.id == card_id)
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    pub fn touch(&mut self) {
        self.last_update = Utc::now();
    }
}
