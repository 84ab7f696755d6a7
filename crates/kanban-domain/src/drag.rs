//! Drag-and-drop geometry and gesture state.
//!
//! Nothing here touches the board. The resolver turns pointer coordinates
//! into an insertion index; the gesture and drop-target types hold the
//! ephemeral state of one drag.

use crate::card::CardId;
use crate::list::ListId;

/// Vertical extent of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Bounding box of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= self.left - margin
            && x <= self.right + margin
            && y >= self.top - margin
            && y <= self.bottom + margin
    }
}

/// Insertion index for a pointer at `pointer_y` over `cards` (top to bottom).
///
/// The first card whose midpoint lies below the pointer takes the slot;
/// a pointer below every card appends. An empty list always yields 0.
pub fn resolve_insertion_index(pointer_y: f64, cards: &[CardBounds]) -> usize {
    cards
        .iter()
        .position(|card| pointer_y < card.midpoint())
        .unwrap_or(cards.len())
}

/// The card being dragged and the list it was picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub card_id: CardId,
    pub source_list_id: ListId,
}

impl DragGesture {
    pub fn new(card_id: CardId, source_list_id: ListId) -> Self {
        Self {
            card_id,
            source_list_id,
        }
    }
}

/// Hover state of one list while a card is dragged over it.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub list_id: ListId,
    pending_index: Option<usize>,
    empty_margin: f64,
}

impl DropTarget {
    pub fn new(list_id: ListId, empty_margin: f64) -> Self {
        Self {
            list_id,
            pending_index: None,
            empty_margin,
        }
    }

    pub fn pending_index(&self) -> Option<usize> {
        self.pending_index
    }

    pub fn is_drag_over(&self) -> bool {
        self.pending_index.is_some()
    }

    /// Recompute the insertion index for the latest pointer position.
    pub fn drag_over(&mut self, pointer_y: f64, cards: &[CardBounds]) -> usize {
        let index = resolve_insertion_index(pointer_y, cards);
        self.pending_index = Some(index);
        index
    }

    /// Clear the pending index once the pointer is outside the list.
    ///
    /// Empty lists get `empty_margin` of slack on every side. Returns true
    /// when the pending index was cleared.
    pub fn drag_leave(&mut self, x: f64, y: f64, bounds: Bounds, card_count: usize) -> bool {
        let margin = if card_count == 0 {
            self.empty_margin
        } else {
            0.0
        };
        if bounds.contains(x, y, margin) {
            return false;
        }
        self.pending_index = None;
        true
    }

    /// Consume the drop, falling back to appending when no index is pending.
    pub fn take_drop(&mut self, card_count: usize) -> usize {
        self.pending_index.take().unwrap_or(card_count)
    }
}
