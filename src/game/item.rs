//! # Collectible Items
//!
//! Snacks scattered on the board. Healthy ones score positive points,
//! junk food scores negative; both disappear when the player steps on
//! their cell.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// A single collectible snack on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Cell the item occupies; unique among all items in a level
    pub position: Position,
    /// Healthy items score positive points, junk food negative
    pub healthy: bool,
    /// Points awarded on collection (may be negative)
    pub points: i32,
}

impl Item {
    /// Creates a new item.
    pub fn new(position: Position, healthy: bool, points: i32) -> Self {
        Self {
            position,
            healthy,
            points,
        }
    }
}
