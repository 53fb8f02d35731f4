//! # Player Entity
//!
//! The player is a position on the board. Stepping is pure: [`Player::step`]
//! proposes a candidate cell and the state machine decides whether it is
//! committed.

use crate::game::{Direction, Position};
use serde::{Deserialize, Serialize};

/// The player-controlled sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    position: Position,
}

impl Player {
    /// Creates a player at the given cell.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Candidate cell one tile away in the given direction. Does not move
    /// the player.
    pub fn step(&self, direction: Direction) -> Position {
        self.position + direction.to_delta()
    }

    /// Commits a position. Only the state machine calls this, after
    /// validating the move.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
