//! # Snack Run
//!
//! A tile-based arcade game: run around a walled grid, pick up healthy
//! snacks for points (and junk food for penalties), then leave through the
//! gate once the board is clean to advance to the next level.
//!
//! ## Architecture Overview
//!
//! The crate keeps the game rules strictly separated from the frontend:
//!
//! - **Game State**: a single owned [`GameState`] value; every transition is
//!   a pure by-value function over a [`Command`]
//! - **Generation System**: seeded, validated item placement per level
//! - **Input System**: macroquad key polling mapped to abstract commands
//! - **Rendering System**: a pure projection of the game state into a
//!   [`RenderState`] snapshot, drawn by the macroquad display layer
//!
//! The display layer owns the window, the frame cadence, and the two-frame
//! player animation tick; the game core never touches a pixel.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

// Explicit re-exports for the types most callers touch
pub use game::{Command, Direction, GameState, Grid, Item, Mode, Player, Position};
pub use generation::{GenerationConfig, Generator, ItemGenerator};
pub use rendering::{project, MacroquadDisplay, PlayView, RenderState};

/// Core error type for the Snack Run game engine.
#[derive(thiserror::Error, Debug)]
pub enum SnackrunError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration rejected before the game started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Snack Run codebase.
pub type SnackrunResult<T> = Result<T, SnackrunError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default board width in tiles
    pub const DEFAULT_MAP_WIDTH: i32 = 20;

    /// Default board height in tiles
    pub const DEFAULT_MAP_HEIGHT: i32 = 15;

    /// Default number of items placed per level
    pub const DEFAULT_ITEMS_PER_LEVEL: usize = 10;

    /// Tile edge length in pixels (presentation only)
    pub const TILE_SIZE: f32 = 32.0;

    /// Player sprite edge length in pixels (presentation only)
    pub const PLAYER_SIZE: f32 = 28.0;

    /// Levels offered on the main menu
    pub const MENU_LEVELS: [u32; 3] = [1, 2, 3];
}
