//! # Game State Module
//!
//! The level/game state machine. A single [`GameState`] value owns the
//! player, the remaining items, the level number, and the seeded RNG; every
//! transition is a pure by-value function over a [`Command`]. The frontend
//! holds only read-only snapshots of it.
//!
//! Commands that make no sense in the current mode are silently ignored:
//! the state comes back unchanged and no error is surfaced.

use crate::game::{Direction, Grid, Item, Player, Position};
use crate::generation::{utils, GenerationConfig, Generator, ItemGenerator};
use crate::SnackrunResult;
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Top-level mode; exactly one is active at any time.
///
/// Score and items are meaningful only in `Playing` and `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    MainMenu,
    Playing,
    Paused,
}

/// Abstract input commands consumed by the state machine.
///
/// The input layer produces these from raw key events; nothing below it
/// knows about keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start playing at the given level (main menu only)
    SelectLevel(u32),
    /// Move the player one tile (playing only)
    Move(Direction),
    /// Suspend play (playing only)
    Pause,
    /// Resume play (paused only)
    Resume,
    /// Abandon the current level and return to the menu (paused only)
    GoToMainMenu,
}

/// Central game state: mode, level, score, board, player, and items.
///
/// Constructed once at startup in `MainMenu` mode; afterwards the only way
/// to change it is [`GameState::apply`].
///
/// # Examples
///
/// ```
/// use snackrun::{Command, GameState, GenerationConfig, Mode};
///
/// let state = GameState::new(GenerationConfig::for_testing(7)).unwrap();
/// assert_eq!(state.mode(), Mode::MainMenu);
///
/// let state = state.apply(Command::SelectLevel(1)).unwrap();
/// assert_eq!(state.mode(), Mode::Playing);
/// assert_eq!(state.level(), 1);
/// assert_eq!(state.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    mode: Mode,
    level: u32,
    score: i32,
    grid: Grid,
    player: Player,
    items: Vec<Item>,
    config: GenerationConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state in `MainMenu` mode.
    ///
    /// Validates the configuration eagerly: a board that cannot fit the
    /// requested item count is rejected here, before any level starts.
    pub fn new(config: GenerationConfig) -> SnackrunResult<Self> {
        config.validate()?;
        let grid = config.grid();
        let rng = utils::create_rng(&config);
        Ok(Self {
            mode: Mode::MainMenu,
            level: 1,
            score: 0,
            grid,
            player: Player::new(grid.player_spawn()),
            items: Vec::new(),
            config,
            rng,
        })
    }

    /// Applies one command and returns the successor state.
    ///
    /// Commands invalid for the current mode are no-ops. The only error is
    /// an item-placement failure, unreachable once the configuration has
    /// passed validation; callers treat it as fatal.
    pub fn apply(mut self, command: Command) -> SnackrunResult<Self> {
        match (self.mode, command) {
            // Levels are numbered from 1; clamp rather than trust callers
            (Mode::MainMenu, Command::SelectLevel(level)) => self.start_level(level.max(1)),
            (Mode::Playing, Command::Move(direction)) => self.resolve_move(direction),
            (Mode::Playing, Command::Pause) => {
                self.mode = Mode::Paused;
                Ok(self)
            }
            (Mode::Paused, Command::Resume) => {
                self.mode = Mode::Playing;
                Ok(self)
            }
            (Mode::Paused, Command::GoToMainMenu) => {
                debug!("abandoning level {} from pause menu", self.level);
                self.score = 0;
                self.items.clear();
                self.player = Player::new(self.grid.player_spawn());
                self.mode = Mode::MainMenu;
                Ok(self)
            }
            // Everything else is invalid for the mode: ignore it
            _ => Ok(self),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current level number, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current score. Resets to 0 at each level start and has no floor.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Board geometry.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Items still on the board.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resets score and player, generates a fresh item set, and enters
    /// `Playing` at the given level. Used both for menu selection and for
    /// gate advancement.
    fn start_level(mut self, level: u32) -> SnackrunResult<Self> {
        self.level = level;
        self.score = 0;
        self.player = Player::new(self.grid.player_spawn());
        self.items = ItemGenerator.generate(&self.config, &mut self.rng)?;
        self.mode = Mode::Playing;
        info!("level {} started with {} items", level, self.items.len());
        Ok(self)
    }

    /// Validates and commits one movement command, then runs collision
    /// resolution and the gate-crossing check.
    fn resolve_move(mut self, direction: Direction) -> SnackrunResult<Self> {
        let candidate = self.player.step(direction);

        if self.grid.is_wall(candidate) {
            return Ok(self);
        }
        // The gate only opens once the board is clean
        if self.grid.is_gate(candidate) && !self.items.is_empty() {
            return Ok(self);
        }

        self.player.set_position(candidate);
        self.collect_items_at(candidate);

        if self.items.is_empty() && self.grid.is_gate(candidate) {
            let next = self.level + 1;
            info!("gate crossed, advancing to level {}", next);
            return self.start_level(next);
        }
        Ok(self)
    }

    /// Removes every item at the given cell and adds its points to the
    /// score. Generation never places two items on one cell, but the rule
    /// is "all items here", not "the first one".
    fn collect_items_at(&mut self, position: Position) {
        let before = self.items.len();
        let score = &mut self.score;
        self.items.retain(|item| {
            if item.position == position {
                *score += item.points;
                false
            } else {
                true
            }
        });
        if self.items.len() < before && self.items.is_empty() {
            info!("all items collected, the gate is open");
        }
    }
}
