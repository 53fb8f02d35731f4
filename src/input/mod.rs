//! # Input Module
//!
//! Polls macroquad key state and turns it into abstract inputs. The state
//! machine never sees a key code; it sees [`Command`]s, and it is the one
//! that decides whether a command makes sense in the current mode.

use crate::game::{Command, Direction};
use macroquad::prelude::*;

/// Raw player intents, one per polled frame at most.
///
/// `Quit` is a frontend concern and never reaches the state machine;
/// everything else maps onto a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    SelectLevel(u32),
    Move(Direction),
    Pause,
    Resume,
    GoToMainMenu,
    Quit,
}

impl PlayerInput {
    /// Maps this input to a state-machine command, or `None` for inputs
    /// the frontend handles itself.
    pub fn to_command(self) -> Option<Command> {
        match self {
            PlayerInput::SelectLevel(level) => Some(Command::SelectLevel(level)),
            PlayerInput::Move(direction) => Some(Command::Move(direction)),
            PlayerInput::Pause => Some(Command::Pause),
            PlayerInput::Resume => Some(Command::Resume),
            PlayerInput::GoToMainMenu => Some(Command::GoToMainMenu),
            PlayerInput::Quit => None,
        }
    }
}

/// Input handler for processing player key presses.
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Gets the current input if any bound key was just pressed.
    ///
    /// Bindings follow the classic layout: 1/2/3 select a level, WASD or
    /// arrows move, P pauses, R resumes, M returns to the menu, Esc quits.
    pub fn get_input(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Quit);
        }

        // Level selection
        if is_key_pressed(KeyCode::Key1) {
            return Some(PlayerInput::SelectLevel(1));
        }
        if is_key_pressed(KeyCode::Key2) {
            return Some(PlayerInput::SelectLevel(2));
        }
        if is_key_pressed(KeyCode::Key3) {
            return Some(PlayerInput::SelectLevel(3));
        }

        // Movement keys - WASD and arrows
        if is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Up) {
            return Some(PlayerInput::Move(Direction::Up));
        }
        if is_key_pressed(KeyCode::S) || is_key_pressed(KeyCode::Down) {
            return Some(PlayerInput::Move(Direction::Down));
        }
        if is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left) {
            return Some(PlayerInput::Move(Direction::Left));
        }
        if is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right) {
            return Some(PlayerInput::Move(Direction::Right));
        }

        // Mode switches
        if is_key_pressed(KeyCode::P) {
            return Some(PlayerInput::Pause);
        }
        if is_key_pressed(KeyCode::R) {
            return Some(PlayerInput::Resume);
        }
        if is_key_pressed(KeyCode::M) {
            return Some(PlayerInput::GoToMainMenu);
        }

        None
    }
}
