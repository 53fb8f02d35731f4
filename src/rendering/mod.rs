//! # Rendering Module
//!
//! Splits drawing in two: [`project`] is a pure function from game state
//! to a [`RenderState`] description, and [`MacroquadDisplay`] turns that
//! description into pixels. The projector knows nothing about macroquad;
//! the display knows nothing about game rules.

pub mod display;

pub use display::*;

use crate::game::{GameState, Grid, Mode, Position};

/// A drawable item: position plus the flag that picks its sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSprite {
    pub position: Position,
    pub healthy: bool,
}

/// Everything the display needs to draw one frame of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayView {
    /// Board geometry; wall/floor/gate cells derive from it
    pub grid: Grid,
    pub items: Vec<ItemSprite>,
    pub player: Position,
    /// Which of the two player sprites to draw (0 or 1)
    pub frame: usize,
    pub score: i32,
    pub level: u32,
}

/// A read-only snapshot of what should be on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// The level-select main menu
    Menu,
    /// The board during play
    Play(PlayView),
    /// The board dimmed under the pause overlay
    PauseOverlay(PlayView),
}

/// Projects the current game state into a drawable description.
///
/// Pure: the animation frame index is an input owned by the display's tick,
/// not game state, so projecting the same state twice with the same frame
/// yields the same snapshot.
pub fn project(state: &GameState, anim_frame: usize) -> RenderState {
    match state.mode() {
        Mode::MainMenu => RenderState::Menu,
        Mode::Playing => RenderState::Play(play_view(state, anim_frame)),
        Mode::Paused => RenderState::PauseOverlay(play_view(state, anim_frame)),
    }
}

fn play_view(state: &GameState, anim_frame: usize) -> PlayView {
    PlayView {
        grid: state.grid(),
        items: state
            .items()
            .iter()
            .map(|item| ItemSprite {
                position: item.position,
                healthy: item.healthy,
            })
            .collect(),
        player: state.player().position(),
        frame: anim_frame % 2,
        score: state.score(),
        level: state.level(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Command;
    use crate::generation::GenerationConfig;

    fn playing_state() -> GameState {
        GameState::new(GenerationConfig::new(12345))
            .unwrap()
            .apply(Command::SelectLevel(1))
            .unwrap()
    }

    #[test]
    fn test_menu_mode_projects_to_menu() {
        let state = GameState::new(GenerationConfig::new(1)).unwrap();
        assert_eq!(project(&state, 0), RenderState::Menu);
    }

    #[test]
    fn test_play_view_mirrors_the_state() {
        let state = playing_state();
        match project(&state, 0) {
            RenderState::Play(view) => {
                assert_eq!(view.items.len(), state.items().len());
                assert_eq!(view.player, state.player().position());
                assert_eq!(view.score, 0);
                assert_eq!(view.level, 1);
            }
            other => panic!("expected a play view, got {:?}", other),
        }
    }

    #[test]
    fn test_pause_carries_the_underlying_play_view() {
        let state = playing_state();
        let play = project(&state, 1);
        let paused = project(&state.apply(Command::Pause).unwrap(), 1);
        match (play, paused) {
            (RenderState::Play(a), RenderState::PauseOverlay(b)) => assert_eq!(a, b),
            other => panic!("unexpected projections: {:?}", other),
        }
    }

    #[test]
    fn test_frame_index_folds_to_two_sprites() {
        let state = playing_state();
        for (tick, expected) in [(0, 0), (1, 1), (2, 0), (7, 1)] {
            match project(&state, tick) {
                RenderState::Play(view) => assert_eq!(view.frame, expected),
                other => panic!("expected a play view, got {:?}", other),
            }
        }
    }
}
