//! # Display Management
//!
//! The macroquad frontend: draws a [`RenderState`] with tinted quads and
//! text, and owns the two-frame animation tick. Tiles are flat colored
//! rectangles keyed by their semantic kind (wall, floor, gate, healthy
//! item, junk item, player frame 0/1); swapping in real textures would
//! only touch this file.

use crate::config::{PLAYER_SIZE, TILE_SIZE};
use crate::rendering::{PlayView, RenderState};
use macroquad::prelude::*;

/// Player animation toggles between its two frames at this rate.
const ANIM_FRAMES_PER_SECOND: f64 = 4.0;

// Sprite palette
const WALL_COLOR: Color = GRAY;
const FLOOR_COLOR: Color = DARKGREEN;
const GATE_COLOR: Color = GOLD;
const HEALTHY_COLOR: Color = LIME;
const JUNK_COLOR: Color = RED;
const PLAYER_FRAME_COLORS: [Color; 2] = [YELLOW, ORANGE];

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Tile size in pixels
    pub tile_size: f32,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    /// Creates a new display manager.
    pub fn new() -> Self {
        Self {
            tile_size: TILE_SIZE,
        }
    }

    /// Current animation frame (0 or 1), derived from wall-clock time.
    ///
    /// The cadence lives here, in the rendering layer; the game core only
    /// ever sees the resulting index.
    pub fn anim_frame(&self) -> usize {
        (get_time() * ANIM_FRAMES_PER_SECOND) as usize % 2
    }

    /// Renders one frame of the given snapshot.
    pub fn render(&self, state: &RenderState) {
        clear_background(BLACK);

        match state {
            RenderState::Menu => self.render_main_menu(),
            RenderState::Play(view) => self.render_play(view),
            RenderState::PauseOverlay(view) => {
                self.render_play(view);
                self.render_pause_overlay();
            }
        }
    }

    fn render_main_menu(&self) {
        draw_text("SNACK RUN", 100.0, 100.0, 48.0, WHITE);

        let mut line_y = 200.0;
        for level in crate::config::MENU_LEVELS {
            draw_text(
                &format!("Press {} for Level {}", level, level),
                150.0,
                line_y,
                28.0,
                WHITE,
            );
            line_y += 50.0;
        }
    }

    fn render_play(&self, view: &PlayView) {
        self.render_board(view);
        self.render_items(view);
        self.render_player(view);
        self.render_hud(view);
    }

    fn render_board(&self, view: &PlayView) {
        let grid = view.grid;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = crate::game::Position::new(x, y);
                let color = if grid.is_gate(pos) {
                    GATE_COLOR
                } else if grid.is_wall(pos) {
                    WALL_COLOR
                } else {
                    FLOOR_COLOR
                };
                draw_rectangle(
                    x as f32 * self.tile_size,
                    y as f32 * self.tile_size,
                    self.tile_size,
                    self.tile_size,
                    color,
                );
            }
        }
    }

    fn render_items(&self, view: &PlayView) {
        let radius = self.tile_size * 0.35;
        for item in &view.items {
            let color = if item.healthy {
                HEALTHY_COLOR
            } else {
                JUNK_COLOR
            };
            draw_circle(
                (item.position.x as f32 + 0.5) * self.tile_size,
                (item.position.y as f32 + 0.5) * self.tile_size,
                radius,
                color,
            );
        }
    }

    fn render_player(&self, view: &PlayView) {
        // The second frame is a slightly smaller, warmer quad; enough to
        // read as a bounce at the toggle cadence
        let size = if view.frame == 0 {
            PLAYER_SIZE
        } else {
            PLAYER_SIZE - 4.0
        };
        let inset = (self.tile_size - size) / 2.0;
        draw_rectangle(
            view.player.x as f32 * self.tile_size + inset,
            view.player.y as f32 * self.tile_size + inset,
            size,
            size,
            PLAYER_FRAME_COLORS[view.frame % 2],
        );
    }

    fn render_hud(&self, view: &PlayView) {
        draw_text(&format!("Score: {}", view.score), 10.0, 20.0, 20.0, WHITE);
        draw_text(&format!("Level: {}", view.level), 10.0, 40.0, 20.0, WHITE);
    }

    fn render_pause_overlay(&self) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, 0.6),
        );
        draw_text("Game Paused", 150.0, 150.0, 48.0, WHITE);
        draw_text("Press R to Resume", 150.0, 200.0, 28.0, WHITE);
        draw_text("Press M for Main Menu", 150.0, 250.0, 28.0, WHITE);
    }
}
