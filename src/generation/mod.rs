//! # Generation Module
//!
//! Seeded procedural placement of the per-level item set, plus the
//! configuration that controls it. Generation is the only consumer of
//! randomness in the crate: one `StdRng` is seeded at startup (or per
//! test) and drained sequentially.

pub mod items;

pub use items::*;

use crate::config::{DEFAULT_ITEMS_PER_LEVEL, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
use crate::game::Grid;
use crate::{SnackrunError, SnackrunResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for board and item generation.
///
/// # Examples
///
/// ```
/// use snackrun::GenerationConfig;
///
/// let config = GenerationConfig::new(12345);
/// assert_eq!(config.seed, 12345);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible item placement
    pub seed: u64,
    /// Board width in tiles
    pub map_width: i32,
    /// Board height in tiles
    pub map_height: i32,
    /// Items placed at each level start
    pub items_per_level: usize,
}

impl GenerationConfig {
    /// Creates the standard configuration with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            items_per_level: DEFAULT_ITEMS_PER_LEVEL,
        }
    }

    /// Creates a configuration for testing with a smaller, quicker board.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            map_width: 8,
            map_height: 7,
            items_per_level: 3,
        }
    }

    /// The board this configuration describes.
    pub fn grid(&self) -> Grid {
        Grid::new(self.map_width, self.map_height)
    }

    /// Rejects configurations that could hang or starve the placement
    /// loop. Called eagerly, before any level starts.
    pub fn validate(&self) -> SnackrunResult<()> {
        if self.map_width < 3 || self.map_height < 3 {
            return Err(SnackrunError::InvalidConfig(format!(
                "board {}x{} has no interior",
                self.map_width, self.map_height
            )));
        }
        let grid = self.grid();
        let mut capacity = grid.interior_area();
        if grid.is_interior(grid.player_spawn()) {
            capacity -= 1;
        }
        if self.items_per_level > capacity {
            return Err(SnackrunError::InvalidConfig(format!(
                "{} items cannot fit the {} free interior cells",
                self.items_per_level, capacity
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
///
/// Keeps generation behind a consistent seam: content comes out of
/// `generate`, and `validate` re-checks the invariants the content must
/// hold.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random
    /// number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> SnackrunResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> SnackrunResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
