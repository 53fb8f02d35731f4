//! # Item Placement
//!
//! Rejection-sampling placement of the per-level item set: each item gets
//! a uniformly drawn interior cell no other item (or the player spawn)
//! occupies, a uniform healthy/junk tag, and a point value from the tag's
//! range.

use crate::game::{Item, Position};
use crate::generation::{GenerationConfig, Generator};
use crate::{SnackrunError, SnackrunResult};
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::RangeInclusive;

/// Points awarded by a healthy snack.
pub const HEALTHY_POINTS: RangeInclusive<i32> = 10..=19;

/// Points awarded by junk food.
pub const JUNK_POINTS: RangeInclusive<i32> = -5..=-1;

/// Attempt budget per interior cell before placement gives up. Validated
/// configurations never get near this; the cap exists so a bad config can
/// fail loudly instead of spinning forever.
const ATTEMPTS_PER_CELL: usize = 32;

/// Places the collectible items for one level.
pub struct ItemGenerator;

impl Generator<Vec<Item>> for ItemGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> SnackrunResult<Vec<Item>> {
        let grid = config.grid();
        let spawn = grid.player_spawn();
        let max_attempts = grid.interior_area() * ATTEMPTS_PER_CELL;

        let mut items: Vec<Item> = Vec::with_capacity(config.items_per_level);
        let mut attempts = 0usize;

        while items.len() < config.items_per_level {
            attempts += 1;
            if attempts > max_attempts {
                return Err(SnackrunError::GenerationFailed(format!(
                    "placed {} of {} items after {} attempts",
                    items.len(),
                    config.items_per_level,
                    max_attempts
                )));
            }

            let candidate = Position::new(
                rng.gen_range(1..grid.width() - 1),
                rng.gen_range(1..grid.height() - 1),
            );
            if candidate == spawn || items.iter().any(|item| item.position == candidate) {
                continue;
            }

            let healthy = rng.gen_bool(0.5);
            let points = if healthy {
                rng.gen_range(HEALTHY_POINTS)
            } else {
                rng.gen_range(JUNK_POINTS)
            };
            items.push(Item::new(candidate, healthy, points));
        }

        Ok(items)
    }

    fn validate(&self, content: &Vec<Item>, config: &GenerationConfig) -> SnackrunResult<()> {
        let grid = config.grid();

        if content.len() != config.items_per_level {
            return Err(SnackrunError::GenerationFailed(format!(
                "expected {} items, found {}",
                config.items_per_level,
                content.len()
            )));
        }
        for (index, item) in content.iter().enumerate() {
            if !grid.is_interior(item.position) {
                return Err(SnackrunError::GenerationFailed(format!(
                    "item {} placed outside the interior at ({}, {})",
                    index, item.position.x, item.position.y
                )));
            }
            if content[..index]
                .iter()
                .any(|other| other.position == item.position)
            {
                return Err(SnackrunError::GenerationFailed(format!(
                    "two items share cell ({}, {})",
                    item.position.x, item.position.y
                )));
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn generate_with_seed(seed: u64) -> Vec<Item> {
        let config = GenerationConfig::new(seed);
        let mut rng = utils::create_rng(&config);
        ItemGenerator.generate(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_generates_exact_count() {
        let items = generate_with_seed(12345);
        assert_eq!(items.len(), crate::config::DEFAULT_ITEMS_PER_LEVEL);
    }

    #[test]
    fn test_placements_pass_the_generator_validator() {
        let config = GenerationConfig::new(98765);
        let mut rng = utils::create_rng(&config);
        let items = ItemGenerator.generate(&config, &mut rng).unwrap();
        ItemGenerator.validate(&items, &config).unwrap();
    }

    #[test]
    fn test_same_seed_reproduces_the_same_level() {
        assert_eq!(generate_with_seed(7), generate_with_seed(7));
    }

    #[test]
    fn test_validator_rejects_shared_cells() {
        let config = GenerationConfig::new(1);
        let duplicated = vec![
            Item::new(Position::new(3, 3), true, 10);
            config.items_per_level
        ];
        assert!(matches!(
            ItemGenerator.validate(&duplicated, &config),
            Err(SnackrunError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_full_board_still_terminates() {
        // Every free interior cell gets an item; the sampler must fill the
        // board rather than trip the attempt cap.
        let mut config = GenerationConfig::for_testing(3);
        config.items_per_level = config.grid().interior_area();
        config.validate().unwrap();

        let mut rng = utils::create_rng(&config);
        let items = ItemGenerator.generate(&config, &mut rng).unwrap();
        assert_eq!(items.len(), config.items_per_level);
    }

    proptest! {
        #[test]
        fn prop_placement_invariants_hold_for_any_seed(seed: u64) {
            let config = GenerationConfig::new(seed);
            let grid = config.grid();
            let mut rng = utils::create_rng(&config);
            let items = ItemGenerator.generate(&config, &mut rng).unwrap();

            prop_assert_eq!(items.len(), config.items_per_level);

            let cells: HashSet<Position> =
                items.iter().map(|item| item.position).collect();
            prop_assert_eq!(cells.len(), items.len());

            for item in &items {
                prop_assert!(grid.is_interior(item.position));
                prop_assert!(!grid.is_wall(item.position));
                prop_assert!(item.position != grid.player_spawn());
                if item.healthy {
                    prop_assert!(HEALTHY_POINTS.contains(&item.points));
                } else {
                    prop_assert!(JUNK_POINTS.contains(&item.points));
                }
            }
        }
    }
}
