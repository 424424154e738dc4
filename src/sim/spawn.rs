//! Random layout generation for obstacles and collectibles
//!
//! Spawns draw from an injected seeded RNG so layouts are reproducible.
//! Extents are rolled before positions, then each position is sampled
//! from the range that keeps the whole entity on the canvas. Overlap
//! between entities is allowed; nothing rerolls a crowded placement.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, Obstacle};
use crate::consts::*;

/// Generate a fresh set of obstacles
pub fn generate_obstacles(rng: &mut impl Rng) -> Vec<Obstacle> {
    (0..OBSTACLE_COUNT)
        .map(|_| {
            let width = rng.random_range(OBSTACLE_MIN_EXTENT..=OBSTACLE_MAX_EXTENT);
            let height = rng.random_range(OBSTACLE_MIN_EXTENT..=OBSTACLE_MAX_EXTENT);
            let x = rng.random_range(0.0..=CANVAS_WIDTH - width);
            let y = rng.random_range(0.0..=CANVAS_HEIGHT - height);
            Obstacle {
                pos: Vec2::new(x, y),
                width,
                height,
            }
        })
        .collect()
}

/// Generate a fresh batch of collectibles, all uncollected
pub fn generate_points(rng: &mut impl Rng) -> Vec<Collectible> {
    (0..POINT_COUNT)
        .map(|_| {
            let x = rng.random_range(0.0..=CANVAS_WIDTH - POINT_SIZE);
            let y = rng.random_range(0.0..=CANVAS_HEIGHT - POINT_SIZE);
            Collectible {
                pos: Vec2::new(x, y),
                collected: false,
            }
        })
        .collect()
}
