//! Axis-aligned box geometry for collision checks
//!
//! Everything on screen collides as an axis-aligned box: the player
//! square, the obstacles, and the pickup area around each collectible.
//! Coordinates are canvas-space with the origin at the top-left corner
//! and y growing downward.

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and extents
    pub fn from_top_left(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width, height),
        }
    }

    /// Build from a center point and a square edge length
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check overlap with another box. Boxes that merely share an edge
    /// do not count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
