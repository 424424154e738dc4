//! Cursor Chase - a mouse-steered dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Window, input, and timing glue

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Canvas dimensions in logical pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player movement speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Cursor distance below which the player holds still (prevents jitter)
    pub const DEAD_ZONE: f32 = 5.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 8;
    pub const OBSTACLE_MIN_EXTENT: f32 = 40.0;
    pub const OBSTACLE_MAX_EXTENT: f32 = 100.0;

    /// Collectible defaults
    pub const POINT_COUNT: usize = 5;
    /// Edge length of a collectible's bounding square
    pub const POINT_SIZE: f32 = 15.0;
    /// Score awarded per collected point
    pub const POINT_VALUE: u32 = 10;
}
