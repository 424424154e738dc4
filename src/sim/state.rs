//! Game state and entity types
//!
//! Everything the simulation mutates lives here. A state is created
//! from a seed and only changes inside `tick`, so a full run can be
//! replayed exactly from the seed and the input sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Aabb;
use super::spawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player hit an obstacle; waiting for restart or quit
    Over,
}

/// The player square, steered indirectly by the mouse cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Edge length of the square
    pub size: f32,
    /// Movement speed in pixels per tick
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Collision box centered on the player
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// A static rectangular obstacle. Touching one ends the round.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.width, self.height)
    }
}

/// A collectible point. Collected ones stay in the list without
/// rendering or scoring until the whole batch regenerates.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Top-left corner of the pickup box
    pub pos: Vec2,
    pub collected: bool,
}

impl Collectible {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, POINT_SIZE, POINT_SIZE)
    }

    /// Center of the pickup box; the circle is drawn from here
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(POINT_SIZE / 2.0)
    }
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all spawn positions
    pub rng: Pcg32,
    /// Score
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Last known cursor position in canvas coordinates
    pub cursor: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player square
    pub player: Player,
    /// Static obstacles for this round
    pub obstacles: Vec<Obstacle>,
    /// Current batch of collectibles
    pub points: Vec<Collectible>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = spawn::generate_obstacles(&mut rng);
        let points = spawn::generate_points(&mut rng);

        Self {
            seed,
            rng,
            score: 0,
            phase: GamePhase::Running,
            cursor: Vec2::ZERO,
            time_ticks: 0,
            player: Player::default(),
            obstacles,
            points,
        }
    }

    /// Restart after a game over: fresh score, recentered player, new
    /// obstacle and point layout. The RNG stream carries on so every
    /// round gets a different board.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Running;
        self.player = Player::default();
        self.obstacles = spawn::generate_obstacles(&mut self.rng);
        self.points = spawn::generate_points(&mut self.rng);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
