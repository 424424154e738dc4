//! Deterministic simulation module
//!
//! Everything in here is pure game logic with no rendering or platform
//! dependencies:
//! - All randomness comes from the seeded RNG inside [`GameState`]
//! - Movement happens only in [`tick`], one fixed step at a time
//! - Canvas coordinates throughout: origin top-left, y grows downward

pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rect::Aabb;
pub use state::{Collectible, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
