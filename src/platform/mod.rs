//! Platform glue between winit and the simulation
//!
//! Handles:
//! - Input event translation
//! - Frame timing and seed derivation

pub mod input;
pub mod time;

pub use input::InputEvent;
pub use time::FrameClock;
