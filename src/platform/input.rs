//! Input event translation
//!
//! Maps raw winit window events onto the small set of actions the game
//! understands.

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// An input action the game reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to a new canvas position
    CursorMoved(Vec2),
    /// R key pressed
    Restart,
    /// ESC pressed or window close requested
    Quit,
}

/// Translate a window event; returns `None` for events the game ignores
pub fn translate(event: &WindowEvent, scale_factor: f64) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f64>(scale_factor);
            Some(InputEvent::CursorMoved(Vec2::new(
                logical.x as f32,
                logical.y as f32,
            )))
        }
        WindowEvent::KeyboardInput { event: key, .. } if key.state == ElementState::Pressed => {
            match key.physical_key {
                PhysicalKey::Code(KeyCode::KeyR) => Some(InputEvent::Restart),
                PhysicalKey::Code(KeyCode::Escape) => Some(InputEvent::Quit),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_request_quits() {
        assert_eq!(
            translate(&WindowEvent::CloseRequested, 1.0),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unrelated_events_ignored() {
        assert_eq!(translate(&WindowEvent::Focused(true), 1.0), None);
    }
}
