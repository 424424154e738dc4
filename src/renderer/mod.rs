//! WebGPU rendering module
//!
//! [`build_frame`] turns a game state into a flat triangle list; the
//! pipeline uploads it and draws everything in a single pass.

pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;
use shapes::{circle, line, rect, rect_gradient_v};
use vertex::{Vertex, colors};

/// Draw scales for the two font sizes used by the HUD
const TEXT_SCALE_LARGE: f32 = 4.0;
const TEXT_SCALE_SMALL: f32 = 3.0;

const GUIDE_LINE_WIDTH: f32 = 2.0;
const POINT_SEGMENTS: u32 = 24;

/// Build the complete vertex list for one frame, back to front
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    vertices.extend(rect_gradient_v(
        Vec2::ZERO,
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        colors::BACKGROUND_TOP,
        colors::BACKGROUND_BOTTOM,
    ));

    for obstacle in &state.obstacles {
        vertices.extend(rect(
            obstacle.pos,
            obstacle.width,
            obstacle.height,
            colors::OBSTACLE,
        ));
    }

    for point in &state.points {
        if !point.collected {
            vertices.extend(circle(
                point.center(),
                POINT_SIZE / 2.0,
                colors::POINT,
                POINT_SEGMENTS,
            ));
        }
    }

    let player = &state.player;
    vertices.extend(rect(
        player.pos - Vec2::splat(player.size / 2.0),
        player.size,
        player.size,
        colors::PLAYER,
    ));

    // Steering hint from the square to the cursor
    vertices.extend(line(
        player.pos,
        state.cursor,
        GUIDE_LINE_WIDTH,
        colors::GUIDE_LINE,
    ));

    let score_text = format!("Score: {}", state.score);
    let score_x = CANVAS_WIDTH - text::width(&score_text, TEXT_SCALE_LARGE) - 10.0;
    vertices.extend(text::text(
        &score_text,
        Vec2::new(score_x, 10.0),
        TEXT_SCALE_LARGE,
        colors::TEXT,
    ));

    let instructions = [
        "Instructions:",
        "- Move the cursor to steer the square",
        "- The square follows the cursor's direction",
        "- Avoid the red obstacles",
        "- Collect the green points",
    ];
    for (i, text_line) in instructions.iter().enumerate() {
        let color = if i == 0 { colors::TEXT } else { colors::TEXT_DIM };
        vertices.extend(text::text(
            text_line,
            Vec2::new(10.0, 10.0 + i as f32 * 25.0),
            TEXT_SCALE_SMALL,
            color,
        ));
    }

    if state.is_over() {
        vertices.extend(rect(
            Vec2::ZERO,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            colors::OVERLAY,
        ));
        push_centered(
            &mut vertices,
            "Game Over",
            CANVAS_HEIGHT / 2.0 - 50.0,
            TEXT_SCALE_LARGE,
            colors::TEXT,
        );
        push_centered(
            &mut vertices,
            &format!("Final Score: {}", state.score),
            CANVAS_HEIGHT / 2.0,
            TEXT_SCALE_LARGE,
            colors::TEXT,
        );
        push_centered(
            &mut vertices,
            "Press R to restart or ESC to quit",
            CANVAS_HEIGHT / 2.0 + 50.0,
            TEXT_SCALE_SMALL,
            colors::TEXT,
        );
    }

    vertices
}

/// Append a horizontally centered line of text
fn push_centered(vertices: &mut Vec<Vertex>, s: &str, y: f32, scale: f32, color: [f32; 4]) {
    let x = (CANVAS_WIDTH - text::width(s, scale)) / 2.0;
    vertices.extend(text::text(s, Vec2::new(x, y), scale, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_frame_is_triangle_list() {
        let state = GameState::new(7);
        let frame = build_frame(&state);
        assert!(!frame.is_empty());
        assert_eq!(frame.len() % 3, 0);
    }

    #[test]
    fn test_game_over_adds_overlay() {
        let mut state = GameState::new(7);
        let running_len = build_frame(&state).len();

        state.phase = GamePhase::Over;
        let over_len = build_frame(&state).len();

        assert!(over_len > running_len);
    }

    #[test]
    fn test_collected_points_are_skipped() {
        let mut state = GameState::new(7);
        let before = build_frame(&state).len();

        state.points[0].collected = true;
        let after = build_frame(&state).len();

        assert_eq!(before - after, (POINT_SEGMENTS * 3) as usize);
    }
}
