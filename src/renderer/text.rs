//! Bitmap text rendering
//!
//! A small built-in 4x6 pixel font, drawn as one quad per lit pixel.
//! Covers printable ASCII (0x20-0x7E); anything else advances the pen
//! without drawing.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

/// Horizontal pen advance per character, in font pixels
pub const GLYPH_ADVANCE: f32 = 5.0;

static FONT_4X6: [[u8; 6]; 95] = [
    [0x0, 0x0, 0x0, 0x0, 0x0, 0x0], // Space
    [0x4, 0x4, 0x4, 0x0, 0x4, 0x0], // !
    [0xA, 0xA, 0x0, 0x0, 0x0, 0x0], // "
    [0xA, 0xF, 0xA, 0xF, 0xA, 0x0], // #
    [0x4, 0xE, 0xC, 0x6, 0xE, 0x4], // $
    [0x9, 0x2, 0x4, 0x8, 0x9, 0x0], // %
    [0x4, 0xA, 0x4, 0xA, 0x5, 0x0], // &
    [0x4, 0x4, 0x0, 0x0, 0x0, 0x0], // '
    [0x2, 0x4, 0x4, 0x4, 0x2, 0x0], // (
    [0x4, 0x2, 0x2, 0x2, 0x4, 0x0], // )
    [0x0, 0xA, 0x4, 0xA, 0x0, 0x0], // *
    [0x0, 0x4, 0xE, 0x4, 0x0, 0x0], // +
    [0x0, 0x0, 0x0, 0x4, 0x4, 0x8], // ,
    [0x0, 0x0, 0xE, 0x0, 0x0, 0x0], // -
    [0x0, 0x0, 0x0, 0x0, 0x4, 0x0], // .
    [0x1, 0x2, 0x4, 0x8, 0x8, 0x0], // /
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // 0
    [0x4, 0xC, 0x4, 0x4, 0xE, 0x0], // 1
    [0x6, 0x9, 0x2, 0x4, 0xF, 0x0], // 2
    [0xE, 0x1, 0x6, 0x1, 0xE, 0x0], // 3
    [0x2, 0x6, 0xA, 0xF, 0x2, 0x0], // 4
    [0xF, 0x8, 0xE, 0x1, 0xE, 0x0], // 5
    [0x6, 0x8, 0xE, 0x9, 0x6, 0x0], // 6
    [0xF, 0x1, 0x2, 0x4, 0x4, 0x0], // 7
    [0x6, 0x9, 0x6, 0x9, 0x6, 0x0], // 8
    [0x6, 0x9, 0x7, 0x1, 0x6, 0x0], // 9
    [0x0, 0x4, 0x0, 0x4, 0x0, 0x0], // :
    [0x0, 0x4, 0x0, 0x4, 0x4, 0x8], // ;
    [0x1, 0x2, 0x4, 0x2, 0x1, 0x0], // <
    [0x0, 0xE, 0x0, 0xE, 0x0, 0x0], // =
    [0x4, 0x2, 0x1, 0x2, 0x4, 0x0], // >
    [0x6, 0x9, 0x2, 0x0, 0x2, 0x0], // ?
    [0x6, 0x9, 0xB, 0x8, 0x6, 0x0], // @
    [0x6, 0x9, 0xF, 0x9, 0x9, 0x0], // A
    [0xE, 0x9, 0xE, 0x9, 0xE, 0x0], // B
    [0x6, 0x9, 0x8, 0x9, 0x6, 0x0], // C
    [0xE, 0x9, 0x9, 0x9, 0xE, 0x0], // D
    [0xF, 0x8, 0xE, 0x8, 0xF, 0x0], // E
    [0xF, 0x8, 0xE, 0x8, 0x8, 0x0], // F
    [0x6, 0x8, 0xB, 0x9, 0x6, 0x0], // G
    [0x9, 0x9, 0xF, 0x9, 0x9, 0x0], // H
    [0xE, 0x4, 0x4, 0x4, 0xE, 0x0], // I
    [0x7, 0x2, 0x2, 0xA, 0x4, 0x0], // J
    [0x9, 0xA, 0xC, 0xA, 0x9, 0x0], // K
    [0x8, 0x8, 0x8, 0x8, 0xF, 0x0], // L
    [0x9, 0xF, 0xF, 0x9, 0x9, 0x0], // M
    [0x9, 0xD, 0xB, 0x9, 0x9, 0x0], // N
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // O
    [0xE, 0x9, 0xE, 0x8, 0x8, 0x0], // P
    [0x6, 0x9, 0x9, 0xA, 0x5, 0x0], // Q
    [0xE, 0x9, 0xE, 0xA, 0x9, 0x0], // R
    [0x6, 0x8, 0x6, 0x1, 0xE, 0x0], // S
    [0xE, 0x4, 0x4, 0x4, 0x4, 0x0], // T
    [0x9, 0x9, 0x9, 0x9, 0x6, 0x0], // U
    [0x9, 0x9, 0x9, 0x6, 0x6, 0x0], // V
    [0x9, 0x9, 0xF, 0xF, 0x9, 0x0], // W
    [0x9, 0x9, 0x6, 0x9, 0x9, 0x0], // X
    [0x9, 0x9, 0x6, 0x4, 0x4, 0x0], // Y
    [0xF, 0x1, 0x6, 0x8, 0xF, 0x0], // Z
    [0x6, 0x4, 0x4, 0x4, 0x6, 0x0], // [
    [0x8, 0x8, 0x4, 0x2, 0x1, 0x0], // \
    [0x6, 0x2, 0x2, 0x2, 0x6, 0x0], // ]
    [0x4, 0xA, 0x0, 0x0, 0x0, 0x0], // ^
    [0x0, 0x0, 0x0, 0x0, 0xF, 0x0], // _
    [0x4, 0x2, 0x0, 0x0, 0x0, 0x0], // `
    [0x0, 0x6, 0xA, 0xA, 0x5, 0x0], // a
    [0x8, 0xE, 0x9, 0x9, 0xE, 0x0], // b
    [0x0, 0x6, 0x8, 0x8, 0x6, 0x0], // c
    [0x1, 0x7, 0x9, 0x9, 0x7, 0x0], // d
    [0x0, 0x6, 0xF, 0x8, 0x6, 0x0], // e
    [0x2, 0x4, 0xE, 0x4, 0x4, 0x0], // f
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x6], // g
    [0x8, 0xE, 0x9, 0x9, 0x9, 0x0], // h
    [0x4, 0x0, 0x4, 0x4, 0x4, 0x0], // i
    [0x2, 0x0, 0x2, 0x2, 0xA, 0x4], // j
    [0x8, 0xA, 0xC, 0xA, 0x9, 0x0], // k
    [0x4, 0x4, 0x4, 0x4, 0x2, 0x0], // l
    [0x0, 0xA, 0xF, 0x9, 0x9, 0x0], // m
    [0x0, 0xE, 0x9, 0x9, 0x9, 0x0], // n
    [0x0, 0x6, 0x9, 0x9, 0x6, 0x0], // o
    [0x0, 0xE, 0x9, 0xE, 0x8, 0x8], // p
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x1], // q
    [0x0, 0xE, 0x9, 0x8, 0x8, 0x0], // r
    [0x0, 0x6, 0xC, 0x2, 0xC, 0x0], // s
    [0x4, 0xE, 0x4, 0x4, 0x2, 0x0], // t
    [0x0, 0x9, 0x9, 0x9, 0x6, 0x0], // u
    [0x0, 0x9, 0x9, 0x6, 0x6, 0x0], // v
    [0x0, 0x9, 0x9, 0xF, 0x6, 0x0], // w
    [0x0, 0x9, 0x6, 0x6, 0x9, 0x0], // x
    [0x0, 0x9, 0x9, 0x7, 0x1, 0x6], // y
    [0x0, 0xF, 0x2, 0x4, 0xF, 0x0], // z
    [0x2, 0x4, 0x8, 0x4, 0x2, 0x0], // {
    [0x4, 0x4, 0x4, 0x4, 0x4, 0x0], // |
    [0x8, 0x4, 0x2, 0x4, 0x8, 0x0], // }
    [0x0, 0x5, 0xA, 0x0, 0x0, 0x0], // ~
];

/// Generate vertices for a text string
///
/// `origin` is the top-left corner of the first glyph cell; `scale` is
/// the side length of one font pixel in canvas units.
pub fn text(s: &str, origin: Vec2, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut cx = origin.x;

    for ch in s.chars() {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            let glyph = &FONT_4X6[(code - 0x20) as usize];
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..4u32 {
                    if (bits >> (3 - col)) & 1 == 1 {
                        vertices.extend(shapes::rect(
                            Vec2::new(
                                cx + col as f32 * scale,
                                origin.y + row as f32 * scale,
                            ),
                            scale,
                            scale,
                            color,
                        ));
                    }
                }
            }
        }
        cx += GLYPH_ADVANCE * scale;
    }

    vertices
}

/// Rendered width of a string at the given scale
pub fn width(s: &str, scale: f32) -> f32 {
    s.chars().count() as f32 * GLYPH_ADVANCE * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclamation_pixel_count() {
        // '!' lights four pixels, each a six-vertex quad
        let vertices = text("!", Vec2::ZERO, 1.0, [1.0; 4]);
        assert_eq!(vertices.len(), 4 * 6);
    }

    #[test]
    fn test_space_draws_nothing_but_advances() {
        let vertices = text(" ", Vec2::ZERO, 2.0, [1.0; 4]);
        assert!(vertices.is_empty());
        assert_eq!(width(" ", 2.0), 10.0);
    }

    #[test]
    fn test_non_ascii_skipped() {
        let with_accent = text("a\u{00e9}b", Vec2::ZERO, 1.0, [1.0; 4]);
        let plain = text("ab", Vec2::ZERO, 1.0, [1.0; 4]);
        assert_eq!(with_accent.len(), plain.len());
    }

    #[test]
    fn test_scale_moves_pixels() {
        let small = text("A", Vec2::ZERO, 1.0, [1.0; 4]);
        let large = text("A", Vec2::ZERO, 3.0, [1.0; 4]);
        assert_eq!(small.len(), large.len());

        let max_y = |vs: &[Vertex]| {
            vs.iter()
                .map(|v| v.position[1])
                .fold(f32::NEG_INFINITY, f32::max)
        };
        assert!((max_y(&large) - max_y(&small) * 3.0).abs() < 0.0001);
    }
}
