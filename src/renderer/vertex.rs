//! Vertex format and color palette

use bytemuck::{Pod, Zeroable};

/// A single colored vertex in canvas coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Color palette, RGBA in linear 0..1
pub mod colors {
    /// Background gradient, sampled at the top edge
    pub const BACKGROUND_TOP: [f32; 4] = [0.4, 0.494, 0.918, 1.0];
    /// Background gradient, sampled at the bottom edge
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.463, 0.294, 0.635, 1.0];
    // Cyan
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.267, 0.267, 1.0];
    pub const POINT: [f32; 4] = [0.267, 1.0, 0.267, 1.0];
    /// Half-transparent white, drawn from the player to the cursor
    pub const GUIDE_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_DIM: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    /// Dark veil over the playfield on the game over screen
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.784];
}
