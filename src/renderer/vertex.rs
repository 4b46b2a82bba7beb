//! Vertex type for tessellated 2D output

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let vertices = [Vertex::new(1.0, 2.0, [0.0, 0.5, 1.0, 1.0]); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * Vertex::STRIDE);
    }
}
