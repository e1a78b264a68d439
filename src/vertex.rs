use glium::implement_vertex;

use crate::float::IntoArray;
use crate::scene::ShadedVertex;

/// Vertex using raw arrays that can be inserted in vertex buffers
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RawVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

implement_vertex!(RawVertex, pos, color);

impl From<&ShadedVertex> for RawVertex {
    fn from(v: &ShadedVertex) -> Self {
        Self {
            pos: v.pos.into_array(),
            color: v.color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use cgmath::Point3;

    #[test]
    fn shaded_vertex_converts_to_raw() {
        let v = ShadedVertex {
            pos: Point3::new(1.0, -1.0, 0.5),
            color: Color::new(0.25, 1.5, 0.0),
        };
        let raw = RawVertex::from(&v);
        assert_eq!(raw.pos, [1.0, -1.0, 0.5]);
        // Colors above one are kept, the shader clamps them
        assert_eq!(raw.color, [0.25, 1.5, 0.0]);
    }
}
