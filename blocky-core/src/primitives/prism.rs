/// Triangular prism: triangle (0,0) (1,0) (0.5,1) extruded over z in [0, 1]
use super::{draw_faces, Face};
use crate::color::Rgba;
use crate::render::Renderer;

/// Two end caps and three rectangular sides split in two.
pub const PRISM_FACES: [Face; 5] = [
    // Front cap (z = 0)
    Face {
        shade: 1.0,
        triangles: &[[0.0, 0.0, 0.0, 0.5, 1.0, 0.0, 1.0, 0.0, 0.0]],
    },
    // Back cap (z = 1)
    Face {
        shade: 0.9,
        triangles: &[[0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0]],
    },
    // Bottom (y = 0)
    Face {
        shade: 0.8,
        triangles: &[
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        ],
    },
    // Right slant
    Face {
        shade: 0.7,
        triangles: &[
            [1.0, 0.0, 0.0, 0.5, 1.0, 0.0, 0.5, 1.0, 1.0],
            [1.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 0.0, 1.0],
        ],
    },
    // Left slant
    Face {
        shade: 0.7,
        triangles: &[
            [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.5, 1.0, 1.0],
            [0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 0.5, 1.0, 0.0],
        ],
    },
];

pub const PRISM_TRIANGLES: usize = 8;

pub fn draw_prism(color: Rgba, renderer: &mut dyn Renderer) {
    draw_faces(&PRISM_FACES, color, renderer);
}
