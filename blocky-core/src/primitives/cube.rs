/// Unit cube spanning [0, 1]^3
use super::{draw_faces, Face};
use crate::color::Rgba;
use crate::render::Renderer;

/// Six faces, two triangles each, counter-clockwise seen from outside.
///
/// Per-face brightness fakes a fixed light: front 1.0, back 0.9,
/// top/bottom 0.8, sides 0.7.
pub const CUBE_FACES: [Face; 6] = [
    // Front (z = 0)
    Face {
        shade: 1.0,
        triangles: &[
            [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        ],
    },
    // Back (z = 1)
    Face {
        shade: 0.9,
        triangles: &[
            [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0],
        ],
    },
    // Top (y = 1)
    Face {
        shade: 0.8,
        triangles: &[
            [0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            [0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0],
        ],
    },
    // Bottom (y = 0)
    Face {
        shade: 0.8,
        triangles: &[
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        ],
    },
    // Left (x = 0)
    Face {
        shade: 0.7,
        triangles: &[
            [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0],
        ],
    },
    // Right (x = 1)
    Face {
        shade: 0.7,
        triangles: &[
            [1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0],
            [1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0],
        ],
    },
];

pub const CUBE_TRIANGLES: usize = 12;

pub fn draw_cube(color: Rgba, renderer: &mut dyn Renderer) {
    draw_faces(&CUBE_FACES, color, renderer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::faces_outward;
    use crate::render::{DrawCall, RecordingRenderer};

    #[test]
    fn test_cube_emits_twelve_triangles() {
        for color in [Rgba::WHITE, Rgba::new(0.2, 0.4, 0.6, 0.5)] {
            let mut r = RecordingRenderer::new();
            draw_cube(color, &mut r);
            assert_eq!(r.triangles_3d().count(), CUBE_TRIANGLES);
            let vertices: usize = r.triangles_3d().map(|t| t.len() / 3).sum();
            assert_eq!(vertices, 36);
        }
    }

    #[test]
    fn test_cube_winding_is_outward() {
        assert!(faces_outward(&CUBE_FACES, [0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_cube_stays_in_unit_space() {
        for face in &CUBE_FACES {
            for t in face.triangles {
                assert!(t.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }

    #[test]
    fn test_cube_face_shading() {
        let mut r = RecordingRenderer::new();
        draw_cube(Rgba::new(1.0, 1.0, 1.0, 1.0), &mut r);
        let shades: Vec<f32> = r
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FragColor(c) => Some(c.r()),
                _ => None,
            })
            .collect();
        assert_eq!(shades, vec![1.0, 0.9, 0.8, 0.8, 0.7, 0.7]);
    }
}
