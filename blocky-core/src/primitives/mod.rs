/// Primitive mesh generators.
///
/// Solids live in a unit local space (the cube spans `[0, 1]^3`) and are
/// emitted straight into a [`Renderer`] one triangle at a time. Nothing is
/// retained between frames.
pub mod cone;
pub mod cube;
pub mod prism;
pub mod sprite;

use crate::color::Rgba;
use crate::render::Renderer;

pub use cone::{ConeTriangles, DEFAULT_CONE_SEGMENTS};
pub use sprite::DEFAULT_CIRCLE_SEGMENTS;

/// A flat-shaded face of a solid.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Brightness factor applied to the base color.
    pub shade: f32,
    pub triangles: &'static [[f32; 9]],
}

/// Emit faces, re-uploading the shaded color before each one.
pub(crate) fn draw_faces(faces: &[Face], color: Rgba, renderer: &mut dyn Renderer) {
    for face in faces {
        renderer.set_frag_color(color.shaded(face.shade));
        for triangle in face.triangles {
            renderer.draw_triangle_3d(triangle);
        }
    }
}

/// Unnormalized face normal from the winding order.
pub fn triangle_normal(t: &[f32; 9]) -> [f32; 3] {
    let e1 = [t[3] - t[0], t[4] - t[1], t[5] - t[2]];
    let e2 = [t[6] - t[0], t[7] - t[1], t[8] - t[2]];
    [
        e1[1] * e2[2] - e1[2] * e2[1],
        e1[2] * e2[0] - e1[0] * e2[2],
        e1[0] * e2[1] - e1[1] * e2[0],
    ]
}

/// Centroid of a triangle.
pub fn triangle_centroid(t: &[f32; 9]) -> [f32; 3] {
    [
        (t[0] + t[3] + t[6]) / 3.0,
        (t[1] + t[4] + t[7]) / 3.0,
        (t[2] + t[5] + t[8]) / 3.0,
    ]
}

#[cfg(test)]
pub(crate) fn faces_outward(faces: &[Face], center: [f32; 3]) -> bool {
    faces.iter().flat_map(|f| f.triangles.iter()).all(|t| {
        let n = triangle_normal(t);
        let c = triangle_centroid(t);
        let out = [c[0] - center[0], c[1] - center[1], c[2] - center[2]];
        n[0] * out[0] + n[1] * out[1] + n[2] * out[2] > 0.0
    })
}
