/// Cone approximated by an N-gon fan to an apex
use std::f32::consts::PI;

use crate::color::Rgba;
use crate::render::Renderer;

pub const DEFAULT_CONE_SEGMENTS: u32 = 100;
pub const CONE_RADIUS: f32 = 0.2;
pub const CONE_APEX: [f32; 3] = [0.5, 0.95, 0.5];
pub const CONE_BASE_Y: f32 = 0.05;

/// Rim vertex `i` of an `segments`-gon.
pub fn rim_vertex(i: u32, segments: u32) -> [f32; 3] {
    let theta = 2.0 * PI / segments as f32;
    let angle = i as f32 * theta;
    [
        0.5 + CONE_RADIUS * angle.cos(),
        CONE_BASE_Y,
        0.5 + CONE_RADIUS * angle.sin(),
    ]
}

/// Lateral triangles first (apex fan), then the base (center fan).
///
/// Both fans wind so their normals point away from the solid.
#[derive(Debug, Clone)]
pub struct ConeTriangles {
    segments: u32,
    index: u32,
}

impl ConeTriangles {
    pub fn new(segments: u32) -> Self {
        Self { segments, index: 0 }
    }
}

impl Iterator for ConeTriangles {
    type Item = [f32; 9];

    fn next(&mut self) -> Option<[f32; 9]> {
        let n = self.segments;
        if self.index >= 2 * n {
            return None;
        }
        let i = self.index % n;
        let a = rim_vertex(i, n);
        let b = rim_vertex(i + 1, n);
        let triangle = if self.index < n {
            let p = CONE_APEX;
            [p[0], p[1], p[2], b[0], b[1], b[2], a[0], a[1], a[2]]
        } else {
            let c = [0.5, CONE_BASE_Y, 0.5];
            [c[0], c[1], c[2], a[0], a[1], a[2], b[0], b[1], b[2]]
        };
        self.index += 1;
        Some(triangle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (2 * self.segments).saturating_sub(self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ConeTriangles {}

pub fn draw_cone(color: Rgba, segments: u32, renderer: &mut dyn Renderer) {
    renderer.set_frag_color(color);
    for triangle in ConeTriangles::new(segments) {
        renderer.draw_triangle_3d(&triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{triangle_centroid, triangle_normal};
    use crate::render::RecordingRenderer;

    #[test]
    fn test_cone_triangle_count() {
        for n in [3, 12, 100] {
            let mut r = RecordingRenderer::new();
            draw_cone(Rgba::WHITE, n, &mut r);
            assert_eq!(r.triangles_3d().count(), 2 * n as usize);
            assert_eq!(ConeTriangles::new(n).len(), 2 * n as usize);
        }
    }

    #[test]
    fn test_rim_on_radius() {
        for t in ConeTriangles::new(DEFAULT_CONE_SEGMENTS) {
            for v in t.chunks(3) {
                if (v[1] - CONE_BASE_Y).abs() > 1e-6 {
                    continue;
                }
                let d = ((v[0] - 0.5).powi(2) + (v[2] - 0.5).powi(2)).sqrt();
                // base center or a rim vertex
                assert!(d < 1e-6 || (d - CONE_RADIUS).abs() < 1e-5, "d = {}", d);
            }
        }
    }

    #[test]
    fn test_cone_normals_point_out() {
        for t in ConeTriangles::new(24) {
            let n = triangle_normal(&t);
            let c = triangle_centroid(&t);
            let out = [c[0] - 0.5, c[1] - 0.3, c[2] - 0.5];
            assert!(n[0] * out[0] + n[1] * out[1] + n[2] * out[2] > 0.0);
        }
    }

    #[test]
    fn test_zero_segments_emits_nothing() {
        assert_eq!(ConeTriangles::new(0).count(), 0);
    }
}
