/// The backend seam between the scene code and a rasterizer.
///
/// A [`Renderer`] mirrors the small slice of a WebGL program the demos use:
/// three uniforms (`u_GlobalRotateMatrix`, `u_ModelMatrix`, `u_FragColor`),
/// a point size, and immediate per-primitive draws. Uniform state is
/// whatever the last setter left behind, so every shape sets its own color
/// and model matrix before drawing.
use crate::color::Rgba;
use crate::transform::Matrix4;

pub trait Renderer {
    /// Clear color and depth.
    fn clear(&mut self);

    /// Camera transform applied ahead of every model matrix.
    fn set_global_matrix(&mut self, matrix: &Matrix4);

    fn set_model_matrix(&mut self, matrix: &Matrix4);

    fn set_frag_color(&mut self, color: Rgba);

    fn set_point_size(&mut self, size: f32);

    /// One triangle in model space, three `(x, y, z)` vertices.
    fn draw_triangle_3d(&mut self, vertices: &[f32; 9]);

    /// One triangle in the z = 0 plane, three `(x, y)` vertices.
    fn draw_triangle_2d(&mut self, vertices: &[f32; 6]);

    fn draw_point(&mut self, x: f32, y: f32);
}

/// A single recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    GlobalMatrix(Matrix4),
    ModelMatrix(Matrix4),
    FragColor(Rgba),
    PointSize(f32),
    Triangle3d([f32; 9]),
    Triangle2d([f32; 6]),
    Point([f32; 2]),
}

/// A renderer that only records what it was asked to do.
///
/// Handy for tests and for headless inspection of a frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangles_3d(&self) -> impl Iterator<Item = &[f32; 9]> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Triangle3d(t) => Some(t),
            _ => None,
        })
    }

    pub fn triangles_2d(&self) -> impl Iterator<Item = &[f32; 6]> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Triangle2d(t) => Some(t),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &[f32; 2]> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Point(p) => Some(p),
            _ => None,
        })
    }

    /// Number of primitives of any kind.
    pub fn primitive_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCall::Triangle3d(_) | DrawCall::Triangle2d(_) | DrawCall::Point(_)
                )
            })
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_global_matrix(&mut self, matrix: &Matrix4) {
        self.calls.push(DrawCall::GlobalMatrix(*matrix));
    }

    fn set_model_matrix(&mut self, matrix: &Matrix4) {
        self.calls.push(DrawCall::ModelMatrix(*matrix));
    }

    fn set_frag_color(&mut self, color: Rgba) {
        self.calls.push(DrawCall::FragColor(color));
    }

    fn set_point_size(&mut self, size: f32) {
        self.calls.push(DrawCall::PointSize(size));
    }

    fn draw_triangle_3d(&mut self, vertices: &[f32; 9]) {
        self.calls.push(DrawCall::Triangle3d(*vertices));
    }

    fn draw_triangle_2d(&mut self, vertices: &[f32; 6]) {
        self.calls.push(DrawCall::Triangle2d(*vertices));
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::Point([x, y]));
    }
}
