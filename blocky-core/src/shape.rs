/// Shapes: one primitive kind with its own color and transform
use crate::color::Rgba;
use crate::primitives::{cone, cube, prism, sprite};
use crate::render::Renderer;
use crate::transform::Matrix4;

/// The primitive a shape draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Point { position: [f32; 2], size: f32 },
    /// Explicit vertices; `size` is the brush size they were built from.
    Triangle { vertices: [f32; 6], size: f32 },
    Circle { position: [f32; 2], size: f32, segments: u32 },
    Cube,
    Cone { segments: u32 },
    TrianglePrism,
}

impl Primitive {
    /// Triangles (or points) submitted per render.
    pub fn primitive_count(&self) -> usize {
        match *self {
            Primitive::Point { .. } | Primitive::Triangle { .. } => 1,
            Primitive::Circle { segments, .. } => segments as usize,
            Primitive::Cube => cube::CUBE_TRIANGLES,
            Primitive::Cone { segments } => 2 * segments as usize,
            Primitive::TrianglePrism => prism::PRISM_TRIANGLES,
        }
    }
}

/// A drawable instance.
///
/// Color and transform are plain values owned by the shape. Cloning a shape,
/// or building one from another shape's transform, never links the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub color: Rgba,
    pub transform: Matrix4,
}

impl Shape {
    pub fn new(primitive: Primitive, color: Rgba) -> Self {
        Self {
            primitive,
            color,
            transform: Matrix4::identity(),
        }
    }

    pub fn cube(color: Rgba) -> Self {
        Self::new(Primitive::Cube, color)
    }

    pub fn cone(color: Rgba, segments: u32) -> Self {
        Self::new(Primitive::Cone { segments }, color)
    }

    pub fn prism(color: Rgba) -> Self {
        Self::new(Primitive::TrianglePrism, color)
    }

    pub fn point(position: [f32; 2], size: f32, color: Rgba) -> Self {
        Self::new(Primitive::Point { position, size }, color)
    }

    pub fn triangle(vertices: [f32; 6], size: f32, color: Rgba) -> Self {
        Self::new(Primitive::Triangle { vertices, size }, color)
    }

    pub fn circle(position: [f32; 2], size: f32, segments: u32, color: Rgba) -> Self {
        Self::new(
            Primitive::Circle {
                position,
                size,
                segments,
            },
            color,
        )
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    /// Anchor position for the 2D kinds.
    pub fn position(&self) -> Option<[f32; 2]> {
        match self.primitive {
            Primitive::Point { position, .. } | Primitive::Circle { position, .. } => {
                Some(position)
            }
            Primitive::Triangle { vertices, .. } => Some([vertices[0], vertices[1]]),
            _ => None,
        }
    }

    pub fn size(&self) -> Option<f32> {
        match self.primitive {
            Primitive::Point { size, .. }
            | Primitive::Triangle { size, .. }
            | Primitive::Circle { size, .. } => Some(size),
            _ => None,
        }
    }

    /// Upload color, upload transform, then submit the geometry.
    ///
    /// Both uniforms are always set; nothing is assumed about what the
    /// previous shape left in the pipeline.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.set_frag_color(self.color);
        renderer.set_model_matrix(&self.transform);

        match self.primitive {
            Primitive::Point { position, size } => sprite::draw_point(position, size, renderer),
            Primitive::Triangle { vertices, .. } => sprite::draw_triangle(&vertices, renderer),
            Primitive::Circle {
                position,
                size,
                segments,
            } => sprite::draw_circle(position, size, segments, renderer),
            Primitive::Cube => cube::draw_cube(self.color, renderer),
            Primitive::Cone { segments } => cone::draw_cone(self.color, segments, renderer),
            Primitive::TrianglePrism => prism::draw_prism(self.color, renderer),
        }
    }
}
