/// The ColoredPoints painting tool.
///
/// Clicks append shapes built from the current brush; every frame clears
/// and replays the whole list.
use crate::color::Rgba;
use crate::config::SceneConfig;
use crate::input::PointerEvent;
use crate::portrait;
use crate::primitives::sprite;
use crate::render::Renderer;
use crate::shape::Shape;
use crate::transform::Matrix4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushKind {
    Point,
    Triangle,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Current brush selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub color: Rgba,
    pub size: f32,
    pub kind: BrushKind,
    pub circle_segments: u32,
}

impl Brush {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            color: Rgba::WHITE,
            size: config.brush_size,
            kind: BrushKind::Point,
            circle_segments: config.circle_segments,
        }
    }

    /// Channel slider, `percent` in 0..=100.
    pub fn set_channel(&mut self, channel: Channel, percent: f32) {
        let index = match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        };
        self.color.0[index] = percent / 100.0;
    }

    /// Build a shape at `position`, copying the brush color.
    pub fn make_shape(&self, position: [f32; 2]) -> Shape {
        match self.kind {
            BrushKind::Point => Shape::point(position, self.size, self.color),
            BrushKind::Triangle => {
                Shape::triangle(sprite::triangle_at(position, self.size), self.size, self.color)
            }
            BrushKind::Circle => {
                Shape::circle(position, self.size, self.circle_segments, self.color)
            }
        }
    }
}

/// The 2D shape list and brush.
#[derive(Debug, Clone)]
pub struct Painting {
    pub brush: Brush,
    shapes: Vec<Shape>,
    portrait: bool,
}

impl Painting {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            brush: Brush::new(config),
            shapes: Vec::new(),
            portrait: false,
        }
    }

    /// Append a shape at `position` (NDC).
    pub fn click(&mut self, position: [f32; 2]) -> &Shape {
        let shape = self.brush.make_shape(position);
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    /// Paint on press and on moves with the primary button held.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<&Shape> {
        match event {
            PointerEvent::Down { x, y }
            | PointerEvent::Move {
                x,
                y,
                primary_held: true,
            } => Some(self.click([x, y])),
            _ => None,
        }
    }

    /// Drop every shape and the portrait. Clearing twice is the same as once.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.portrait = false;
        log::debug!("painting cleared");
    }

    /// Show the reference portrait under the painted shapes until cleared.
    pub fn show_portrait(&mut self) {
        self.portrait = true;
    }

    pub fn portrait_visible(&self) -> bool {
        self.portrait
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Clear the target, then replay the portrait (if shown) and every
    /// shape. Returns the number of shapes drawn.
    pub fn render(&self, renderer: &mut dyn Renderer) -> usize {
        renderer.clear();
        renderer.set_global_matrix(&Matrix4::identity());
        if self.portrait {
            portrait::draw_portrait(renderer);
        }
        for shape in &self.shapes {
            shape.render(renderer);
        }
        self.shapes.len()
    }

    /// Primitives submitted by `render`.
    pub fn primitive_count(&self) -> usize {
        let base = if self.portrait {
            portrait::PORTRAIT.len()
        } else {
            0
        };
        base + self
            .shapes
            .iter()
            .map(|s| s.primitive.primitive_count())
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CanvasRect;
    use crate::render::RecordingRenderer;
    use crate::shape::Primitive;

    #[test]
    fn test_center_click_makes_white_point() {
        let mut painting = Painting::new(&SceneConfig::default());
        let rect = CanvasRect::new(0.0, 0.0, 400.0, 400.0);
        let shape = painting.click(rect.to_ndc(200.0, 200.0)).clone();

        let [x, y] = shape.position().unwrap();
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
        assert_eq!(shape.color, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(shape.size(), Some(5.0));
        assert_eq!(painting.len(), 1);

        let mut r = RecordingRenderer::new();
        assert_eq!(painting.render(&mut r), 1);
        assert_eq!(r.points().count(), 1);
        assert_eq!(r.primitive_count(), 1);
    }

    #[test]
    fn test_pointer_paints_on_press_and_drag() {
        let mut painting = Painting::new(&SceneConfig::default());
        let hover = PointerEvent::Move {
            x: 0.1,
            y: 0.1,
            primary_held: false,
        };
        assert!(painting.pointer(hover).is_none());
        assert!(painting.is_empty());

        let pressed = painting.pointer(PointerEvent::Down { x: 0.2, y: 0.3 });
        assert_eq!(pressed.and_then(Shape::position), Some([0.2, 0.3]));

        painting.pointer(PointerEvent::Move {
            x: 0.4,
            y: 0.3,
            primary_held: true,
        });
        assert_eq!(painting.len(), 2);

        assert!(painting.pointer(PointerEvent::Up).is_none());
        assert_eq!(painting.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut painting = Painting::new(&SceneConfig::default());
        painting.click([0.1, 0.1]);
        painting.click([0.2, 0.2]);
        painting.clear();

        let mut r = RecordingRenderer::new();
        assert_eq!(painting.render(&mut r), 0);
        assert_eq!(r.primitive_count(), 0);

        painting.clear();
        assert!(painting.is_empty());
    }

    #[test]
    fn test_brush_color_is_copied() {
        let mut painting = Painting::new(&SceneConfig::default());
        painting.brush.color = Rgba::RED;
        painting.click([0.0, 0.0]);
        painting.brush.set_channel(Channel::Green, 50.0);
        painting.click([0.5, 0.0]);

        assert_eq!(painting.shapes()[0].color, Rgba::RED);
        assert_eq!(painting.shapes()[1].color, Rgba::new(1.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_brush_kinds() {
        let mut painting = Painting::new(&SceneConfig::default());
        painting.brush.kind = BrushKind::Triangle;
        painting.brush.size = 20.0;
        painting.click([0.0, 0.0]);
        painting.brush.kind = BrushKind::Circle;
        painting.click([0.5, 0.5]);

        assert_eq!(
            painting.shapes()[0].primitive,
            Primitive::Triangle {
                vertices: [0.0, 0.0, 0.1, 0.0, 0.0, 0.1],
                size: 20.0,
            }
        );
        let mut r = RecordingRenderer::new();
        painting.render(&mut r);
        assert_eq!(r.triangles_2d().count(), 1 + 10);
        assert_eq!(painting.primitive_count(), 11);
    }

    #[test]
    fn test_portrait_until_clear() {
        let mut painting = Painting::new(&SceneConfig::default());
        painting.show_portrait();
        let mut r = RecordingRenderer::new();
        assert_eq!(painting.render(&mut r), 0);
        assert_eq!(r.triangles_2d().count(), portrait::PORTRAIT.len());

        painting.clear();
        r.reset();
        painting.render(&mut r);
        assert_eq!(r.triangles_2d().count(), 0);
    }
}
