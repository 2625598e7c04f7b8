/// Built-in reference portrait for the painting mode
use crate::color::Rgba;
use crate::render::Renderer;
use crate::transform::Matrix4;

const SHIRT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.3);
const TIE: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
const SKIN: Rgba = Rgba::new(0.94, 0.76, 0.68, 1.0);
const HAIR: Rgba = Rgba::new(0.22, 0.22, 0.22, 1.0);
const EYE: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
const LIP: Rgba = Rgba::new(0.95, 0.60, 0.67, 1.0);
const LIP_INNER: Rgba = Rgba::new(0.87, 0.42, 0.48, 1.0);

/// Colored triangles in clip space, drawn in order.
pub const PORTRAIT: [(Rgba, [f32; 6]); 33] = [
    // shirt
    (SHIRT, [0.60, 0.00, 0.50, -1.00, -0.60, 0.00]),
    (SHIRT, [-0.60, 0.00, -0.50, -1.00, 0.50, -1.00]),
    (TIE, [-0.45, 0.00, 0.45, 0.00, 0.00, -0.45]),
    // head
    (SKIN, [-0.20, 0.00, 0.20, 0.00, -0.20, 0.40]),
    (SKIN, [-0.20, 0.40, 0.20, 0.40, 0.20, 0.00]),
    // hair
    (SHIRT, [-0.20, 0.30, -0.20, 0.40, -0.15, 0.40]),
    (SHIRT, [0.20, 0.30, 0.20, 0.40, 0.15, 0.40]),
    (HAIR, [-0.20, 0.40, -0.15, 0.40, -0.15, 0.50]),
    (HAIR, [0.20, 0.40, 0.15, 0.40, 0.15, 0.50]),
    (HAIR, [-0.15, 0.40, -0.15, 0.50, 0.15, 0.50]),
    (HAIR, [0.15, 0.40, 0.15, 0.50, -0.15, 0.40]),
    // chin
    (SKIN, [-0.20, 0.00, -0.10, 0.00, -0.10, -0.05]),
    (SKIN, [0.20, 0.00, 0.10, 0.00, 0.10, -0.05]),
    (SKIN, [-0.10, 0.00, -0.10, -0.05, 0.10, -0.05]),
    (SKIN, [0.10, 0.00, 0.10, -0.05, -0.10, 0.00]),
    (SKIN, [-0.10, -0.05, -0.07, -0.10, 0.07, -0.10]),
    (SKIN, [0.10, -0.05, 0.07, -0.10, -0.10, -0.05]),
    // eyebrows
    (HAIR, [-0.05, 0.30, -0.14, 0.28, -0.04, 0.27]),
    (HAIR, [0.05, 0.30, 0.14, 0.28, 0.04, 0.27]),
    (HAIR, [-0.05, 0.30, -0.07, 0.27, -0.02, 0.20]),
    (HAIR, [0.05, 0.30, 0.07, 0.27, 0.02, 0.20]),
    // eyes
    (EYE, [-0.11, 0.23, -0.08, 0.21, -0.05, 0.23]),
    (EYE, [0.11, 0.23, 0.08, 0.21, 0.05, 0.23]),
    (EYE, [-0.11, 0.23, -0.08, 0.24, -0.05, 0.23]),
    (EYE, [0.11, 0.23, 0.08, 0.24, 0.05, 0.23]),
    // mustache
    (HAIR, [-0.08, 0.06, -0.06, 0.10, -0.06, 0.14]),
    (HAIR, [0.08, 0.06, 0.06, 0.10, 0.06, 0.14]),
    (HAIR, [0.06, 0.10, -0.06, 0.10, -0.06, 0.14]),
    (HAIR, [-0.06, 0.10, 0.06, 0.10, 0.06, 0.14]),
    // mouth
    (LIP, [-0.05, 0.07, -0.05, 0.10, 0.05, 0.07]),
    (LIP, [0.05, 0.07, 0.05, 0.10, -0.05, 0.10]),
    (LIP_INNER, [-0.03, 0.07, -0.03, 0.10, 0.03, 0.10]),
    (LIP_INNER, [0.03, 0.07, 0.03, 0.10, -0.03, 0.07]),
];

/// Draw the portrait; returns the number of triangles.
pub fn draw_portrait(renderer: &mut dyn Renderer) -> usize {
    renderer.set_model_matrix(&Matrix4::identity());
    for (color, vertices) in &PORTRAIT {
        renderer.set_frag_color(*color);
        renderer.draw_triangle_2d(vertices);
    }
    PORTRAIT.len()
}
