/// Flat 2D primitives for the painting mode
use std::f32::consts::PI;

use crate::render::Renderer;

pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 10;

/// Pixel-ish brush size to clip-space extent.
pub fn extent(size: f32) -> f32 {
    size / 200.0
}

/// Right triangle anchored at `position` with legs of `size / 200`.
pub fn triangle_at(position: [f32; 2], size: f32) -> [f32; 6] {
    let [x, y] = position;
    let d = extent(size);
    [x, y, x + d, y, x, y + d]
}

pub fn draw_point(position: [f32; 2], size: f32, renderer: &mut dyn Renderer) {
    renderer.set_point_size(size);
    renderer.draw_point(position[0], position[1]);
}

pub fn draw_triangle(vertices: &[f32; 6], renderer: &mut dyn Renderer) {
    renderer.draw_triangle_2d(vertices);
}

/// Disk as a fan of `segments` triangles around `position`.
pub fn draw_circle(position: [f32; 2], size: f32, segments: u32, renderer: &mut dyn Renderer) {
    let [x, y] = position;
    let d = extent(size);
    let step = 2.0 * PI / segments.max(1) as f32;
    for i in 0..segments {
        let a1 = i as f32 * step;
        let a2 = a1 + step;
        renderer.draw_triangle_2d(&[
            x,
            y,
            x + a1.cos() * d,
            y + a1.sin() * d,
            x + a2.cos() * d,
            y + a2.sin() * d,
        ]);
    }
}
