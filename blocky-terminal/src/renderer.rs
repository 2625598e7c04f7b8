/// ASCII rasterizer implementing the core render backend
use blocky_core::{CanvasRect, Matrix4, Renderer, Rgba};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    rgb: [f32; 3],
}

const BLANK: Cell = Cell {
    character: ' ',
    rgb: [0.0, 0.0, 0.0],
};

/// ASCII renderer that rasterizes immediate-mode draws into terminal cells.
///
/// Keeps the same uniform state a WebGL program would: global matrix, model
/// matrix, fragment color and point size. Depth uses NDC z with a "less"
/// test, like `gl.enable(gl.DEPTH_TEST)`.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    cell_buffer: Vec<Cell>,
    depth_test: bool,
    global: Matrix4,
    model: Matrix4,
    color: Rgba,
    point_size: f32,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            cell_buffer: vec![BLANK; size],
            depth_test: true,
            global: Matrix4::identity(),
            model: Matrix4::identity(),
            color: Rgba::WHITE,
            point_size: 1.0,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self {
            depth_test: self.depth_test,
            ..Self::new(width, height)
        };
    }

    pub fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    /// The square region clip space maps onto, in cell coordinates.
    pub fn viewport(&self) -> CanvasRect {
        let w = self.width as f32;
        let h = self.height as f32;
        let view_w = w.min(h * CELL_ASPECT);
        let view_h = view_w / CELL_ASPECT;
        CanvasRect::new((w - view_w) / 2.0, (h - view_h) / 2.0, view_w, view_h)
    }

    /// Character at a cell, for inspection.
    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.cell_buffer[y * self.width + x].character
    }

    fn to_screen(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        let view = self.viewport();
        (
            view.left + (ndc_x + 1.0) * 0.5 * view.width,
            view.top + (1.0 - ndc_y) * 0.5 * view.height,
        )
    }

    fn shade(&self) -> Cell {
        let lum = self.color.luminance().clamp(0.0, 1.0);
        // never pick the blank so dark parts stay visible
        let index = 1 + (lum * (LUMINOSITY_RAMP.len() - 2) as f32).round() as usize;
        Cell {
            character: LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)],
            rgb: [self.color.r(), self.color.g(), self.color.b()],
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32, cell: Cell) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if self.depth_test {
            if !(-1.0..=1.0).contains(&depth) || depth >= self.depth_buffer[idx] {
                return;
            }
            self.depth_buffer[idx] = depth;
        }

        let alpha = self.color.a().clamp(0.0, 1.0);
        let under = self.cell_buffer[idx];
        let mut rgb = cell.rgb;
        for (c, u) in rgb.iter_mut().zip(under.rgb) {
            *c = *c * alpha + u * (1.0 - alpha);
        }
        self.cell_buffer[idx] = Cell {
            character: if alpha < 0.5 && under.character != ' ' {
                under.character
            } else {
                cell.character
            },
            rgb,
        };
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    // Both windings are drawn; nothing is culled.
                    let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                        || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
                    if inside {
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                        self.plot(x, y, depth, cell);
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cell_buffer[y * self.width + x];
                let [r, g, b] = cell.rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
                writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                writer.queue(Print(cell.character))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// Plain characters without color codes.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cell_buffer.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|c| c.character));
            out.push('\n');
        }
        out
    }
}

impl Renderer for AsciiRenderer {
    fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.cell_buffer.fill(BLANK);
    }

    fn set_global_matrix(&mut self, matrix: &Matrix4) {
        self.global = *matrix;
    }

    fn set_model_matrix(&mut self, matrix: &Matrix4) {
        self.model = *matrix;
    }

    fn set_frag_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = size;
    }

    fn draw_triangle_3d(&mut self, vertices: &[f32; 9]) {
        let mvp = self.global * self.model;
        let mut coords = [(0.0, 0.0, 0.0); 3];
        for (slot, v) in coords.iter_mut().zip(vertices.chunks_exact(3)) {
            let [x, y, z] = mvp.transform_point([v[0], v[1], v[2]]);
            let (sx, sy) = self.to_screen(x, y);
            *slot = (sx, sy, z);
        }
        let cell = self.shade();
        self.rasterize_triangle(&coords, cell);
    }

    fn draw_triangle_2d(&mut self, vertices: &[f32; 6]) {
        self.draw_triangle_3d(&[
            vertices[0], vertices[1], 0.0, vertices[2], vertices[3], 0.0, vertices[4], vertices[5],
            0.0,
        ]);
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        let [x, y, z] = (self.global * self.model).transform_point([x, y, 0.0]);
        let (sx, sy) = self.to_screen(x, y);
        // point sizes are in pixels; one cell of radius per 16
        let radius = (self.point_size / 16.0).floor() as i32;
        let cell = self.shade();
        for dy in -radius..=radius {
            for dx in -2 * radius..=2 * radius {
                self.plot(sx.floor() as i32 + dx, sy.floor() as i32 + dy, z, cell);
            }
        }
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocky_core::{BlockyScene, Painting, SceneConfig};

    fn big_triangle(z: f32) -> [f32; 9] {
        [-1.0, -1.0, z, 3.0, -1.0, z, -1.0, 3.0, z]
    }

    #[test]
    fn test_triangle_covers_center() {
        let mut r = AsciiRenderer::new(40, 20);
        r.clear();
        r.set_frag_color(Rgba::WHITE);
        r.draw_triangle_3d(&big_triangle(0.0));
        assert_eq!(r.char_at(20, 10), '@');
    }

    #[test]
    fn test_depth_keeps_nearer() {
        let mut r = AsciiRenderer::new(40, 20);
        r.clear();
        r.set_frag_color(Rgba::new(0.3, 0.3, 0.3, 1.0));
        r.draw_triangle_3d(&big_triangle(-0.5));
        let near = r.char_at(20, 10);

        r.set_frag_color(Rgba::WHITE);
        r.draw_triangle_3d(&big_triangle(0.5));
        assert_eq!(r.char_at(20, 10), near);

        r.set_depth_test(false);
        r.draw_triangle_3d(&big_triangle(0.5));
        assert_eq!(r.char_at(20, 10), '@');
    }

    #[test]
    fn test_model_matrix_moves_geometry() {
        let mut r = AsciiRenderer::new(40, 20);
        r.clear();
        let mut model = Matrix4::identity();
        model.translate(5.0, 0.0, 0.0);
        r.set_model_matrix(&model);
        r.draw_triangle_3d(&big_triangle(0.0));
        assert_eq!(r.char_at(20, 10), ' ');
    }

    #[test]
    fn test_point_lands_in_center() {
        let mut r = AsciiRenderer::new(40, 20);
        r.set_depth_test(false);
        r.clear();
        r.draw_point(0.0, 0.0);
        assert_ne!(r.char_at(20, 10), ' ');
    }

    #[test]
    fn test_scene_and_painting_draw_something() {
        let mut r = AsciiRenderer::new(80, 40);
        let mut scene = BlockyScene::new(SceneConfig::default(), 0.0);
        scene.frame(0.5, &mut r);
        assert!(r.to_text().chars().any(|c| c != ' ' && c != '\n'));

        let mut painting = Painting::new(&SceneConfig::default());
        painting.show_portrait();
        r.set_depth_test(false);
        painting.render(&mut r);
        assert!(r.to_text().chars().any(|c| c != ' ' && c != '\n'));
    }

    #[test]
    fn test_viewport_is_square_in_pixels() {
        let r = AsciiRenderer::new(100, 20);
        let view = r.viewport();
        assert_eq!(view.width, 40.0);
        assert_eq!(view.height, 20.0);
        assert_eq!(view.left, 30.0);
    }
}
