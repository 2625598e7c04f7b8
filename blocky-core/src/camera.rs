/// Camera orbit and the global rotate matrix
use crate::transform::Matrix4;

/// Mouse-driven orbit offsets plus zoom (angles in degrees).
///
/// Slider yaw/pitch live in the animation state as joints; the orbit only
/// holds what drags accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub zoom: f32,
    pub drag_yaw: f32,
    pub drag_pitch: f32,
    initial_zoom: f32,
}

impl Orbit {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom,
            drag_yaw: 0.0,
            drag_pitch: 0.0,
            initial_zoom: zoom,
        }
    }

    /// Accumulate a drag delta given in normalized device coordinates.
    pub fn drag(&mut self, delta: [f32; 2], sensitivity: f32) {
        self.drag_yaw += delta[0] * sensitivity;
        self.drag_pitch += delta[1] * sensitivity;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial_zoom);
    }

    /// `rotate(yaw, Y) * rotate(pitch, X) * scale(zoom) * rotate(-drag_yaw, Y) * rotate(drag_pitch, X)`
    pub fn global_matrix(&self, yaw: f32, pitch: f32) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.rotate(yaw, 0.0, 1.0, 0.0)
            .rotate(pitch, 1.0, 0.0, 0.0)
            .scale(self.zoom, self.zoom, self.zoom)
            .rotate(-self.drag_yaw, 0.0, 1.0, 0.0)
            .rotate(self.drag_pitch, 1.0, 0.0, 0.0);
        m
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new(1.0)
    }
}
