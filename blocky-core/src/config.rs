/// Tunables shared by both demos
use crate::primitives::{DEFAULT_CIRCLE_SEGMENTS, DEFAULT_CONE_SEGMENTS};

/// Scene configuration.
///
/// Frontends build one of these (from CLI flags, or defaults in the
/// browser) and hand it to [`crate::BlockyScene`] and [`crate::Painting`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Segments per cone in the rig.
    pub cone_segments: u32,
    /// Segments per painted circle.
    pub circle_segments: u32,
    /// Degrees of orbit per unit of drag in normalized device coordinates.
    pub drag_sensitivity: f32,
    /// Uniform camera scale.
    pub zoom: f32,
    /// Animation amplitude for arms and legs, in degrees.
    pub limb_amplitude: f32,
    /// Animation amplitude for hands and feet, in degrees.
    pub extremity_amplitude: f32,
    /// Animation amplitude for camera yaw/pitch, in degrees.
    pub camera_amplitude: f32,
    /// Initial brush size for the painter.
    pub brush_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cone_segments: DEFAULT_CONE_SEGMENTS,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            drag_sensitivity: 90.0,
            zoom: 1.0,
            limb_amplitude: 45.0,
            extremity_amplitude: 20.0,
            camera_amplitude: 30.0,
            brush_size: 5.0,
        }
    }
}
