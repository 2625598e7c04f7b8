/// Blocky Core - transform composition and primitives for the BlockyAnimal demos
///
/// This library holds the platform-free part of the demos: the matrix type,
/// the primitive generators, the robot rig, the animation/input state and
/// the 2D painting tool. Frontends supply a [`Renderer`] and a clock.
pub mod animation;
pub mod app;
pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod input;
pub mod paint;
pub mod portrait;
pub mod primitives;
pub mod render;
pub mod rig;
pub mod shape;
pub mod transform;

// Re-export commonly used types
pub use animation::{AnimationState, Joint, JointMode};
pub use app::BlockyScene;
pub use camera::Orbit;
pub use clock::{FrameClock, FrameStats, FrameTime};
pub use color::Rgba;
pub use config::SceneConfig;
pub use input::{CanvasRect, DragTracker, PointerEvent};
pub use paint::{Brush, BrushKind, Channel, Painting};
pub use render::{DrawCall, RecordingRenderer, Renderer};
pub use rig::{Part, Rig};
pub use shape::{Primitive, Shape};
pub use transform::Matrix4;
