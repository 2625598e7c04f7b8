/// The BlockyAnimal scene: state, update and render for one frame
use crate::animation::{AnimationState, Joint};
use crate::camera::Orbit;
use crate::clock::{FrameClock, FrameStats, FrameTime};
use crate::config::SceneConfig;
use crate::input::{DragTracker, PointerEvent};
use crate::render::Renderer;
use crate::rig::{self, Rig};
use crate::transform::Matrix4;

/// Everything the robot demo keeps between frames.
///
/// Input handlers call the setters; the frame driver calls [`update`] then
/// [`render`] (or [`frame`] for both). All of it runs on one thread.
///
/// [`update`]: BlockyScene::update
/// [`render`]: BlockyScene::render
/// [`frame`]: BlockyScene::frame
#[derive(Debug, Clone)]
pub struct BlockyScene {
    config: SceneConfig,
    animation: AnimationState,
    orbit: Orbit,
    drag: DragTracker,
    clock: FrameClock,
}

impl BlockyScene {
    pub fn new(config: SceneConfig, start_seconds: f64) -> Self {
        Self {
            animation: AnimationState::new(&config),
            orbit: Orbit::new(config.zoom),
            drag: DragTracker::new(),
            clock: FrameClock::new(start_seconds),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn set_joint(&mut self, joint: Joint, degrees: f32) {
        self.animation.set_manual(joint, degrees);
    }

    pub fn set_animated(&mut self, joint: Joint, animated: bool) {
        self.animation.set_animated(joint, animated);
    }

    pub fn set_all_animated(&mut self, animated: bool) {
        self.animation.set_all_animated(animated);
    }

    pub fn set_amplitude(&mut self, joint: Joint, degrees: f32) {
        self.animation.set_amplitude(joint, degrees);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.orbit.zoom = zoom;
    }

    /// Orbit directly by an NDC delta (keyboard nudges use this).
    pub fn orbit_by(&mut self, delta: [f32; 2]) {
        self.orbit.drag(delta, self.config.drag_sensitivity);
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        if let Some(delta) = self.drag.handle(event) {
            self.orbit_by(delta);
        }
    }

    /// Reset joints, camera and drag state together.
    pub fn clear(&mut self) {
        self.animation.reset();
        self.orbit.reset();
        self.drag.reset();
        log::debug!("scene reset to defaults");
    }

    /// Advance the clock and the animated joints.
    pub fn update(&mut self, now_seconds: f64) -> FrameTime {
        let time = self.clock.tick(now_seconds);
        self.animation.update(time.elapsed);
        time
    }

    pub fn global_matrix(&self) -> Matrix4 {
        self.orbit.global_matrix(
            self.animation.angle(Joint::CameraYaw),
            self.animation.angle(Joint::CameraPitch),
        )
    }

    pub fn rig(&self) -> Rig {
        rig::compose_robot(&self.animation, &self.config)
    }

    /// Clear, upload the camera, draw the rig.
    pub fn render(&self, renderer: &mut dyn Renderer) -> FrameStats {
        renderer.clear();
        renderer.set_global_matrix(&self.global_matrix());
        let rig = self.rig();
        let primitives = rig.render(renderer);
        FrameStats {
            shapes: rig.len(),
            primitives,
            duration_ms: 0.0,
        }
    }

    /// One frame tick: update then render.
    pub fn frame(&mut self, now_seconds: f64, renderer: &mut dyn Renderer) -> FrameStats {
        self.update(now_seconds);
        self.render(renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingRenderer};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_frame_uploads_global_once() {
        let mut scene = BlockyScene::new(SceneConfig::default(), 0.0);
        let mut r = RecordingRenderer::new();
        let stats = scene.frame(0.016, &mut r);

        assert_eq!(r.calls[0], DrawCall::Clear);
        let globals = r
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::GlobalMatrix(_)))
            .count();
        assert_eq!(globals, 1);
        assert_eq!(stats.primitives, r.triangles_3d().count());
        assert_eq!(stats.shapes, scene.rig().len());
    }

    #[test]
    fn test_animated_leg_after_quarter_period() {
        let mut scene = BlockyScene::new(SceneConfig::default(), 10.0);
        scene.set_animated(Joint::LeftLeg, true);
        scene.update(10.0 + FRAC_PI_2);
        assert!((scene.animation().angle(Joint::LeftLeg) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_amplitude_scales_swing() {
        let mut scene = BlockyScene::new(SceneConfig::default(), 0.0);
        scene.set_amplitude(Joint::RightHand, 10.0);
        scene.set_animated(Joint::RightHand, true);
        scene.update(FRAC_PI_2);
        // right side runs half a period behind
        assert!((scene.animation().angle(Joint::RightHand) + 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_orbits_camera() {
        let mut scene = BlockyScene::new(SceneConfig::default(), 0.0);
        scene.pointer(PointerEvent::Down { x: 0.0, y: 0.0 });
        assert!(scene.global_matrix().approx_eq(&Matrix4::identity(), 1e-6));
        scene.pointer(PointerEvent::Move {
            x: 0.5,
            y: 0.0,
            primary_held: true,
        });
        assert!((scene.orbit().drag_yaw - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut scene = BlockyScene::new(SceneConfig::default(), 0.0);
        scene.set_joint(Joint::RightArm, 70.0);
        scene.set_animated(Joint::LeftFoot, true);
        scene.orbit_by([0.3, 0.3]);
        scene.set_zoom(2.0);
        scene.update(1.0);

        scene.clear();
        let fresh = BlockyScene::new(SceneConfig::default(), 0.0);
        assert_eq!(scene.orbit(), fresh.orbit());
        for joint in Joint::ALL {
            assert_eq!(scene.animation().get(joint), fresh.animation().get(joint));
        }
    }
}
