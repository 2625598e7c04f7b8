/// Joint angles and their manual/animated state machine.
///
/// Each joint either follows the last slider value (`Manual`) or a sinusoid
/// of the frame clock (`Animated`). The two sources never mix: slider input
/// arriving while a joint is animated is remembered and shown as soon as the
/// animation is switched off.
use std::f32::consts::PI;

use crate::config::SceneConfig;

/// Named animatable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Joint {
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
    CameraYaw,
    CameraPitch,
}

impl Joint {
    pub const COUNT: usize = 10;

    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::LeftArm,
        Joint::RightArm,
        Joint::LeftHand,
        Joint::RightHand,
        Joint::LeftLeg,
        Joint::RightLeg,
        Joint::LeftFoot,
        Joint::RightFoot,
        Joint::CameraYaw,
        Joint::CameraPitch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Joint::LeftArm => "left_arm",
            Joint::RightArm => "right_arm",
            Joint::LeftHand => "left_hand",
            Joint::RightHand => "right_hand",
            Joint::LeftLeg => "left_leg",
            Joint::RightLeg => "right_leg",
            Joint::LeftFoot => "left_foot",
            Joint::RightFoot => "right_foot",
            Joint::CameraYaw => "camera_yaw",
            Joint::CameraPitch => "camera_pitch",
        }
    }

    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::ALL.iter().copied().find(|j| j.name() == name)
    }

    /// Position in [`Joint::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_camera(&self) -> bool {
        matches!(self, Joint::CameraYaw | Joint::CameraPitch)
    }

    fn default_amplitude(&self, config: &SceneConfig) -> f32 {
        match self {
            Joint::LeftArm | Joint::RightArm | Joint::LeftLeg | Joint::RightLeg => {
                config.limb_amplitude
            }
            Joint::LeftHand | Joint::RightHand | Joint::LeftFoot | Joint::RightFoot => {
                config.extremity_amplitude
            }
            Joint::CameraYaw | Joint::CameraPitch => config.camera_amplitude,
        }
    }

    /// Right-side limbs swing in antiphase so the gait alternates.
    fn default_phase(&self) -> f32 {
        match self {
            Joint::RightArm | Joint::RightHand | Joint::RightLeg | Joint::RightFoot => PI,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointMode {
    Manual,
    Animated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointState {
    /// Last slider value.
    pub manual: f32,
    /// Value the rig reads this frame.
    pub current: f32,
    pub mode: JointMode,
    pub amplitude: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl JointState {
    fn new(amplitude: f32, phase: f32) -> Self {
        Self {
            manual: 0.0,
            current: 0.0,
            mode: JointMode::Manual,
            amplitude,
            phase,
        }
    }
}

/// Process-wide animation state, owned explicitly by the scene.
#[derive(Debug, Clone)]
pub struct AnimationState {
    joints: [JointState; Joint::COUNT],
    defaults: [JointState; Joint::COUNT],
}

impl AnimationState {
    pub fn new(config: &SceneConfig) -> Self {
        let defaults = Joint::ALL
            .map(|j| JointState::new(j.default_amplitude(config), j.default_phase()));
        Self {
            joints: defaults,
            defaults,
        }
    }

    pub fn get(&self, joint: Joint) -> &JointState {
        &self.joints[joint.index()]
    }

    /// Value the rig reads this frame, in degrees.
    pub fn angle(&self, joint: Joint) -> f32 {
        self.get(joint).current
    }

    pub fn mode(&self, joint: Joint) -> JointMode {
        self.get(joint).mode
    }

    /// Slider input.
    pub fn set_manual(&mut self, joint: Joint, value: f32) {
        let state = &mut self.joints[joint.index()];
        state.manual = value;
        if state.mode == JointMode::Manual {
            state.current = value;
        }
    }

    /// Switch a joint between animated and manual.
    ///
    /// Turning animation off freezes the joint at its last manual value.
    pub fn set_animated(&mut self, joint: Joint, animated: bool) {
        let state = &mut self.joints[joint.index()];
        if animated {
            state.mode = JointMode::Animated;
        } else {
            state.mode = JointMode::Manual;
            state.current = state.manual;
        }
        log::debug!("joint {} animated={}", joint.name(), animated);
    }

    pub fn set_all_animated(&mut self, animated: bool) {
        for joint in Joint::ALL {
            if !joint.is_camera() {
                self.set_animated(joint, animated);
            }
        }
    }

    /// Swing in degrees for an animated joint.
    pub fn set_amplitude(&mut self, joint: Joint, amplitude: f32) {
        self.joints[joint.index()].amplitude = amplitude;
    }

    /// Advance animated joints to `elapsed` seconds since start.
    pub fn update(&mut self, elapsed: f32) {
        for state in &mut self.joints {
            if state.mode == JointMode::Animated {
                state.current = state.amplitude * (elapsed + state.phase).sin();
            }
        }
    }

    /// Back to defaults: every joint manual at zero.
    pub fn reset(&mut self) {
        self.joints = self.defaults;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
