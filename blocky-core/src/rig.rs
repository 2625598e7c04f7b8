/// Scene composer for the BlockyAnimal robot.
///
/// The rig is rebuilt every frame as a flat list of parts. Each part names
/// its parent by index and carries two local transforms:
///
/// - `joint`: the part's frame relative to its parent's frame. By convention
///   this is `translate(pivot) * rotate(angle)`, so joint rotations happen
///   about the pivot.
/// - `mesh`: where the unit primitive sits inside that frame, always
///   `scale(size) * translate(offset)`. It never propagates to children.
///
/// A part's world frame is the fold of `joint` over its ancestor chain, and
/// its rendered transform is `world_frame * mesh`. Parents always precede
/// their children in the list.
use crate::animation::{AnimationState, Joint};
use crate::color::Rgba;
use crate::config::SceneConfig;
use crate::render::Renderer;
use crate::shape::{Primitive, Shape};
use crate::transform::Matrix4;

/// Deepest parent chain the robot uses (body, limb, sub-segment).
pub const MAX_DEPTH: usize = 3;

/// One rigid piece of the rig.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub parent: Option<usize>,
    pub joint: Matrix4,
    pub mesh: Matrix4,
    pub primitive: Primitive,
    pub color: Rgba,
}

impl Part {
    pub fn new(name: &'static str, primitive: Primitive, color: Rgba) -> Self {
        Self {
            name,
            parent: None,
            joint: Matrix4::identity(),
            mesh: Matrix4::identity(),
            primitive,
            color,
        }
    }

    pub fn child_of(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Place the part's frame: pivot translate, then joint rotation.
    pub fn pivot(mut self, at: [f32; 3], degrees: f32, axis: [f32; 3]) -> Self {
        self.joint
            .set_translate(at[0], at[1], at[2])
            .rotate(degrees, axis[0], axis[1], axis[2]);
        self
    }

    /// Size the unit primitive and shift it so `anchor` (in unit space)
    /// lands on the frame origin.
    pub fn extent(mut self, size: [f32; 3], anchor: [f32; 3]) -> Self {
        self.mesh
            .set_identity()
            .scale(size[0], size[1], size[2])
            .translate(-anchor[0], -anchor[1], -anchor[2]);
        self
    }
}

/// An ordered parts list with parent links.
#[derive(Debug, Clone, Default)]
pub struct Rig {
    parts: Vec<Part>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part and return its index.
    ///
    /// # Panics
    /// If the parent index does not refer to an earlier part.
    pub fn push(&mut self, part: Part) -> usize {
        if let Some(parent) = part.parent {
            assert!(
                parent < self.parts.len(),
                "part {} references parent {} before it exists",
                part.name,
                parent
            );
        }
        self.parts.push(part);
        self.parts.len() - 1
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }

    /// Indices from `index` up to the root.
    pub fn ancestors(&self, index: usize) -> Vec<usize> {
        let mut chain = vec![index];
        let mut current = self.parts[index].parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parts[parent].parent;
        }
        chain
    }

    /// Number of parts in the chain from the root to `index`, inclusive.
    pub fn depth(&self, index: usize) -> usize {
        self.ancestors(index).len()
    }

    /// The part's frame in model space: its joints folded root first.
    pub fn world_frame(&self, index: usize) -> Matrix4 {
        self.ancestors(index)
            .iter()
            .rev()
            .fold(Matrix4::identity(), |frame, &i| frame * self.parts[i].joint)
    }

    pub fn world_transform(&self, index: usize) -> Matrix4 {
        self.world_frame(index) * self.parts[index].mesh
    }

    /// Materialize every part as an independent shape.
    pub fn shapes(&self) -> Vec<Shape> {
        (0..self.parts.len())
            .map(|i| {
                let part = &self.parts[i];
                Shape::new(part.primitive, part.color).with_transform(self.world_transform(i))
            })
            .collect()
    }

    /// Render all parts; returns the number of primitives submitted.
    pub fn render(&self, renderer: &mut dyn Renderer) -> usize {
        self.shapes()
            .iter()
            .map(|shape| {
                shape.render(renderer);
                shape.primitive.primitive_count()
            })
            .sum()
    }
}

const BODY: Rgba = Rgba::new(0.42, 0.75, 0.69, 1.0);
const LIMB: Rgba = Rgba::new(0.35, 0.64, 0.58, 1.0);
const SCREEN: Rgba = Rgba::new(0.76, 0.93, 0.80, 1.0);
const FACE: Rgba = Rgba::new(0.10, 0.16, 0.13, 1.0);
const SPEAKER: Rgba = Rgba::new(0.18, 0.38, 0.35, 1.0);
const DPAD: Rgba = Rgba::new(0.95, 0.85, 0.20, 1.0);
const RED_BUTTON: Rgba = Rgba::new(0.90, 0.20, 0.20, 1.0);
const GREEN_BUTTON: Rgba = Rgba::new(0.30, 0.80, 0.30, 1.0);
const BLUE_BUTTON: Rgba = Rgba::new(0.20, 0.40, 0.90, 1.0);
const PLATE: Rgba = Rgba::new(0.15, 0.30, 0.60, 1.0);
const DECAL: Rgba = Rgba::new(0.95, 0.95, 0.95, 1.0);

const X: [f32; 3] = [1.0, 0.0, 0.0];
const Y: [f32; 3] = [0.0, 1.0, 0.0];
const Z: [f32; 3] = [0.0, 0.0, 1.0];

/// Anchors in unit space.
const CENTER: [f32; 3] = [0.5, 0.5, 0.5];
const HANG: [f32; 3] = [0.5, 1.0, 0.5];
/// Sits on the frame origin and extends toward -z (the viewer).
const FRONT: [f32; 3] = [0.5, 0.5, 1.0];
/// Sits on the frame origin and extends toward +z.
const OUTWARD: [f32; 3] = [0.5, 0.5, 0.0];
const CONE_BASE: [f32; 3] = [0.5, 0.05, 0.5];

/// Build this frame's robot from the current joint angles.
///
/// The body is centered at the origin, 0.6 x 0.7 x 0.4, front face at
/// z = -0.2. Everything else hangs off the body frame.
pub fn compose_robot(animation: &AnimationState, config: &SceneConfig) -> Rig {
    let angle = |joint| animation.angle(joint);
    let cone = Primitive::Cone {
        segments: config.cone_segments,
    };
    let mut rig = Rig::new();

    let body = rig.push(
        Part::new("body", Primitive::Cube, BODY)
            .pivot([0.0, 0.1, 0.0], 0.0, Y)
            .extent([0.6, 0.7, 0.4], CENTER),
    );

    // Face
    let screen = rig.push(
        Part::new("screen", Primitive::Cube, SCREEN)
            .child_of(body)
            .pivot([0.0, 0.08, -0.2], 0.0, Y)
            .extent([0.46, 0.34, 0.02], FRONT),
    );
    for (name, x) in [("left_eye", -0.1), ("right_eye", 0.1)] {
        rig.push(
            Part::new(name, Primitive::Cube, FACE)
                .child_of(screen)
                .pivot([x, 0.05, -0.02], 0.0, Y)
                .extent([0.04, 0.06, 0.01], FRONT),
        );
    }
    rig.push(
        Part::new("mouth", Primitive::TrianglePrism, FACE)
            .child_of(screen)
            .pivot([0.0, -0.07, -0.02], 180.0, Z)
            .extent([0.12, 0.05, 0.01], FRONT),
    );

    // Speakers, d-pad and buttons below the screen
    for (name, y) in [("speaker_upper", -0.27), ("speaker_lower", -0.31)] {
        rig.push(
            Part::new(name, Primitive::Cube, SPEAKER)
                .child_of(body)
                .pivot([-0.2, y, -0.2], 0.0, Y)
                .extent([0.1, 0.015, 0.01], FRONT),
        );
    }
    rig.push(
        Part::new("dpad_horizontal", Primitive::Cube, DPAD)
            .child_of(body)
            .pivot([-0.15, -0.16, -0.2], 0.0, Y)
            .extent([0.12, 0.035, 0.02], FRONT),
    );
    rig.push(
        Part::new("dpad_vertical", Primitive::Cube, DPAD)
            .child_of(body)
            .pivot([-0.15, -0.16, -0.2], 0.0, Y)
            .extent([0.035, 0.12, 0.02], FRONT),
    );
    rig.push(
        Part::new("red_button", cone, RED_BUTTON)
            .child_of(body)
            .pivot([0.17, -0.15, -0.2], -90.0, X)
            .extent([0.25, 0.03, 0.25], CONE_BASE),
    );
    rig.push(
        Part::new("green_button", Primitive::TrianglePrism, GREEN_BUTTON)
            .child_of(body)
            .pivot([0.06, -0.2, -0.2], 0.0, Y)
            .extent([0.06, 0.05, 0.02], FRONT),
    );
    rig.push(
        Part::new("blue_button", Primitive::Cube, BLUE_BUTTON)
            .child_of(body)
            .pivot([0.17, -0.27, -0.2], 0.0, Y)
            .extent([0.05, 0.05, 0.02], FRONT),
    );

    // Legs swing about x; positive angles move the foot forward.
    for (leg_name, foot_name, x, leg, foot) in [
        ("left_leg", "left_foot", -0.12, Joint::LeftLeg, Joint::LeftFoot),
        ("right_leg", "right_foot", 0.12, Joint::RightLeg, Joint::RightFoot),
    ] {
        let thigh = rig.push(
            Part::new(leg_name, Primitive::Cube, LIMB)
                .child_of(body)
                .pivot([x, -0.35, 0.0], angle(leg), X)
                .extent([0.07, 0.25, 0.07], HANG),
        );
        rig.push(
            Part::new(foot_name, Primitive::Cube, LIMB)
                .child_of(thigh)
                .pivot([0.0, -0.25, 0.0], angle(foot), X)
                .extent([0.1, 0.04, 0.15], [0.5, 1.0, 0.7]),
        );
    }

    // Arms swing about z; positive angles raise both arms outward.
    for (arm_name, hand_name, x, side, arm, hand) in [
        ("left_arm", "left_hand", -0.325, -1.0, Joint::LeftArm, Joint::LeftHand),
        ("right_arm", "right_hand", 0.325, 1.0, Joint::RightArm, Joint::RightHand),
    ] {
        let upper = rig.push(
            Part::new(arm_name, Primitive::Cube, LIMB)
                .child_of(body)
                .pivot([x, 0.0, 0.0], side * angle(arm), Z)
                .extent([0.05, 0.3, 0.05], HANG),
        );
        rig.push(
            Part::new(hand_name, Primitive::Cube, BODY)
                .child_of(upper)
                .pivot([0.0, -0.3, 0.0], side * angle(hand), Z)
                .extent([0.08, 0.08, 0.08], HANG),
        );
    }

    rig.push(
        Part::new("antenna", cone, DPAD)
            .child_of(body)
            .pivot([0.18, 0.35, 0.0], 0.0, Y)
            .extent([0.3, 0.2, 0.3], CONE_BASE),
    );

    // Name plate on the right side; its local +z faces out of the body.
    let plate = rig.push(
        Part::new("name_plate", Primitive::Cube, PLATE)
            .child_of(body)
            .pivot([0.3, -0.1, 0.0], 90.0, Y)
            .extent([0.3, 0.08, 0.01], OUTWARD),
    );
    for (name, x) in [("decal_b", 0.09), ("decal_m", 0.0), ("decal_o", -0.09)] {
        rig.push(
            Part::new(name, Primitive::Cube, DECAL)
                .child_of(plate)
                .pivot([x, 0.0, 0.01], 0.0, Y)
                .extent([0.05, 0.05, 0.005], OUTWARD),
        );
    }

    log::trace!("composed rig with {} parts", rig.len());
    rig
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingRenderer};

    fn robot(animation: &AnimationState) -> Rig {
        compose_robot(animation, &SceneConfig::default())
    }

    fn origin(rig: &Rig, name: &str) -> [f32; 3] {
        let index = rig.index_of(name).unwrap();
        rig.world_frame(index).transform_point([0.0, 0.0, 0.0])
    }

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-5)
    }

    #[test]
    fn test_parents_precede_children() {
        let rig = robot(&AnimationState::default());
        for (i, part) in rig.parts().iter().enumerate() {
            if let Some(parent) = part.parent {
                assert!(parent < i, "{}", part.name);
            }
            assert!(rig.depth(i) <= MAX_DEPTH, "{}", part.name);
        }
        assert_eq!(rig.parts()[0].name, "body");
    }

    #[test]
    fn test_same_part_count_every_frame() {
        let mut animation = AnimationState::default();
        let first = robot(&animation).len();
        animation.set_all_animated(true);
        animation.update(3.0);
        assert_eq!(robot(&animation).len(), first);
    }

    #[test]
    fn test_world_frame_is_fold_of_ancestors() {
        let mut animation = AnimationState::default();
        animation.set_manual(Joint::LeftLeg, 30.0);
        animation.set_manual(Joint::LeftFoot, -15.0);
        let rig = robot(&animation);

        let foot = rig.index_of("left_foot").unwrap();
        let leg = rig.index_of("left_leg").unwrap();
        let body = rig.index_of("body").unwrap();
        let parts = rig.parts();
        let expected = parts[body].joint * parts[leg].joint * parts[foot].joint;
        assert!(rig.world_frame(foot).approx_eq(&expected, 1e-6));
        assert!(rig
            .world_transform(foot)
            .approx_eq(&(expected * parts[foot].mesh), 1e-6));
    }

    #[test]
    fn test_leg_moves_foot_not_other_leg() {
        let rest = robot(&AnimationState::default());
        let mut animation = AnimationState::default();
        animation.set_manual(Joint::LeftLeg, 40.0);
        let moved = robot(&animation);

        assert!(!close(origin(&rest, "left_foot"), origin(&moved, "left_foot")));
        assert!(close(origin(&rest, "left_leg"), origin(&moved, "left_leg")));
        assert!(close(origin(&rest, "right_foot"), origin(&moved, "right_foot")));
        // forward means toward -z
        assert!(origin(&moved, "left_foot")[2] < origin(&rest, "left_foot")[2]);
    }

    #[test]
    fn test_arms_raise_outward() {
        let rest = robot(&AnimationState::default());
        let mut animation = AnimationState::default();
        animation.set_manual(Joint::LeftArm, 60.0);
        animation.set_manual(Joint::RightArm, 60.0);
        let raised = robot(&animation);

        assert!(origin(&raised, "left_hand")[0] < origin(&rest, "left_hand")[0]);
        assert!(origin(&raised, "right_hand")[0] > origin(&rest, "right_hand")[0]);
        assert!(origin(&raised, "left_hand")[1] > origin(&rest, "left_hand")[1]);
    }

    #[test]
    fn test_face_sits_in_front_of_body() {
        let rig = robot(&AnimationState::default());
        for name in ["screen", "left_eye", "mouth", "red_button", "dpad_vertical"] {
            let index = rig.index_of(name).unwrap();
            let front = rig.world_transform(index).transform_point([0.5, 0.5, 0.0]);
            assert!(front[2] < -0.2 + 1e-6, "{} at z = {}", name, front[2]);
        }
    }

    #[test]
    fn test_decals_sit_outside_plate() {
        let rig = robot(&AnimationState::default());
        let plate = rig.index_of("name_plate").unwrap();
        let plate_outer = rig.world_transform(plate).transform_point([0.5, 0.5, 1.0]);
        for name in ["decal_b", "decal_m", "decal_o"] {
            let index = rig.index_of(name).unwrap();
            let inner = rig.world_transform(index).transform_point([0.5, 0.5, 0.0]);
            assert!(inner[0] >= plate_outer[0] - 1e-6, "{}", name);
        }
    }

    #[test]
    fn test_render_counts_primitives() {
        let config = SceneConfig {
            cone_segments: 16,
            ..SceneConfig::default()
        };
        let rig = compose_robot(&AnimationState::default(), &config);
        let mut r = RecordingRenderer::new();
        let submitted = rig.render(&mut r);
        assert_eq!(submitted, r.triangles_3d().count());
        let models = r
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::ModelMatrix(_)))
            .count();
        assert_eq!(models, rig.len());
    }

    #[test]
    #[should_panic]
    fn test_push_rejects_forward_parent() {
        let mut rig = Rig::new();
        rig.push(Part::new("orphan", Primitive::Cube, BODY).child_of(3));
    }
}
