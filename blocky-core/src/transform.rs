/// 4x4 homogeneous transforms with post-multiplied operations
use nalgebra::{Point3, Rotation3, Unit, Vector3};
use std::ops::Mul;

type Mat4 = nalgebra::Matrix4<f32>;

/// A 4x4 affine transform stored column-major.
///
/// Every operation post-multiplies onto the current matrix, so the most
/// recently applied operation is the one closest to the vertex:
///
/// ```text
/// m.translate(..); m.rotate(..); m.scale(..);
/// world = T * R * S * local
/// ```
///
/// The type is `Copy`; assigning a matrix to another binding produces an
/// independent set of 16 entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: Mat4,
}

impl Matrix4 {
    pub fn identity() -> Self {
        Self { m: Mat4::identity() }
    }

    pub fn set_identity(&mut self) -> &mut Self {
        self.m = Mat4::identity();
        self
    }

    /// Replace the whole matrix with a translation.
    pub fn set_translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.m = Mat4::new_translation(&Vector3::new(x, y, z));
        self
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.m *= Mat4::new_translation(&Vector3::new(x, y, z));
        self
    }

    /// Rotate by `degrees` around the axis `(x, y, z)`.
    ///
    /// The axis does not need to be normalized. A zero-length axis leaves the
    /// matrix untouched.
    pub fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let axis = Vector3::new(x, y, z);
        if axis.norm_squared() == 0.0 {
            return self;
        }
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), degrees.to_radians());
        self.m *= rotation.to_homogeneous();
        self
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.m *= Mat4::new_nonuniform_scaling(&Vector3::new(x, y, z));
        self
    }

    /// Post-multiply by `other`.
    pub fn multiply(&mut self, other: &Matrix4) -> &mut Self {
        self.m *= other.m;
        self
    }

    /// The 16 entries in column-major order, ready for a uniform upload.
    pub fn elements(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.m.as_slice());
        out
    }

    /// Apply the transform to a point (with homogeneous divide).
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let q = self.m.transform_point(&Point3::new(p[0], p[1], p[2]));
        [q.x, q.y, q.z]
    }

    /// Entry-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4 { m: self.m * rhs.m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: [f32; 3], expected: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < 1e-5,
                "{:?} != {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let mut parent = Matrix4::identity();
        parent.translate(1.0, 2.0, 3.0).rotate(30.0, 0.0, 1.0, 0.0);
        let before = parent.elements();

        let mut child = parent;
        child.scale(2.0, 2.0, 2.0).translate(-0.5, 0.0, 0.0);
        let mut sibling = parent;
        sibling.rotate(90.0, 1.0, 0.0, 0.0);

        assert_eq!(parent.elements(), before);
        assert_ne!(child.elements(), sibling.elements());
    }

    #[test]
    fn test_rotate_inverse_is_identity() {
        let mut theta = -360.0f32;
        while theta <= 360.0 {
            let mut m = Matrix4::identity();
            m.rotate(theta, 0.0, 1.0, 0.0).rotate(-theta, 0.0, 1.0, 0.0);
            assert!(m.approx_eq(&Matrix4::identity(), 1e-5), "theta = {}", theta);
            theta += 7.5;
        }
    }

    #[test]
    fn test_last_operation_is_innermost() {
        let mut m = Matrix4::identity();
        m.translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        // scaled first, then translated
        assert_point(m.transform_point([1.0, 0.0, 0.0]), [3.0, 0.0, 0.0]);

        let mut n = Matrix4::identity();
        n.scale(2.0, 2.0, 2.0).translate(1.0, 0.0, 0.0);
        assert_point(n.transform_point([1.0, 0.0, 0.0]), [4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rotate_degrees_about_z() {
        let mut m = Matrix4::identity();
        m.rotate(90.0, 0.0, 0.0, 1.0);
        assert_point(m.transform_point([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rotate_normalizes_axis() {
        let mut a = Matrix4::identity();
        a.rotate(45.0, 0.0, 5.0, 0.0);
        let mut b = Matrix4::identity();
        b.rotate(45.0, 0.0, 1.0, 0.0);
        assert!(a.approx_eq(&b, 1e-6));
    }

    #[test]
    fn test_zero_axis_is_noop() {
        let mut m = Matrix4::identity();
        m.translate(0.5, 0.0, 0.0);
        let before = m;
        m.rotate(45.0, 0.0, 0.0, 0.0);
        assert_eq!(m, before);
    }

    #[test]
    fn test_elements_column_major() {
        let mut m = Matrix4::identity();
        m.translate(1.0, 2.0, 3.0);
        let e = m.elements();
        assert_eq!(&e[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(e[15], 1.0);
    }

    #[test]
    fn test_set_translate_replaces() {
        let mut m = Matrix4::identity();
        m.scale(3.0, 3.0, 3.0).set_translate(0.0, -0.5, 0.0);
        assert_point(m.transform_point([0.0, 0.0, 0.0]), [0.0, -0.5, 0.0]);
        assert_point(m.transform_point([1.0, 0.0, 0.0]), [1.0, -0.5, 0.0]);
    }

    #[test]
    fn test_multiply_matches_operator() {
        let mut a = Matrix4::identity();
        a.rotate(20.0, 1.0, 0.0, 0.0);
        let mut b = Matrix4::identity();
        b.translate(0.0, 1.0, 0.0);

        let mut c = a;
        c.multiply(&b);
        assert_eq!(c, a * b);
    }
}
