//! Builders for the matrices a 3D renderer feeds its shaders: model
//! transforms, a look-at view matrix and a perspective projection, plus
//! direct axis-angle rotation of vectors.
//!
//! Angle units differ between functions and are called out on each one:
//! the matrix builders ([`rotate_x`], [`rotate_y`], [`rotate_z`],
//! [`rotate_axis_angle`]) take **degrees**, while
//! [`rotate_vector_axis_angle`] takes **radians**.

use crate::error::MathError;
use crate::mat::{Mat3, Mat4};
use crate::scalar::deg_to_rad;
use crate::vec::Vec3;

/// Rotates `vec` around `axis` by `angle` **radians** using Rodrigues'
/// rotation formula:
/// `v cos θ + (axis × v) sin θ + axis (axis · v)(1 − cos θ)`.
///
/// `axis` must be unit length; it is not normalized here.
#[must_use]
pub fn rotate_vector_axis_angle(vec: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let a = vec.scale(angle.cos());
    let b = axis.cross(&vec).scale(angle.sin());
    let c = axis.scale(axis.dot(&vec) * (1.0 - angle.cos()));
    a.add(b).add(c)
}

/// Homogeneous translation matrix with `vec` in the last column.
#[must_use]
pub fn translate(vec: Vec3) -> Mat4 {
    Mat4::from_rows([
        [1.0, 0.0, 0.0, vec.x()],
        [0.0, 1.0, 0.0, vec.y()],
        [0.0, 0.0, 1.0, vec.z()],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Diagonal scale matrix with `vec.x, vec.y, vec.z, 1` on the diagonal.
#[must_use]
pub fn scale(vec: Vec3) -> Mat4 {
    Mat4::from_rows([
        [vec.x(), 0.0, 0.0, 0.0],
        [0.0, vec.y(), 0.0, 0.0],
        [0.0, 0.0, vec.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the X axis by `angle` **degrees**.
#[must_use]
pub fn rotate_x(angle: f32) -> Mat4 {
    let a = deg_to_rad(angle);
    let c = a.cos();
    let s = a.sin();

    Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Y axis by `angle` **degrees**.
#[must_use]
pub fn rotate_y(angle: f32) -> Mat4 {
    let a = deg_to_rad(angle);
    let c = a.cos();
    let s = a.sin();

    Mat4::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Z axis by `angle` **degrees**.
#[must_use]
pub fn rotate_z(angle: f32) -> Mat4 {
    let a = deg_to_rad(angle);
    let c = a.cos();
    let s = a.sin();

    Mat4::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about an arbitrary axis by `angle` **degrees**, via the matrix
/// form of Rodrigues' formula `R = I + sin(θ)K + (1 − cos(θ))K²`, where `K`
/// is the skew-symmetric cross-product matrix of `axis`.
///
/// `axis` must be unit length; it is not normalized here.
#[must_use]
pub fn rotate_axis_angle(axis: Vec3, angle: f32) -> Mat4 {
    let theta = deg_to_rad(angle);

    let k = Mat3::from_rows([
        [0.0, -axis.z(), axis.y()],
        [axis.z(), 0.0, -axis.x()],
        [-axis.y(), axis.x(), 0.0],
    ]);

    let r = Mat3::identity()
        .add(&k.scale(theta.sin()))
        .add(&k.multiply(&k).scale(1.0 - theta.cos()));
    Mat4::from_mat3(&r)
}

/// Right-handed view matrix projecting world points into the camera's
/// local coordinate system, glm-style.
///
/// `up` must not be parallel to the viewing direction `at - eye`, or the
/// result is degenerate (NaN rows); [`try_look_at`] rejects that case
/// instead.
#[must_use]
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    let v = up.normalize();
    let forward = eye.sub(at).normalize();
    let right = v.cross(&forward).normalize();
    let up = forward.cross(&right);

    Mat4::from_rows([
        [right.x(), right.y(), right.z(), -right.dot(&eye)],
        [up.x(), up.y(), up.z(), -up.dot(&eye)],
        [forward.x(), forward.y(), forward.z(), -forward.dot(&eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Strict variant of [`look_at`].
///
/// # Errors
/// [`MathError::DegenerateInput`] when `eye` and `at` coincide or `up` is
/// parallel to the viewing direction.
pub fn try_look_at(eye: Vec3, at: Vec3, up: Vec3) -> Result<Mat4, MathError> {
    let view_dir = at.sub(eye);
    if view_dir.norm_squared() == 0.0 {
        return Err(MathError::DegenerateInput("eye and at coincide"));
    }
    if up.cross(&view_dir).norm_squared() == 0.0 {
        return Err(MathError::DegenerateInput(
            "up vector is parallel to the viewing direction",
        ));
    }
    Ok(look_at(eye, at, up))
}

/// Symmetric perspective projection, OpenGL clip-space convention:
/// right-handed, z mapped to `[-1, 1]`, bottom row `[0, 0, -1, 0]` so that
/// `w = -z_eye` after multiplication.
///
/// `fov` is the vertical field of view in **degrees**; `aspect` is
/// width / height; `near` and `far` are the positive z distances to the
/// clip planes.
#[must_use]
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (0.5 * deg_to_rad(fov)).tan();
    let a = f / aspect;
    let b = f;
    let c = (far + near) / (near - far);
    let d = 2.0 * far * near / (near - far);

    Mat4::from_rows([
        [a, 0.0, 0.0, 0.0],
        [0.0, b, 0.0, 0.0],
        [0.0, 0.0, c, d],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec4;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_close(actual: Vec3, expected: Vec3) {
        assert_relative_eq!(actual.x(), expected.x(), epsilon = EPSILON);
        assert_relative_eq!(actual.y(), expected.y(), epsilon = EPSILON);
        assert_relative_eq!(actual.z(), expected.z(), epsilon = EPSILON);
    }

    #[test]
    fn test_translate() {
        let t = translate(Vec3::new(5.0, 6.0, 7.0));
        let p = t.apply(Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(p, Vec4::new(6.0, 8.0, 10.0, 1.0));

        // directions (w = 0) are unaffected
        let d = t.apply(Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(d, Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let s = scale(Vec3::new(2.0, 3.0, 4.0));
        let p = s.apply(Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(s.get(3, 3), Ok(1.0));
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let r = rotate_z(90.0);
        let p = r.apply(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_vec3_close(p.xyz(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let r = rotate_x(90.0);
        let p = r.apply(Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_vec3_close(p.xyz(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let r = rotate_y(90.0);
        let p = r.apply(Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_vec3_close(p.xyz(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_axis_angle_matches_axis_aligned() {
        // rotating about +z must agree with rotate_z
        let r = rotate_axis_angle(Vec3::new(0.0, 0.0, 1.0), 90.0);
        let p = r.apply(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_vec3_close(p.xyz(), Vec3::new(0.0, 1.0, 0.0));

        let expected = rotate_z(33.0);
        let actual = rotate_axis_angle(Vec3::new(0.0, 0.0, 1.0), 33.0);
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(
                    actual.get(row, col).unwrap(),
                    expected.get(row, col).unwrap(),
                    epsilon = EPSILON
                );
            }
        }
    }

    #[test]
    fn test_rotate_vector_axis_angle_takes_radians() {
        // quarter turn about +z, in radians
        let v = rotate_vector_axis_angle(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            std::f32::consts::FRAC_PI_2,
        );
        assert_vec3_close(v, Vec3::new(0.0, 1.0, 0.0));

        // full turn is the identity
        let w = rotate_vector_axis_angle(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 1.0, 0.0),
            std::f32::consts::TAU,
        );
        assert_vec3_close(w, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_look_at_forward_row() {
        let view = look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        // camera looks down -z in its own space: forward row is +z
        assert_relative_eq!(view.get(2, 0).unwrap(), 0.0, epsilon = EPSILON);
        assert_relative_eq!(view.get(2, 1).unwrap(), 0.0, epsilon = EPSILON);
        assert_relative_eq!(view.get(2, 2).unwrap(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        let at_origin = view.apply(Vec4::from_vec3(&eye, 1.0));
        assert_vec3_close(at_origin.xyz(), Vec3::zeros());
        assert_relative_eq!(at_origin.w(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_target_on_negative_z() {
        let view = look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let target = view.apply(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_vec3_close(target.xyz(), Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_try_look_at_degenerate() {
        assert!(matches!(
            try_look_at(
                Vec3::new(0.0, 0.0, 5.0),
                Vec3::zeros(),
                Vec3::new(0.0, 0.0, 1.0),
            ),
            Err(MathError::DegenerateInput(_))
        ));
        assert!(matches!(
            try_look_at(Vec3::ones(), Vec3::ones(), Vec3::new(0.0, 1.0, 0.0)),
            Err(MathError::DegenerateInput(_))
        ));
        assert!(try_look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .is_ok());
    }

    #[test]
    fn test_perspective_focal_length() {
        let p = perspective(90.0, 1.0, 0.1, 100.0);
        // f = 1 / tan(45°) = 1
        assert_relative_eq!(p.get(0, 0).unwrap(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(p.get(1, 1).unwrap(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_layout() {
        let near = 0.1;
        let far = 100.0;
        let p = perspective(60.0, 16.0 / 9.0, near, far);

        // bottom row triggers w = -z_eye
        assert_eq!(p.get(3, 0), Ok(0.0));
        assert_eq!(p.get(3, 1), Ok(0.0));
        assert_eq!(p.get(3, 2), Ok(-1.0));
        assert_eq!(p.get(3, 3), Ok(0.0));

        assert_relative_eq!(
            p.get(2, 2).unwrap(),
            (far + near) / (near - far),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            p.get(2, 3).unwrap(),
            2.0 * far * near / (near - far),
            epsilon = EPSILON
        );

        // a point on the near plane maps to z = -1 after the divide
        let on_near = p.apply(Vec4::new(0.0, 0.0, -near, 1.0));
        assert_relative_eq!(on_near.z() / on_near.w(), -1.0, epsilon = 1e-4);
        // a point on the far plane maps to z = +1
        let on_far = p.apply(Vec4::new(0.0, 0.0, -far, 1.0));
        assert_relative_eq!(on_far.z() / on_far.w(), 1.0, epsilon = 1e-4);
    }
}
