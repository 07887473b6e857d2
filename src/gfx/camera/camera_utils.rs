//! View-matrix helpers shared by the camera and the gizmo.
//!
//! All angles handed in and out of the yaw/pitch helpers follow the same
//! convention as [`OrbitCamera`](super::orbit_camera::OrbitCamera):
//! `forward = (cos(yaw)·cos(pitch), sin(pitch), sin(yaw)·cos(pitch))`.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3};

/// Pitch limit (degrees) applied whenever the camera basis is rebuilt.
pub const PITCH_MAX: f32 = 89.9;

/// Below this horizontal forward length the yaw is read from the up vector instead.
pub const GIMBAL_EPSILON: f32 = 1e-4;

/// World up used by every look-at in the crate.
pub const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

/// Yaw, pitch and roll in radians recovered from a view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Unit forward vector for the given yaw and pitch in degrees.
pub fn forward_from_yaw_pitch(yaw_deg: f32, pitch_deg: f32) -> Vector3<f32> {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();

    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Right-handed look-at view matrix.
pub fn build_view_matrix(eye: Vector3<f32>, at: Vector3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::look_at_rh(Point3::from_vec(eye), Point3::from_vec(at), up)
}

/// Reads the camera basis out of a view matrix.
///
/// Returns `(right, up, forward)` in world space, where `forward` is the
/// direction the camera looks at (the negated third row of the rotation).
pub fn extract_vectors_from_view_matrix(
    view: &Matrix4<f32>,
) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
    // cgmath is column major: view[col][row]
    let right = Vector3::new(view.x.x, view.y.x, view.z.x);
    let up = Vector3::new(view.x.y, view.y.y, view.z.y);
    let back = Vector3::new(view.x.z, view.y.z, view.z.z);

    (right, up, -back)
}

/// Recovers yaw, pitch and roll (radians) from a view matrix.
///
/// Near the vertical singularity (`sqrt(f.x² + f.z²) <= GIMBAL_EPSILON`) the
/// forward vector no longer carries a heading, so yaw is rebuilt from the up
/// vector and roll is reported as zero. Only pitch is reliable there.
pub fn compute_euler_angles_from_view_matrix(view: &Matrix4<f32>) -> EulerAngles {
    let (right, up, forward) = extract_vectors_from_view_matrix(view);

    let sy = (forward.x * forward.x + forward.z * forward.z).sqrt();
    let pitch = forward.y.atan2(sy);

    if sy > GIMBAL_EPSILON {
        EulerAngles {
            yaw: forward.z.atan2(forward.x),
            pitch,
            roll: right.y.atan2(up.y),
        }
    } else {
        let sign = forward.y.signum();
        EulerAngles {
            yaw: (-up.z * sign).atan2(-up.x * sign),
            pitch,
            roll: 0.0,
        }
    }
}

/// Whether all sixteen entries of the matrix are finite.
pub fn matrix_is_finite(matrix: &Matrix4<f32>) -> bool {
    let columns: &[[f32; 4]; 4] = matrix.as_ref();
    columns.iter().flatten().all(|value| value.is_finite())
}

/// Whether all components of the vector are finite.
pub fn vector_is_finite(vector: Vector3<f32>) -> bool {
    vector.x.is_finite() && vector.y.is_finite() && vector.z.is_finite()
}

/// Degrees to radians as a cgmath angle, for `perspective`.
pub fn fov_radians(fov_deg: f32) -> Rad<f32> {
    Rad(fov_deg.to_radians())
}
