//! # Gizmo Poses
//!
//! [`GizmoPose`] implementations for the two ways a host can hand its view to
//! the gizmo: a live [`OrbitCamera`], or a bare view matrix with the distance
//! to the point it orbits around.

use cgmath::{InnerSpace, Matrix4, Vector3};

use super::handle::CanonicalView;
use super::traits::GizmoPose;
use crate::gfx::camera::camera_utils::{
    build_view_matrix, compute_euler_angles_from_view_matrix, extract_vectors_from_view_matrix,
    forward_from_yaw_pitch, PITCH_MAX, WORLD_UP,
};
use crate::gfx::camera::OrbitCamera;

impl GizmoPose for OrbitCamera {
    fn current_view(&self) -> Matrix4<f32> {
        self.get_view_matrix()
    }

    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let distance = self.get_distance();
        self.rotate_yaw(delta_yaw);
        self.rotate_pitch(delta_pitch);
        self.update_camera_vectors();
        self.orbit_target(distance);
    }

    fn snap_to(&mut self, view: CanonicalView) {
        let distance = self.get_distance();
        self.pitch = view.pitch;
        self.yaw = view.yaw;
        self.update_camera_vectors();
        self.orbit_target(distance);
    }
}

/// A view matrix plus the distance from the eye to the orbit pivot.
///
/// The pivot sits `pivot_distance` units in front of the eye. A non-positive
/// distance orbits around a point one unit ahead instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMatrixPose {
    view: Matrix4<f32>,
    pivot_distance: f32,
}

impl ViewMatrixPose {
    pub fn new(view: Matrix4<f32>, pivot_distance: f32) -> Self {
        Self {
            view,
            pivot_distance,
        }
    }

    pub fn view(&self) -> Matrix4<f32> {
        self.view
    }

    /// World-space eye position encoded in the view matrix.
    pub fn eye(&self) -> Vector3<f32> {
        let (right, up, forward) = extract_vectors_from_view_matrix(&self.view);
        let t = self.view.w;
        // Rotation is orthonormal, so eye = -Rᵀ·t; the third row stores -forward.
        -(right * t.x + up * t.y - forward * t.z)
    }

    fn orbit_length(&self) -> f32 {
        if self.pivot_distance > 0.0 {
            self.pivot_distance
        } else {
            1.0
        }
    }

    /// Point the pose orbits around.
    pub fn pivot(&self) -> Vector3<f32> {
        let (_, _, forward) = extract_vectors_from_view_matrix(&self.view);
        self.eye() + forward.normalize() * self.orbit_length()
    }

    /// Current yaw and pitch in degrees.
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let angles = compute_euler_angles_from_view_matrix(&self.view);
        (angles.yaw.to_degrees(), angles.pitch.to_degrees())
    }

    fn look_from(&mut self, yaw: f32, pitch: f32) {
        let pivot = self.pivot();
        let length = self.orbit_length();
        let forward = forward_from_yaw_pitch(yaw, pitch.clamp(-PITCH_MAX, PITCH_MAX));
        self.view = build_view_matrix(pivot - forward * length, pivot, WORLD_UP);
    }
}

impl GizmoPose for ViewMatrixPose {
    fn current_view(&self) -> Matrix4<f32> {
        self.view
    }

    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let (yaw, pitch) = self.yaw_pitch();
        self.look_from(yaw + delta_yaw, pitch - delta_pitch);
    }

    fn snap_to(&mut self, view: CanonicalView) {
        self.look_from(view.yaw, view.pitch);
    }
}
