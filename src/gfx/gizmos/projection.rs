//! # Axis Projection and Picking
//!
//! Projects the three principal axes through the rotational part of a view
//! matrix into 2D screen offsets (Y down) and orders the six handles by how
//! close they are to the viewer.
//!
//! ## Ordering
//!
//! Every handle gets a signed closeness: `+axis.z` for the positive end and
//! `-axis.z` for the negative end. Handles are drawn farthest first and
//! picked nearest first, so the handle rendered on top is the one that wins
//! a click where circles overlap.

use std::cmp::Ordering;

use cgmath::{Matrix4, Vector2, Vector4};

use super::handle::{Axis, Handle};

/// Inclusive point-in-circle test.
pub fn check_inside_circle(center: Vector2<f32>, radius: f32, point: Vector2<f32>) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Whether both coordinates are finite.
pub fn is_finite_point(point: Vector2<f32>) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Screen-space image of the three axes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProjection {
    axes: [Vector4<f32>; 3],
}

impl AxisProjection {
    /// Projects axes of length `axis_length` (pixels) through `view`.
    ///
    /// Translation is ignored: the axes are transformed as directions (w = 0).
    pub fn from_view(view: &Matrix4<f32>, axis_length: f32) -> Self {
        // Unit cube to unit cube; only flips z, which the Z axis undoes below.
        let ortho = cgmath::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        let mut view_projection = *view * ortho;

        // Y row: 3D y-up into 2D screen y-down. Depth (row 2) is untouched.
        view_projection.x.y = -view_projection.x.y;
        view_projection.y.y = -view_projection.y.y;
        view_projection.z.y = -view_projection.z.y;
        view_projection.w.y = -view_projection.w.y;

        let x_axis = view_projection * Vector4::new(axis_length, 0.0, 0.0, 0.0);
        let y_axis = view_projection * Vector4::new(0.0, axis_length, 0.0, 0.0);
        let z_axis = -(view_projection * Vector4::new(0.0, 0.0, axis_length, 0.0));

        Self {
            axes: [x_axis, y_axis, z_axis],
        }
    }

    /// Offset of the positive end of `axis` from the gizmo center.
    pub fn screen_offset(&self, axis: Axis) -> Vector2<f32> {
        let projected = self.axes[axis.index()];
        Vector2::new(projected.x, projected.y)
    }

    /// Signed depth of the positive end of `axis`; positive means toward the viewer.
    pub fn depth(&self, axis: Axis) -> f32 {
        self.axes[axis.index()].z
    }

    /// Closeness flag: the positive end of `axis` faces the viewer.
    pub fn positive_closer(&self, axis: Axis) -> bool {
        0.0 <= self.depth(axis)
    }

    /// Offset of `handle` from the gizmo center.
    pub fn handle_offset(&self, handle: Handle) -> Vector2<f32> {
        let offset = self.screen_offset(handle.axis());
        if handle.is_positive() {
            offset
        } else {
            -offset
        }
    }

    /// Signed closeness of `handle` to the viewer.
    pub fn handle_depth(&self, handle: Handle) -> f32 {
        let depth = self.depth(handle.axis());
        if handle.is_positive() {
            depth
        } else {
            -depth
        }
    }

    /// Whether `handle` gets the front tint.
    pub fn handle_faces_viewer(&self, handle: Handle) -> bool {
        let positive_closer = self.positive_closer(handle.axis());
        if handle.is_positive() {
            positive_closer
        } else {
            !positive_closer
        }
    }

    /// `(handle, closeness)` pairs, farthest first.
    ///
    /// The sort is stable, so handles at equal depth keep index order.
    pub fn depth_pairs(&self) -> [(Handle, f32); 6] {
        let mut pairs = Handle::ALL.map(|handle| (handle, self.handle_depth(handle)));
        pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        pairs
    }

    /// Back-to-front order for drawing.
    pub fn draw_order(&self) -> [Handle; 6] {
        self.depth_pairs().map(|(handle, _)| handle)
    }

    /// Front-to-back order for hit-testing.
    pub fn pick_order(&self) -> [Handle; 6] {
        let mut order = self.draw_order();
        order.reverse();
        order
    }

    /// Nearest handle whose circle contains `pointer`, if any.
    pub fn pick(
        &self,
        center: Vector2<f32>,
        pointer: Vector2<f32>,
        positive_radius: f32,
        negative_radius: f32,
    ) -> Option<Handle> {
        self.pick_order().into_iter().find(|&handle| {
            let position = center + self.handle_offset(handle);
            let radius = if handle.is_positive() {
                positive_radius
            } else {
                negative_radius
            };
            is_finite_point(position) && check_inside_circle(position, radius, pointer)
        })
    }
}
