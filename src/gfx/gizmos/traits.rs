//! # Gizmo Traits
//!
//! The two seams between the gizmo core and its host: where it draws and
//! what it rotates.

use cgmath::{Matrix4, Vector2};
use imgui::ImColor32;

use super::handle::CanonicalView;

/// Font variant used for handle labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFont {
    /// Host's current font; positive-end labels.
    #[default]
    Regular,
    /// Smaller font for negative-end labels.
    Small,
}

/// Drawing capability the gizmo needs from the host's rendering backend.
///
/// Coordinates are screen pixels with Y pointing down. The gizmo never passes
/// non-finite coordinates to these methods.
///
/// ## Examples
///
/// ```no_run
/// use cgmath::Vector2;
/// use imgui::ImColor32;
/// use orientation_gizmo::gfx::gizmos::{GizmoDrawList, LabelFont};
///
/// #[derive(Default)]
/// struct CountingDrawList {
///     calls: usize,
/// }
///
/// impl GizmoDrawList for CountingDrawList {
///     fn add_line(&mut self, _: Vector2<f32>, _: Vector2<f32>, _: ImColor32, _: f32) {
///         self.calls += 1;
///     }
///     fn add_circle_filled(&mut self, _: Vector2<f32>, _: f32, _: ImColor32) {
///         self.calls += 1;
///     }
///     fn add_circle(&mut self, _: Vector2<f32>, _: f32, _: ImColor32, _: f32) {
///         self.calls += 1;
///     }
///     fn calc_text_size(&self, text: &str, _: LabelFont) -> Vector2<f32> {
///         Vector2::new(7.0 * text.len() as f32, 13.0)
///     }
///     fn add_text(&mut self, _: Vector2<f32>, _: ImColor32, _: &str, _: LabelFont) {
///         self.calls += 1;
///     }
/// }
/// ```
pub trait GizmoDrawList {
    /// Straight line of the given thickness.
    fn add_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: ImColor32, thickness: f32);

    /// Filled disc.
    fn add_circle_filled(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32);

    /// Circle outline.
    fn add_circle(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32, thickness: f32);

    /// Size in pixels `text` would occupy when drawn with `font`.
    fn calc_text_size(&self, text: &str, font: LabelFont) -> Vector2<f32>;

    /// Text with its top-left corner at `position`.
    fn add_text(&mut self, position: Vector2<f32>, color: ImColor32, text: &str, font: LabelFont);
}

/// Something the gizmo can read a view from and rotate.
///
/// Implemented by [`OrbitCamera`](crate::gfx::camera::OrbitCamera) for the
/// camera entry point and by [`ViewMatrixPose`](super::pose::ViewMatrixPose)
/// for the raw view-matrix entry point.
pub trait GizmoPose {
    /// View matrix of the pose as it stands now.
    fn current_view(&self) -> Matrix4<f32>;

    /// Orbits by the given yaw and pitch deltas in degrees.
    ///
    /// Yaw is added and pitch is subtracted, then the pitch is clamped to
    /// ±[`PITCH_MAX`](crate::gfx::camera::PITCH_MAX). The orbit radius is preserved.
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32);

    /// Jumps to a canonical orientation, keeping the orbit radius.
    fn snap_to(&mut self, view: CanonicalView);
}
