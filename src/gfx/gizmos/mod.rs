//! # Gizmo System
//!
//! An immediate-mode orientation gizmo: three axis lines with six clickable
//! end handles that show how the view is rotated. Dragging inside the widget
//! orbits the view; clicking a handle snaps it to look along that axis.
//!
//! ## Architecture
//!
//! One frame runs projection, interaction, then drawing:
//!
//! - [`AxisProjection`] - axis screen offsets, depth ordering and picking
//! - [`InteractionState`] - drag lifecycle driven by [`PointerState`]
//! - [`renderer`] - draws into any [`GizmoDrawList`]
//! - [`GizmoPose`] - what gets rotated: an [`OrbitCamera`](crate::gfx::camera::OrbitCamera)
//!   or a [`ViewMatrixPose`]
//!
//! [`OrientationGizmo`] ties these together and owns the [`GizmoConfig`].
//!
//! ## Usage
//!
//! ```no_run
//! use orientation_gizmo::gfx::gizmos::{GizmoConfig, OrientationGizmo};
//!
//! let gizmo = OrientationGizmo::with_config(
//!     GizmoConfig::default()
//!         .with_rect(10.0, 10.0, 80.0)
//!         .with_rotation_speed(0.25, 0.25),
//! );
//! assert_eq!(gizmo.config().rect.size, 80.0);
//! ```

pub mod config;
pub mod handle;
pub mod interaction;
pub mod orientation_gizmo;
pub mod pose;
pub mod projection;
pub mod renderer;
pub mod traits;

#[cfg(test)]
mod test_orientation_gizmo;

// Re-export main types
pub use config::{color_change_opacity, AxisColors, GizmoConfig, GizmoRect};
pub use handle::{Axis, CanonicalView, Handle};
pub use interaction::{InteractionPhase, InteractionState, PointerState};
pub use orientation_gizmo::{GizmoResponse, OrientationGizmo};
pub use pose::ViewMatrixPose;
pub use projection::{check_inside_circle, AxisProjection};
pub use traits::{GizmoDrawList, GizmoPose, LabelFont};
