//! # Orientation Gizmo Prelude
//!
//! Commonly used types for embedding the gizmo in an imgui frame.
//!
//! ```no_run
//! use orientation_gizmo::prelude::*;
//!
//! fn draw(ui: &Ui, gizmo: &mut OrientationGizmo, camera: &mut OrbitCamera) -> GizmoResult<GizmoResponse> {
//!     let pointer = PointerState::from_ui(ui);
//!     let mut draw_list = ImguiDrawList::window(ui);
//!     gizmo.draw_gizmo_camera(&mut draw_list, &pointer, camera, true)
//! }
//! ```

// Core gizmo types
pub use crate::error::{GizmoError, GizmoResult};
pub use crate::gfx::gizmos::{
    AxisColors, GizmoConfig, GizmoDrawList, GizmoPose, GizmoRect, GizmoResponse, Handle,
    LabelFont, OrientationGizmo, PointerState, ViewMatrixPose,
};

// Camera
pub use crate::gfx::camera::{Camera, OrbitCamera};

// ImGui backend
pub use crate::ui::{begin_overlay, ImguiDrawList};

// Common external types
pub use cgmath::{Matrix4, Vector2, Vector3};
pub use imgui::{ImColor32, Ui};
