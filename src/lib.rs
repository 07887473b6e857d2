// src/lib.rs
//! Orientation Gizmo
//!
//! An interactive 3D orientation gizmo for Dear ImGui: it shows how a camera
//! is rotated, orbits it when dragged and snaps it to an axis-aligned view when
//! one of its handles is clicked. Ships with a winit + wgpu demo host.

pub mod app;
pub mod error;
pub mod gfx;
pub mod prelude;
pub mod ui;

// Re-export main types for convenience
pub use app::GizmoApp;
pub use error::{GizmoError, GizmoResult};
pub use gfx::gizmos::{GizmoConfig, GizmoResponse, OrientationGizmo};
