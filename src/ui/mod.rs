//! # User Interface Module
//!
//! Dear ImGui integration for the orientation gizmo and its demo.
//!
//! ## Key Components
//!
//! - [`ImguiDrawList`] - [`GizmoDrawList`](crate::gfx::gizmos::GizmoDrawList) over an imgui draw list
//! - [`begin_overlay`] - transparent window for drawing the gizmo above other content
//! - [`UiManager`] - imgui context, winit platform and wgpu renderer
//! - [`panel`] - the demo's viewport, options and inspector panels
//!
//! ## Usage
//!
//! Inside any imgui window:
//!
//! ```no_run
//! use orientation_gizmo::gfx::camera::OrbitCamera;
//! use orientation_gizmo::gfx::gizmos::{OrientationGizmo, PointerState};
//! use orientation_gizmo::ui::ImguiDrawList;
//!
//! fn draw(ui: &imgui::Ui, gizmo: &mut OrientationGizmo, camera: &mut OrbitCamera) {
//!     let pointer = PointerState::from_ui(ui);
//!     let mut draw_list = ImguiDrawList::window(ui);
//!     if let Err(err) = gizmo.draw_gizmo_camera(&mut draw_list, &pointer, camera, true) {
//!         log::warn!("{err}");
//!     }
//! }
//! ```
//!
//! ## Input Handling
//!
//! When imgui wants the mouse or keyboard, camera fly controls are disabled.
//! The gizmo itself reads input through imgui, so it keeps working.

pub mod imgui_adapter;
pub mod manager;
pub mod panel;

// Re-export main types
pub use imgui_adapter::{begin_overlay, ImguiDrawList};
pub use manager::UiManager;
pub use panel::{render_demo_ui, DemoUiState, GizmoMode};
