//! # Graphics Module
//!
//! Camera, gizmo and the demo's render engine.
//!
//! - **Camera System** ([`camera`]) - yaw/pitch orbit camera, view-matrix helpers, fly controls
//! - **Gizmos** ([`gizmos`]) - the orientation gizmo
//! - **Render Engine** ([`render_engine`]) - wgpu surface and UI pass for the demo

pub mod camera;
pub mod gizmos;
pub mod render_engine;

// Re-export commonly used types
pub use camera::OrbitCamera;
pub use render_engine::RenderEngine;
