//! Orientation gizmo demo
//!
//! Run with `cargo run --example orientation_gizmo`. Set `RUST_LOG=debug` to
//! see drag and snap events.

use orientation_gizmo::GizmoApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    GizmoApp::new()?.run()
}
