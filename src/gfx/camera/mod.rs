pub mod camera_controller;
pub mod camera_utils;
pub mod orbit_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{
    build_view_matrix, compute_euler_angles_from_view_matrix, extract_vectors_from_view_matrix,
    Camera, EulerAngles, PITCH_MAX,
};
pub use orbit_camera::{OrbitCamera, ROTATE_PITCH_LIMIT};
