use super::camera_utils::{
    build_view_matrix, forward_from_yaw_pitch, fov_radians, vector_is_finite, Camera, PITCH_MAX,
    WORLD_UP,
};
use cgmath::*;

/// Pitch limit (degrees) used by [`OrbitCamera::rotate`]; the basis rebuild uses [`PITCH_MAX`].
pub const ROTATE_PITCH_LIMIT: f32 = 89.0;

pub const DEFAULT_POSITION: Vector3<f32> = Vector3::new(0.0, 0.0, 10.0);
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

pub const DEFAULT_AXIS_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);
pub const DEFAULT_AXIS_RIGHT: Vector3<f32> = Vector3::new(1.0, 0.0, 0.0);
pub const DEFAULT_AXIS_FORWARD: Vector3<f32> = Vector3::new(0.0, 0.0, -1.0);

/// Yaw/pitch camera that can fly freely or orbit a target point.
///
/// Angles are in degrees. `forward`, `right` and `up` are derived state: call
/// [`update`](Self::update) (or [`update_camera_vectors`](Self::update_camera_vectors))
/// after editing `yaw`/`pitch` directly.
///
/// `aspect_ratio` must be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub aspect_ratio: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,
    pub forward: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pixel for [`rotate`](Self::rotate).
    pub sensitivity: f32,
    velocity: f32,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.get_projection_matrix() * self.get_view_matrix()
    }
}

impl OrbitCamera {
    pub fn new(aspect_ratio: f32, position: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        debug_assert!(aspect_ratio > 0.0, "camera aspect ratio must be positive");

        let mut camera = Self {
            aspect_ratio,
            position,
            target: Vector3::zero(),
            up: DEFAULT_AXIS_UP,
            right: DEFAULT_AXIS_RIGHT,
            forward: DEFAULT_AXIS_FORWARD,
            yaw,
            pitch,
            fov: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            speed: 5.0,
            sensitivity: 0.1,
            velocity: 0.0,
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
        };
        camera.update_camera_vectors();
        camera.view = camera.get_view_matrix();
        camera.projection = camera.get_projection_matrix();
        camera
    }

    /// Camera at the default pose: `(0, 0, 10)` looking down -Z.
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self::new(aspect_ratio, DEFAULT_POSITION, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Mouse-look style rotation; the pitch is limited to ±[`ROTATE_PITCH_LIMIT`].
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-ROTATE_PITCH_LIMIT, ROTATE_PITCH_LIMIT);
    }

    /// Refreshes velocity, basis vectors and the cached matrices.
    ///
    /// Call once per frame after any pose change; `delta_time` is in seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.velocity = self.speed * delta_time;
        self.update_camera_vectors();
        self.view = self.get_view_matrix();
        self.projection = self.get_projection_matrix();
    }

    /// Rebuilds `forward`, `right` and `up` from yaw and pitch.
    pub fn update_camera_vectors(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_MAX, PITCH_MAX);

        self.forward = forward_from_yaw_pitch(self.yaw, self.pitch);
        self.right = self.forward.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }

    pub fn rotate_pitch(&mut self, delta_pitch: f32) {
        self.pitch = (self.pitch - delta_pitch).clamp(-PITCH_MAX, PITCH_MAX);
    }

    pub fn rotate_yaw(&mut self, delta_yaw: f32) {
        self.yaw += delta_yaw;
    }

    pub fn move_forward(&mut self) {
        self.position += self.forward * self.velocity;
    }

    pub fn move_backward(&mut self) {
        self.position -= self.forward * self.velocity;
    }

    pub fn move_right(&mut self) {
        self.position += self.right * self.velocity;
    }

    pub fn move_left(&mut self) {
        self.position -= self.right * self.velocity;
    }

    pub fn move_up(&mut self) {
        self.position += self.up * self.velocity;
    }

    pub fn move_down(&mut self) {
        self.position -= self.up * self.velocity;
    }

    pub fn get_view_matrix(&self) -> Matrix4<f32> {
        build_view_matrix(self.position, self.position + self.forward, WORLD_UP)
    }

    pub fn get_projection_matrix(&self) -> Matrix4<f32> {
        perspective(fov_radians(self.fov), self.aspect_ratio, self.znear, self.zfar)
    }

    /// View matrix cached by the last [`update`](Self::update).
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view
    }

    /// Projection matrix cached by the last [`update`](Self::update).
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    /// Distance per move call, as set by the last [`update`](Self::update).
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Euclidean distance between the camera and its target.
    pub fn get_distance(&self) -> f32 {
        (self.position - self.target).magnitude()
    }

    /// Places the camera on its orbit sphere so it looks along `forward` at `target`.
    pub fn orbit_target(&mut self, distance: f32) {
        self.position = self.target - self.forward * distance;
    }

    pub fn reset_model_view(&mut self, position: Vector3<f32>, pitch: f32, yaw: f32) {
        self.position = position;
        self.up = DEFAULT_AXIS_UP;
        self.right = DEFAULT_AXIS_RIGHT;
        self.forward = DEFAULT_AXIS_FORWARD;
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_MAX, PITCH_MAX);
    }

    pub fn reset_to_default(&mut self) {
        self.reset_model_view(DEFAULT_POSITION, DEFAULT_PITCH, DEFAULT_YAW);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        debug_assert!(aspect_ratio > 0.0, "camera aspect ratio must be positive");
        self.aspect_ratio = aspect_ratio;
    }

    /// Adopts the eye position and heading of an external view matrix.
    ///
    /// Returns `false` (leaving the camera untouched) when the matrix cannot be inverted.
    pub fn apply_view_matrix(&mut self, view: &Matrix4<f32>) -> bool {
        let Some(inverse) = view.invert() else {
            return false;
        };

        let angles = super::camera_utils::compute_euler_angles_from_view_matrix(view);
        self.position = inverse.w.truncate();
        self.yaw = angles.yaw.to_degrees();
        self.pitch = angles.pitch.to_degrees();
        self.update_camera_vectors();
        true
    }

    /// Whether position, target and basis are all finite.
    pub fn is_finite(&self) -> bool {
        vector_is_finite(self.position)
            && vector_is_finite(self.target)
            && vector_is_finite(self.forward)
            && vector_is_finite(self.right)
            && vector_is_finite(self.up)
            && self.yaw.is_finite()
            && self.pitch.is_finite()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::with_aspect(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &OrbitCamera) {
        assert!((camera.forward.magnitude() - 1.0).abs() < EPS);
        assert!((camera.right.magnitude() - 1.0).abs() < EPS);
        assert!((camera.up.magnitude() - 1.0).abs() < EPS);
        assert!(camera.forward.dot(camera.right).abs() < 1e-4);
        assert!(camera.forward.dot(camera.up).abs() < 1e-4);
        assert!(camera.right.dot(camera.up).abs() < 1e-4);
    }

    #[test]
    fn test_default_pose_looks_down_negative_z() {
        let camera = OrbitCamera::default();

        assert!((camera.forward - Vector3::new(0.0, 0.0, -1.0)).magnitude() < EPS);
        assert!((camera.right - Vector3::new(1.0, 0.0, 0.0)).magnitude() < EPS);
        assert!((camera.up - Vector3::new(0.0, 1.0, 0.0)).magnitude() < EPS);
        assert!((camera.get_distance() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_basis_is_orthonormal_over_range() {
        let mut camera = OrbitCamera::default();
        for yaw in (-179..=180).step_by(17) {
            for pitch in [-89.9, -70.0, -12.5, 0.0, 33.0, 88.0, 89.9] {
                camera.yaw = yaw as f32;
                camera.pitch = pitch;
                camera.update_camera_vectors();
                assert_orthonormal(&camera);
            }
        }
    }

    #[test]
    fn test_basis_rebuild_clamps_pitch() {
        let mut camera = OrbitCamera::default();

        camera.pitch = 135.0;
        camera.update_camera_vectors();
        assert_eq!(camera.pitch, PITCH_MAX);

        camera.pitch = -1000.0;
        camera.update_camera_vectors();
        assert_eq!(camera.pitch, -PITCH_MAX);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_rotate_uses_its_own_pitch_limit() {
        let mut camera = OrbitCamera::default();
        camera.sensitivity = 1.0;

        camera.rotate(10.0, -500.0);
        assert_eq!(camera.yaw, DEFAULT_YAW + 10.0);
        assert_eq!(camera.pitch, ROTATE_PITCH_LIMIT);

        camera.rotate(0.0, 500.0);
        assert_eq!(camera.pitch, -ROTATE_PITCH_LIMIT);
    }

    #[test]
    fn test_moves_follow_basis_and_velocity() {
        let mut camera = OrbitCamera::default();
        camera.speed = 2.0;
        camera.update(0.5);
        assert!((camera.velocity() - 1.0).abs() < EPS);

        camera.move_forward();
        assert!((camera.position - Vector3::new(0.0, 0.0, 9.0)).magnitude() < EPS);
        camera.move_right();
        camera.move_up();
        assert!((camera.position - Vector3::new(1.0, 1.0, 9.0)).magnitude() < EPS);
        camera.move_left();
        camera.move_down();
        camera.move_backward();
        assert!((camera.position - DEFAULT_POSITION).magnitude() < EPS);
    }

    #[test]
    fn test_moves_without_update_do_nothing() {
        let mut camera = OrbitCamera::default();
        camera.move_forward();
        assert_eq!(camera.position, DEFAULT_POSITION);
    }

    #[test]
    fn test_reset_model_view() {
        let mut camera = OrbitCamera::default();
        camera.yaw = 12.0;
        camera.pitch = 40.0;
        camera.position = Vector3::new(3.0, 3.0, 3.0);
        camera.update_camera_vectors();

        camera.reset_to_default();
        assert_eq!(camera.position, DEFAULT_POSITION);
        assert_eq!(camera.yaw, DEFAULT_YAW);
        assert_eq!(camera.pitch, DEFAULT_PITCH);
        assert_eq!(camera.forward, DEFAULT_AXIS_FORWARD);
    }

    #[test]
    fn test_reset_model_view_clamps_pitch() {
        let mut camera = OrbitCamera::default();
        camera.reset_model_view(Vector3::new(0.0, 5.0, 0.0), 120.0, 0.0);
        assert_eq!(camera.pitch, PITCH_MAX);

        camera.reset_model_view(Vector3::new(0.0, -5.0, 0.0), -95.0, 0.0);
        assert_eq!(camera.pitch, -PITCH_MAX);
    }

    #[test]
    fn test_apply_view_matrix_adopts_pose() {
        let mut source = OrbitCamera::default();
        source.yaw = 30.0;
        source.pitch = -20.0;
        source.update_camera_vectors();
        source.orbit_target(6.0);

        let mut camera = OrbitCamera::default();
        assert!(camera.apply_view_matrix(&source.get_view_matrix()));

        assert!((camera.position - source.position).magnitude() < 1e-3);
        assert!((camera.yaw - 30.0).abs() < 0.05);
        assert!((camera.pitch + 20.0).abs() < 0.05);
    }

    #[test]
    fn test_view_projection_matches_parts() {
        let mut camera = OrbitCamera::with_aspect(16.0 / 9.0);
        camera.update(0.016);

        let expected = camera.projection_matrix() * camera.view_matrix();
        assert_eq!(camera.build_view_projection_matrix(), expected);
    }
}
