//! # Orientation Gizmo
//!
//! The widget object: owns its configuration and drag state and runs one
//! projection, interaction and draw pass per frame.

use cgmath::Matrix4;

use super::config::GizmoConfig;
use super::interaction::{InteractionPhase, InteractionState, PointerState};
use super::pose::ViewMatrixPose;
use super::projection::{check_inside_circle, AxisProjection};
use super::renderer::{draw_handles, draw_hover_halo};
use super::traits::{GizmoDrawList, GizmoPose};
use crate::error::{GizmoError, GizmoResult};
use crate::gfx::camera::camera_utils::matrix_is_finite;
use crate::gfx::camera::OrbitCamera;

/// What happened during one gizmo frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GizmoResponse {
    /// The view was rotated by a drag or snapped by a click.
    pub view_changed: bool,
    /// The pointer is inside the hover circle.
    pub hovered: bool,
    /// A drag that started on the gizmo is in progress.
    pub dragging: bool,
}

/// Interactive axis widget that rotates a camera or view matrix.
///
/// Each instance keeps its own drag state, so several gizmos can coexist.
///
/// ## Usage
///
/// ```no_run
/// use orientation_gizmo::gfx::camera::OrbitCamera;
/// use orientation_gizmo::gfx::gizmos::{GizmoDrawList, OrientationGizmo, PointerState};
///
/// fn frame(gizmo: &mut OrientationGizmo, draw_list: &mut impl GizmoDrawList, camera: &mut OrbitCamera) {
///     gizmo.set_rect(20.0, 20.0, 80.0);
///     let pointer = PointerState::default();
///     match gizmo.draw_gizmo_camera(draw_list, &pointer, camera, true) {
///         Ok(response) if response.view_changed => camera.update(0.0),
///         Ok(_) => {}
///         Err(err) => log::warn!("gizmo frame skipped: {err}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrientationGizmo {
    config: GizmoConfig,
    state: InteractionState,
}

impl OrientationGizmo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GizmoConfig) -> Self {
        Self {
            config: config.sanitized(),
            state: InteractionState::new(),
        }
    }

    /// Places the widget; `(x, y)` is the top-left corner in screen pixels.
    pub fn set_rect(&mut self, x: f32, y: f32, size: f32) {
        self.config.rect.x = x;
        self.config.rect.y = y;
        self.config.rect.size = size;
        self.config = self.config.sanitized();
    }

    /// Replaces the whole configuration, clamping degenerate values.
    pub fn configure(&mut self, config: GizmoConfig) {
        self.config = config.sanitized();
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// In-place access for live tweaking. Degenerate values are clamped at draw time.
    pub fn config_mut(&mut self) -> &mut GizmoConfig {
        &mut self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Drops any drag in progress.
    pub fn reset_interaction(&mut self) {
        self.state.reset();
    }

    /// Draws the gizmo for a bare view matrix and returns the possibly rotated matrix.
    ///
    /// `pivot_distance` is the distance from the eye to the point being
    /// orbited. Handles are only hoverable and clickable when it is positive.
    ///
    /// # Errors
    ///
    /// Fails before drawing anything when the matrix or the distance is not finite.
    pub fn draw_gizmo<D: GizmoDrawList + ?Sized>(
        &mut self,
        draw_list: &mut D,
        pointer: &PointerState,
        view: &Matrix4<f32>,
        pivot_distance: f32,
    ) -> GizmoResult<(GizmoResponse, Matrix4<f32>)> {
        if !matrix_is_finite(view) {
            return Err(GizmoError::NonFiniteViewMatrix);
        }
        if !pivot_distance.is_finite() {
            return Err(GizmoError::NonFinitePivotDistance(pivot_distance));
        }

        let mut pose = ViewMatrixPose::new(*view, pivot_distance);
        let interactive = pivot_distance > 0.0;
        let response = self.draw_with_pose(draw_list, pointer, &mut pose, interactive);
        Ok((response, pose.view()))
    }

    /// Draws the gizmo for `camera`, orbiting or snapping it in place.
    ///
    /// # Errors
    ///
    /// Returns [`GizmoError::DegenerateCamera`] without drawing when the
    /// camera's pose has non-finite components.
    pub fn draw_gizmo_camera<D: GizmoDrawList + ?Sized>(
        &mut self,
        draw_list: &mut D,
        pointer: &PointerState,
        camera: &mut OrbitCamera,
        interactive: bool,
    ) -> GizmoResult<GizmoResponse> {
        if !camera.is_finite() {
            return Err(GizmoError::DegenerateCamera);
        }

        Ok(self.draw_with_pose(draw_list, pointer, camera, interactive))
    }

    fn draw_with_pose<D, P>(
        &mut self,
        draw_list: &mut D,
        pointer: &PointerState,
        pose: &mut P,
        interactive: bool,
    ) -> GizmoResponse
    where
        D: GizmoDrawList + ?Sized,
        P: GizmoPose,
    {
        let config = self.config.clamped();
        let center = config.rect.center();
        let projection = AxisProjection::from_view(&pose.current_view(), config.axis_length());

        let hovered = check_inside_circle(center, config.hover_radius(), pointer.position);
        if interactive && hovered {
            draw_hover_halo(draw_list, center, &config);
        }

        let mut dragging = self.state.update(hovered, pointer) == InteractionPhase::Dragging;

        let selection = if !dragging && interactive {
            projection.pick(
                center,
                pointer.position,
                config.positive_radius(),
                config.negative_radius(),
            )
        } else {
            None
        };

        draw_handles(draw_list, center, &projection, &config, selection);

        let mut view_changed = false;

        if selection.is_none() && dragging {
            if let Some(delta) = self.state.take_pointer_delta(pointer.position) {
                pose.orbit(
                    delta.x * config.yaw_rotation_speed,
                    delta.y * config.pitch_rotation_speed,
                );
                view_changed = true;
            }
        }

        if let Some(handle) = selection {
            if pointer.clicked {
                log::debug!("orientation gizmo snapped to {} view", handle.label());
                pose.snap_to(handle.canonical_view());
                view_changed = true;
                dragging = false;
            }
        }

        GizmoResponse {
            view_changed,
            hovered,
            dragging,
        }
    }
}
