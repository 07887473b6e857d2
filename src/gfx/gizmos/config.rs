//! # Gizmo Configuration
//!
//! Placement and visual tuning for an [`OrientationGizmo`](super::OrientationGizmo).
//!
//! Every length is a fraction of the widget `size`, so a single
//! [`GizmoRect`] controls how large the whole gizmo appears on screen.

use cgmath::Vector2;
use imgui::ImColor32;

use super::handle::Axis;

/// Smallest widget size in pixels accepted by the gizmo.
pub const MIN_GIZMO_SIZE: f32 = 1.0;

/// Smallest scale factor accepted for radii, lengths and thickness.
pub const MIN_SCALE: f32 = 1e-3;

/// Distance from the rect origin to the widget center, as a fraction of `size`.
pub const HALF_EXTENT_SCALE: f32 = 0.75;

/// Screen-space placement of the gizmo, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl GizmoRect {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size }
    }

    /// Half extent of the widget (`0.75 * size`).
    pub fn half_extent(&self) -> f32 {
        self.size * HALF_EXTENT_SCALE
    }

    /// Pivot of the axis lines on screen.
    pub fn center(&self) -> Vector2<f32> {
        let half = self.half_extent();
        Vector2::new(self.x + half, self.y + half)
    }
}

impl Default for GizmoRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 10.0)
    }
}

/// Front/back tint of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisColors {
    /// Used when the handle faces the viewer.
    pub front: ImColor32,
    /// Dimmer variant for handles pointing away.
    pub back: ImColor32,
}

impl AxisColors {
    pub const fn new(front: ImColor32, back: ImColor32) -> Self {
        Self { front, back }
    }

    pub fn select(&self, facing_viewer: bool) -> ImColor32 {
        if facing_viewer {
            self.front
        } else {
            self.back
        }
    }
}

/// Visual and interaction tuning for the gizmo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoConfig {
    pub rect: GizmoRect,

    /// Degrees of pitch per pixel of vertical drag.
    pub pitch_rotation_speed: f32,
    /// Degrees of yaw per pixel of horizontal drag.
    pub yaw_rotation_speed: f32,

    // Fractions of `rect.size`
    pub line_thickness_scale: f32,
    pub axis_length_scale: f32,
    pub positive_radius_scale: f32,
    pub negative_radius_scale: f32,
    /// Fraction of the half extent.
    pub hover_circle_radius_scale: f32,

    pub color_white: ImColor32,
    pub color_black: ImColor32,
    pub x_colors: AxisColors,
    pub y_colors: AxisColors,
    pub z_colors: AxisColors,
    pub hover_circle_color: ImColor32,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            rect: GizmoRect::default(),
            pitch_rotation_speed: 0.25,
            yaw_rotation_speed: 0.25,
            line_thickness_scale: 0.017,
            axis_length_scale: 0.45,
            positive_radius_scale: 0.12,
            negative_radius_scale: 0.085,
            hover_circle_radius_scale: 0.77,
            color_white: ImColor32::from_rgba(255, 255, 255, 255),
            color_black: ImColor32::from_rgba(0, 0, 0, 255),
            x_colors: AxisColors::new(
                ImColor32::from_rgba(255, 54, 83, 255),
                ImColor32::from_rgba(255, 54, 83, 50),
            ),
            y_colors: AxisColors::new(
                ImColor32::from_rgba(138, 219, 0, 255),
                ImColor32::from_rgba(138, 219, 0, 50),
            ),
            z_colors: AxisColors::new(
                ImColor32::from_rgba(44, 143, 255, 255),
                ImColor32::from_rgba(44, 143, 255, 50),
            ),
            hover_circle_color: ImColor32::from_rgba(100, 100, 100, 130),
        }
    }
}

impl GizmoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(mut self, x: f32, y: f32, size: f32) -> Self {
        self.rect = GizmoRect::new(x, y, size);
        self
    }

    pub fn with_rotation_speed(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw_rotation_speed = yaw;
        self.pitch_rotation_speed = pitch;
        self
    }

    pub fn with_axis_colors(mut self, x: AxisColors, y: AxisColors, z: AxisColors) -> Self {
        self.x_colors = x;
        self.y_colors = y;
        self.z_colors = z;
        self
    }

    pub fn with_hover_color(mut self, color: ImColor32) -> Self {
        self.hover_circle_color = color;
        self
    }

    pub fn axis_colors(&self, axis: Axis) -> AxisColors {
        match axis {
            Axis::X => self.x_colors,
            Axis::Y => self.y_colors,
            Axis::Z => self.z_colors,
        }
    }

    pub fn axis_length(&self) -> f32 {
        self.rect.size * self.axis_length_scale
    }

    pub fn line_thickness(&self) -> f32 {
        self.rect.size * self.line_thickness_scale
    }

    pub fn positive_radius(&self) -> f32 {
        self.rect.size * self.positive_radius_scale
    }

    pub fn negative_radius(&self) -> f32 {
        self.rect.size * self.negative_radius_scale
    }

    pub fn hover_radius(&self) -> f32 {
        self.rect.half_extent() * self.hover_circle_radius_scale
    }

    /// Copy with the size and every scale clamped to a small positive minimum.
    ///
    /// NaN values are replaced by the minimum as well.
    pub fn clamped(&self) -> Self {
        let mut config = *self;
        config.rect.size = clamp_min(config.rect.size, MIN_GIZMO_SIZE);
        config.line_thickness_scale = clamp_min(config.line_thickness_scale, MIN_SCALE);
        config.axis_length_scale = clamp_min(config.axis_length_scale, MIN_SCALE);
        config.positive_radius_scale = clamp_min(config.positive_radius_scale, MIN_SCALE);
        config.negative_radius_scale = clamp_min(config.negative_radius_scale, MIN_SCALE);
        config.hover_circle_radius_scale = clamp_min(config.hover_circle_radius_scale, MIN_SCALE);
        config
    }

    /// Like [`clamped`](Self::clamped), logging a warning when anything had to change.
    pub fn sanitized(&self) -> Self {
        let config = self.clamped();
        if config != *self {
            log::warn!(
                "orientation gizmo config out of range (size {}, scales {:?}); clamped to minimum positive values",
                self.rect.size,
                [
                    self.line_thickness_scale,
                    self.axis_length_scale,
                    self.positive_radius_scale,
                    self.negative_radius_scale,
                    self.hover_circle_radius_scale,
                ]
            );
        }
        config
    }
}

fn clamp_min(value: f32, min: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.max(min)
    }
}

/// Same color with its alpha replaced by `opacity` (0..=1).
pub fn color_change_opacity(color: ImColor32, opacity: f32) -> ImColor32 {
    let [r, g, b, _] = color.to_rgba_f32s();
    ImColor32::from_rgba_f32s(r, g, b, opacity.clamp(0.0, 1.0))
}
