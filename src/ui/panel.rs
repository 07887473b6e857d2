// src/ui/panel.rs
//! Demo panels for the orientation gizmo
//!
//! A 3D viewport with a projected reference grid and the gizmo in its
//! top-right corner, an options panel, a camera property inspector and the
//! main menu bar.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use imgui::{Condition, FontId, ImColor32};

use super::imgui_adapter::{begin_overlay, ImguiDrawList};
use crate::gfx::camera::{Camera, OrbitCamera};
use crate::gfx::gizmos::{
    GizmoConfig, GizmoDrawList, GizmoResponse, OrientationGizmo, PointerState,
};

/// Gizmo widget size inside the viewport, in pixels.
pub const VIEWPORT_GIZMO_SIZE: f32 = 80.0;

/// Gap between the gizmo and the viewport's right edge.
pub const VIEWPORT_GIZMO_MARGIN: f32 = 40.0;

/// Pivot distance handed to the view-matrix entry point.
pub const VIEW_MATRIX_PIVOT_DISTANCE: f32 = 10.0;

/// Degrees per dragged pixel, shared by both modes.
pub const VIEWPORT_ROTATION_SPEED: f32 = 0.25;

/// Half extent of the reference grid, in world units.
const GRID_EXTENT: i32 = 5;

/// Which gizmo entry point drives the viewport camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    /// The gizmo rotates the [`OrbitCamera`] in place.
    #[default]
    Camera,
    /// The gizmo rotates a bare view matrix, which is copied back into the camera.
    ViewMatrix,
}

/// Everything the demo UI keeps between frames.
#[derive(Debug)]
pub struct DemoUiState {
    pub gizmo: OrientationGizmo,
    pub mode: GizmoMode,
    pub last_response: GizmoResponse,
    /// Draw the gizmo through an overlay window on the foreground list.
    pub overlay: bool,
    pub overlay_background: bool,
    /// The viewport canvas was under the mouse last frame.
    pub viewport_hovered: bool,
    pub show_imgui_demo: bool,
    pub exit_requested: bool,
    pub small_font: Option<FontId>,
}

impl DemoUiState {
    pub fn new(small_font: Option<FontId>) -> Self {
        Self {
            gizmo: OrientationGizmo::with_config(
                GizmoConfig::default()
                    .with_rotation_speed(VIEWPORT_ROTATION_SPEED, VIEWPORT_ROTATION_SPEED),
            ),
            mode: GizmoMode::default(),
            last_response: GizmoResponse::default(),
            overlay: false,
            overlay_background: false,
            viewport_hovered: false,
            show_imgui_demo: false,
            exit_requested: false,
            small_font,
        }
    }
}

impl Default for DemoUiState {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Builds every demo window for one frame.
pub fn render_demo_ui(ui: &imgui::Ui, state: &mut DemoUiState, camera: &mut OrbitCamera) {
    main_menu_bar(ui, state);
    viewport_panel(ui, state, camera);
    gizmo_options_panel(ui, state);
    property_inspector_panel(ui, camera);

    if state.show_imgui_demo {
        ui.show_demo_window(&mut state.show_imgui_demo);
    }
}

/// "File" and "Views" menus
pub fn main_menu_bar(ui: &imgui::Ui, state: &mut DemoUiState) {
    ui.main_menu_bar(|| {
        ui.menu("File", || {
            if ui.menu_item("Exit") {
                state.exit_requested = true;
            }
        });
        ui.menu("Views", || {
            let label = if state.show_imgui_demo {
                "Hide ImGui Demo"
            } else {
                "Show ImGui Demo"
            };
            if ui.menu_item(label) {
                state.show_imgui_demo = !state.show_imgui_demo;
            }
        });
    });
}

/// The camera's view of a reference grid with the gizmo overlaid.
pub fn viewport_panel(ui: &imgui::Ui, state: &mut DemoUiState, camera: &mut OrbitCamera) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("3D Viewport")
        .size([760.0, 560.0], Condition::FirstUseEver)
        .position([20.0, 40.0], Condition::FirstUseEver)
        .build(|| {
            let [avail_w, avail_h] = ui.content_region_avail();
            let view_size = Vector2::new(avail_w.max(20.0), avail_h.max(20.0));
            let [cursor_x, cursor_y] = ui.cursor_screen_pos();
            let origin = Vector2::new(cursor_x, cursor_y);

            camera.set_aspect_ratio(view_size.x / view_size.y);

            // Reserve the area so the window does not scroll and hover tests work.
            ui.invisible_button("##viewport_canvas", [view_size.x, view_size.y]);
            state.viewport_hovered = ui.is_item_hovered();

            {
                let mut scene = ImguiDrawList::window(ui);
                draw_reference_scene(&mut scene, &camera.build_view_projection_matrix(), origin, view_size);
            }

            let [window_x, _] = ui.window_pos();
            let [window_w, _] = ui.window_size();
            let rect_max_x = window_x + window_w;
            state.gizmo.set_rect(
                rect_max_x - VIEWPORT_GIZMO_SIZE - VIEWPORT_GIZMO_MARGIN,
                origin.y,
                VIEWPORT_GIZMO_SIZE,
            );

            // Sampled here: the overlay takes no input and is never focused.
            let pointer = PointerState::from_ui(ui);
            state.last_response = if state.overlay {
                let rect = state.gizmo.config().rect;
                let _overlay = begin_overlay(ui, &rect, state.overlay_background);
                let mut draw_list = ImguiDrawList::foreground(ui).with_small_font(state.small_font);
                drive_gizmo(state, &mut draw_list, &pointer, camera)
            } else {
                let mut draw_list = ImguiDrawList::window(ui).with_small_font(state.small_font);
                drive_gizmo(state, &mut draw_list, &pointer, camera)
            };

            overlay_info(ui, state.viewport_hovered, origin, camera);
        });
}

/// Runs one gizmo frame for the current mode, writing any rotation back into `camera`.
fn drive_gizmo<D: GizmoDrawList + ?Sized>(
    state: &mut DemoUiState,
    draw_list: &mut D,
    pointer: &PointerState,
    camera: &mut OrbitCamera,
) -> GizmoResponse {
    let result = match state.mode {
        GizmoMode::Camera => state.gizmo.draw_gizmo_camera(draw_list, pointer, camera, true),
        GizmoMode::ViewMatrix => state
            .gizmo
            .draw_gizmo(draw_list, pointer, &camera.get_view_matrix(), VIEW_MATRIX_PIVOT_DISTANCE)
            .map(|(response, view)| {
                if response.view_changed && !camera.apply_view_matrix(&view) {
                    log::warn!("gizmo returned a singular view matrix; camera left unchanged");
                }
                response
            }),
    };

    result.unwrap_or_else(|err| {
        log::warn!("orientation gizmo frame skipped: {err}");
        GizmoResponse::default()
    })
}

fn overlay_info(ui: &imgui::Ui, hovered: bool, origin: Vector2<f32>, camera: &OrbitCamera) {
    let [mouse_x, mouse_y] = ui.io().mouse_pos;
    let lines = [
        format!("Hovered: {hovered}  Focused: {}", ui.is_window_focused()),
        format!("Mouse: ({:.0}, {:.0})", mouse_x - origin.x, mouse_y - origin.y),
        format!(
            "Camera: ({:.2}, {:.2}, {:.2})",
            camera.position.x, camera.position.y, camera.position.z
        ),
    ];

    let draw_list = ui.get_window_draw_list();
    let color = ImColor32::from_rgba(220, 220, 220, 255);
    let line_height = ui.text_line_height_with_spacing();
    for (i, line) in lines.iter().enumerate() {
        let y = origin.y + 8.0 + i as f32 * line_height;
        draw_list.add_text([origin.x + 8.0, y], color, line);
    }
}

/// Projects a world point into viewport pixels, or `None` when it is behind the camera.
pub fn project_to_viewport(
    view_projection: &Matrix4<f32>,
    point: Vector3<f32>,
    origin: Vector2<f32>,
    size: Vector2<f32>,
) -> Option<Vector2<f32>> {
    let clip = *view_projection * Vector4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some(Vector2::new(
        origin.x + (ndc_x + 1.0) * 0.5 * size.x,
        origin.y + (1.0 - ndc_y) * 0.5 * size.y,
    ))
}

/// Ground grid on the XZ plane plus short colored world axes.
fn draw_reference_scene<D: GizmoDrawList + ?Sized>(
    draw_list: &mut D,
    view_projection: &Matrix4<f32>,
    origin: Vector2<f32>,
    size: Vector2<f32>,
) {
    let grid_color = ImColor32::from_rgba(90, 90, 90, 255);
    let extent = GRID_EXTENT as f32;

    let mut segment = |from: Vector3<f32>, to: Vector3<f32>, color: ImColor32, thickness: f32| {
        let a = project_to_viewport(view_projection, from, origin, size);
        let b = project_to_viewport(view_projection, to, origin, size);
        if let (Some(a), Some(b)) = (a, b) {
            draw_list.add_line(a, b, color, thickness);
        }
    };

    for i in -GRID_EXTENT..=GRID_EXTENT {
        let t = i as f32;
        segment(Vector3::new(t, 0.0, -extent), Vector3::new(t, 0.0, extent), grid_color, 1.0);
        segment(Vector3::new(-extent, 0.0, t), Vector3::new(extent, 0.0, t), grid_color, 1.0);
    }

    let zero = Vector3::new(0.0, 0.0, 0.0);
    segment(zero, Vector3::new(2.0, 0.0, 0.0), ImColor32::from_rgba(255, 54, 83, 255), 2.0);
    segment(zero, Vector3::new(0.0, 2.0, 0.0), ImColor32::from_rgba(138, 219, 0, 255), 2.0);
    segment(zero, Vector3::new(0.0, 0.0, 2.0), ImColor32::from_rgba(44, 143, 255, 255), 2.0);
}

/// Mode switch and the flags reported by the last gizmo frame.
pub fn gizmo_options_panel(ui: &imgui::Ui, state: &mut DemoUiState) {
    ui.window("Gizmo Options")
        .size([300.0, 200.0], Condition::FirstUseEver)
        .position([800.0, 40.0], Condition::FirstUseEver)
        .build(|| {
            ui.text("Type");
            ui.separator();
            if ui.radio_button_bool("Camera Version", state.mode == GizmoMode::Camera) {
                state.mode = GizmoMode::Camera;
                state.gizmo.reset_interaction();
            }
            ui.same_line();
            if ui.radio_button_bool("View Matrix Version", state.mode == GizmoMode::ViewMatrix) {
                state.mode = GizmoMode::ViewMatrix;
                state.gizmo.reset_interaction();
            }

            ui.checkbox("Draw as overlay", &mut state.overlay);
            if state.overlay {
                ui.same_line();
                ui.checkbox("Background", &mut state.overlay_background);
            }

            ui.spacing();
            ui.text("Flags");
            ui.separator();
            let response = state.last_response;
            flag_row(ui, "Hovered:", response.hovered);
            flag_row(ui, "Dragged:", response.dragging);
            flag_row(ui, "ViewMatrix Changed:", response.view_changed);
        });
}

fn flag_row(ui: &imgui::Ui, label: &str, value: bool) {
    ui.text(label);
    ui.same_line();
    let color = if value {
        [1.0, 1.0, 0.0, 1.0]
    } else {
        [0.5, 0.5, 0.5, 1.0]
    };
    ui.text_colored(color, value.to_string());
}

/// Camera FOV, position and angles.
pub fn property_inspector_panel(ui: &imgui::Ui, camera: &mut OrbitCamera) {
    ui.window("Property Inspector")
        .size([300.0, 260.0], Condition::FirstUseEver)
        .position([800.0, 260.0], Condition::FirstUseEver)
        .build(|| {
            if ui.collapsing_header("Camera", imgui::TreeNodeFlags::DEFAULT_OPEN) {
                ui.slider("FOV", 10.0, 120.0, &mut camera.fov);

                let mut position: [f32; 3] = camera.position.into();
                if ui.input_float3("Position", &mut position).build() {
                    camera.position = position.into();
                }

                let mut changed = ui.slider("Pitch", -89.9, 89.9, &mut camera.pitch);
                changed |= ui.slider("Yaw", -180.0, 180.0, &mut camera.yaw);
                if changed {
                    camera.update_camera_vectors();
                }

                ui.text(format!("Distance: {:.2}", camera.get_distance()));
                if ui.button("Reset") {
                    camera.reset_to_default();
                    camera.update_camera_vectors();
                }
            }
        });
}
