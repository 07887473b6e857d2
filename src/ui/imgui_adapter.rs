//! Dear ImGui backend for the orientation gizmo
//!
//! Bridges imgui draw lists, fonts and mouse state to the gizmo's
//! [`GizmoDrawList`] and [`PointerState`].

use cgmath::Vector2;
use imgui::{
    Condition, DrawListMut, FontId, FontStackToken, ImColor32, MouseButton, Ui, WindowFlags,
    WindowToken,
};

use crate::gfx::gizmos::{GizmoDrawList, GizmoRect, LabelFont, PointerState};

/// Window draw list (or foreground list) the gizmo renders into.
///
/// Only one window draw list may be alive at a time, so create this right
/// before drawing the gizmo and drop it afterwards.
pub struct ImguiDrawList<'ui> {
    ui: &'ui Ui,
    draw_list: DrawListMut<'ui>,
    small_font: Option<FontId>,
}

impl<'ui> ImguiDrawList<'ui> {
    /// Draw list of the current window.
    pub fn window(ui: &'ui Ui) -> Self {
        Self {
            ui,
            draw_list: ui.get_window_draw_list(),
            small_font: None,
        }
    }

    /// Foreground list, drawn on top of every window.
    pub fn foreground(ui: &'ui Ui) -> Self {
        Self {
            ui,
            draw_list: ui.get_foreground_draw_list(),
            small_font: None,
        }
    }

    /// Font used for negative-handle labels. Without one the current font is used.
    pub fn with_small_font(mut self, font: Option<FontId>) -> Self {
        self.small_font = font;
        self
    }

    fn push_label_font(&self, font: LabelFont) -> Option<FontStackToken<'ui>> {
        let ui: &'ui Ui = self.ui;
        match (font, self.small_font) {
            (LabelFont::Small, Some(id)) => Some(ui.push_font(id)),
            _ => None,
        }
    }
}

fn to_imgui(point: Vector2<f32>) -> [f32; 2] {
    [point.x, point.y]
}

impl GizmoDrawList for ImguiDrawList<'_> {
    fn add_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: ImColor32, thickness: f32) {
        self.draw_list
            .add_line(to_imgui(from), to_imgui(to), color)
            .thickness(thickness)
            .build();
    }

    fn add_circle_filled(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32) {
        self.draw_list
            .add_circle(to_imgui(center), radius, color)
            .filled(true)
            .build();
    }

    fn add_circle(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32, thickness: f32) {
        self.draw_list
            .add_circle(to_imgui(center), radius, color)
            .thickness(thickness)
            .build();
    }

    fn calc_text_size(&self, text: &str, font: LabelFont) -> Vector2<f32> {
        let _font = self.push_label_font(font);
        let [width, height] = self.ui.calc_text_size(text);
        Vector2::new(width, height)
    }

    fn add_text(&mut self, position: Vector2<f32>, color: ImColor32, text: &str, font: LabelFont) {
        let _font = self.push_label_font(font);
        self.draw_list.add_text(to_imgui(position), color, text);
    }
}

impl PointerState {
    /// Left-button state of the current frame, as seen from the current window.
    pub fn from_ui(ui: &Ui) -> Self {
        let [x, y] = ui.io().mouse_pos;
        Self {
            position: Vector2::new(x, y),
            down: ui.is_mouse_down(MouseButton::Left),
            released: ui.is_mouse_released(MouseButton::Left),
            clicked: ui.is_mouse_clicked(MouseButton::Left),
            dragging: ui.is_mouse_dragging(MouseButton::Left),
            window_focused: ui.is_window_focused(),
        }
    }
}

/// Opens a bare window covering the gizmo rect so it can be drawn above other content.
///
/// The window takes no input and never grabs focus. Pass `background = false`
/// for a fully transparent overlay. Draw the gizmo while the returned token is alive.
///
/// `is_window_focused` is always false inside the overlay, so take
/// [`PointerState::from_ui`] in the window that receives the clicks before
/// calling this; otherwise dragging never starts.
pub fn begin_overlay<'ui>(ui: &'ui Ui, rect: &GizmoRect, background: bool) -> Option<WindowToken<'ui>> {
    let extent = rect.half_extent() * 2.0;
    let mut flags = WindowFlags::NO_DECORATION
        | WindowFlags::NO_INPUTS
        | WindowFlags::NO_SAVED_SETTINGS
        | WindowFlags::NO_FOCUS_ON_APPEARING
        | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS;
    if !background {
        flags |= WindowFlags::NO_BACKGROUND;
    }

    ui.window("##orientation_gizmo_overlay")
        .position([rect.x, rect.y], Condition::Always)
        .size([extent, extent], Condition::Always)
        .flags(flags)
        .begin()
}
