//! # Gizmo Rendering
//!
//! Emits the gizmo's primitives into a [`GizmoDrawList`], back to front.

use cgmath::Vector2;
use imgui::ImColor32;

use super::config::{color_change_opacity, GizmoConfig};
use super::handle::Handle;
use super::projection::{is_finite_point, AxisProjection};
use super::traits::{GizmoDrawList, LabelFont};

/// Opacity of the fill behind a negative handle.
pub const NEGATIVE_FILL_OPACITY: f32 = 0.3;

/// Outline thickness of negative handles, in pixels.
pub const NEGATIVE_OUTLINE_THICKNESS: f32 = 1.1;

/// Translucent disc behind the gizmo while the pointer is over it.
pub fn draw_hover_halo<D: GizmoDrawList + ?Sized>(
    draw_list: &mut D,
    center: Vector2<f32>,
    config: &GizmoConfig,
) {
    draw_list.add_circle_filled(center, config.hover_radius(), config.hover_circle_color);
}

/// Draws all six handles farthest first, highlighting `selection`.
pub fn draw_handles<D: GizmoDrawList + ?Sized>(
    draw_list: &mut D,
    center: Vector2<f32>,
    projection: &AxisProjection,
    config: &GizmoConfig,
    selection: Option<Handle>,
) {
    for handle in projection.draw_order() {
        let end = center + projection.handle_offset(handle);
        if !is_finite_point(end) {
            log::trace!("skipping {} handle with non-finite position", handle.label());
            continue;
        }

        let color = config
            .axis_colors(handle.axis())
            .select(projection.handle_faces_viewer(handle));
        let selected = selection == Some(handle);

        if handle.is_positive() {
            draw_positive_handle(draw_list, center, end, color, handle.label(), selected, config);
        } else {
            draw_negative_handle(draw_list, end, color, handle.label(), selected, config);
        }
    }
}

/// Axis line with a solid disc and a centered label at its end.
fn draw_positive_handle<D: GizmoDrawList + ?Sized>(
    draw_list: &mut D,
    center: Vector2<f32>,
    end: Vector2<f32>,
    color: ImColor32,
    label: &str,
    selected: bool,
    config: &GizmoConfig,
) {
    draw_list.add_line(center, end, color, config.line_thickness());
    draw_list.add_circle_filled(end, config.positive_radius(), color);

    let text_size = draw_list.calc_text_size(label, LabelFont::Regular);
    let text_pos = Vector2::new(
        (end.x - 0.5 * text_size.x).floor(),
        (end.y - 0.5 * text_size.y).floor(),
    );
    let text_color = if selected {
        config.color_white
    } else {
        config.color_black
    };
    draw_list.add_text(text_pos, text_color, label, LabelFont::Regular);
}

/// Faded disc with an outline; labelled only while selected.
fn draw_negative_handle<D: GizmoDrawList + ?Sized>(
    draw_list: &mut D,
    end: Vector2<f32>,
    color: ImColor32,
    label: &str,
    selected: bool,
    config: &GizmoConfig,
) {
    let radius = config.negative_radius();
    draw_list.add_circle_filled(end, radius, color_change_opacity(color, NEGATIVE_FILL_OPACITY));
    draw_list.add_circle(end, radius, color, NEGATIVE_OUTLINE_THICKNESS);

    if selected {
        draw_list.add_circle(end, radius, config.color_white, NEGATIVE_OUTLINE_THICKNESS);

        let text_size = draw_list.calc_text_size(label, LabelFont::Small);
        let text_pos = Vector2::new(
            (end.x - 0.5 * text_size.x).floor(),
            (end.y - 0.35 * text_size.y).floor(),
        );
        draw_list.add_text(text_pos, config.color_white, label, LabelFont::Small);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording draw list shared by the gizmo tests.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        Line {
            from: Vector2<f32>,
            to: Vector2<f32>,
            color: ImColor32,
            thickness: f32,
        },
        CircleFilled {
            center: Vector2<f32>,
            radius: f32,
            color: ImColor32,
        },
        Circle {
            center: Vector2<f32>,
            radius: f32,
            color: ImColor32,
            thickness: f32,
        },
        Text {
            position: Vector2<f32>,
            color: ImColor32,
            text: String,
            font: LabelFont,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingDrawList {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingDrawList {
        pub fn texts(&self) -> Vec<(&str, ImColor32, LabelFont)> {
            self.commands
                .iter()
                .filter_map(|command| match command {
                    DrawCommand::Text {
                        text, color, font, ..
                    } => Some((text.as_str(), *color, *font)),
                    _ => None,
                })
                .collect()
        }

        pub fn all_finite(&self) -> bool {
            self.commands.iter().all(|command| match command {
                DrawCommand::Line { from, to, .. } => is_finite_point(*from) && is_finite_point(*to),
                DrawCommand::CircleFilled { center, .. } | DrawCommand::Circle { center, .. } => {
                    is_finite_point(*center)
                }
                DrawCommand::Text { position, .. } => is_finite_point(*position),
            })
        }
    }

    impl GizmoDrawList for RecordingDrawList {
        fn add_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: ImColor32, thickness: f32) {
            self.commands.push(DrawCommand::Line {
                from,
                to,
                color,
                thickness,
            });
        }

        fn add_circle_filled(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32) {
            self.commands.push(DrawCommand::CircleFilled {
                center,
                radius,
                color,
            });
        }

        fn add_circle(&mut self, center: Vector2<f32>, radius: f32, color: ImColor32, thickness: f32) {
            self.commands.push(DrawCommand::Circle {
                center,
                radius,
                color,
                thickness,
            });
        }

        fn calc_text_size(&self, text: &str, font: LabelFont) -> Vector2<f32> {
            let height = match font {
                LabelFont::Regular => 16.0,
                LabelFont::Small => 13.0,
            };
            Vector2::new(height * 0.5 * text.len() as f32, height)
        }

        fn add_text(&mut self, position: Vector2<f32>, color: ImColor32, text: &str, font: LabelFont) {
            self.commands.push(DrawCommand::Text {
                position,
                color,
                text: text.to_string(),
                font,
            });
        }
    }
}
