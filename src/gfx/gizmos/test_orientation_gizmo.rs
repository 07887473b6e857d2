//! Frame-by-frame scenarios for OrientationGizmo

#[cfg(test)]
mod tests {
    use super::super::orientation_gizmo::OrientationGizmo;
    use super::super::renderer::testing::{DrawCommand, RecordingDrawList};
    use crate::error::GizmoError;
    use crate::gfx::camera::OrbitCamera;
    use crate::gfx::gizmos::{GizmoConfig, PointerState, ViewMatrixPose};
    use cgmath::{InnerSpace, Vector2, Vector3};

    const EPS: f32 = 1e-3;

    // Center (75, 75), axis length 45, hover radius 57.75.
    fn gizmo() -> OrientationGizmo {
        OrientationGizmo::with_config(
            GizmoConfig::default()
                .with_rect(0.0, 0.0, 100.0)
                .with_rotation_speed(0.25, 0.25),
        )
    }

    fn center(gizmo: &OrientationGizmo) -> Vector2<f32> {
        gizmo.config().rect.center()
    }

    fn press(position: Vector2<f32>) -> PointerState {
        PointerState {
            down: true,
            clicked: true,
            ..PointerState::at(position)
        }
    }

    fn drag(position: Vector2<f32>) -> PointerState {
        PointerState {
            down: true,
            dragging: true,
            ..PointerState::at(position)
        }
    }

    fn release(position: Vector2<f32>) -> PointerState {
        PointerState {
            released: true,
            ..PointerState::at(position)
        }
    }

    fn has_halo(gizmo: &OrientationGizmo, draw_list: &RecordingDrawList) -> bool {
        let config = gizmo.config();
        draw_list.commands.iter().any(|command| {
            matches!(command, DrawCommand::CircleFilled { radius, color, .. }
                if *color == config.hover_circle_color && (*radius - config.hover_radius()).abs() < EPS)
        })
    }

    fn selected_labels(gizmo: &OrientationGizmo, draw_list: &RecordingDrawList) -> usize {
        let white = gizmo.config().color_white;
        draw_list
            .texts()
            .iter()
            .filter(|(_, color, _)| *color == white)
            .count()
    }

    #[test]
    fn test_drag_orbits_camera_yaw() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        let start = center(&gizmo) + Vector2::new(30.0, 30.0);

        let mut draw_list = RecordingDrawList::default();
        let first = gizmo
            .draw_gizmo_camera(&mut draw_list, &press(start), &mut camera, true)
            .unwrap();
        assert!(first.hovered);
        assert!(!first.view_changed);
        assert!(gizmo.state().dragging_started());

        let mut draw_list = RecordingDrawList::default();
        let second = gizmo
            .draw_gizmo_camera(
                &mut draw_list,
                &drag(start + Vector2::new(100.0, 0.0)),
                &mut camera,
                true,
            )
            .unwrap();

        assert!(second.dragging);
        assert!(second.view_changed);
        assert!((camera.yaw - (-90.0 + 25.0)).abs() < EPS);
        assert!(camera.pitch.abs() < EPS);
        assert!((camera.get_distance() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_dragging_over_handle_keeps_orbiting() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        let start = center(&gizmo) + Vector2::new(30.0, 30.0);
        // +X handle sits 45 px right of the center for the default camera.
        let over_x = center(&gizmo) + Vector2::new(45.0, 0.0);

        let mut draw_list = RecordingDrawList::default();
        gizmo
            .draw_gizmo_camera(&mut draw_list, &press(start), &mut camera, true)
            .unwrap();

        // A drag frame that also reports a click must neither highlight nor snap.
        let pointer = PointerState {
            clicked: true,
            ..drag(over_x)
        };
        let mut draw_list = RecordingDrawList::default();
        let response = gizmo
            .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, true)
            .unwrap();

        assert!(response.dragging);
        assert!(response.view_changed);
        assert_eq!(selected_labels(&gizmo, &draw_list), 0);
        let delta = over_x - start;
        assert!((camera.yaw - (-90.0 + delta.x * 0.25)).abs() < EPS);
        assert!((camera.pitch - (-delta.y * 0.25)).abs() < EPS);
    }

    #[test]
    fn test_gizmo_instances_keep_separate_drag_state() {
        let mut left = gizmo();
        let mut right = gizmo();
        right.set_rect(300.0, 0.0, 100.0);
        let mut left_camera = OrbitCamera::default();
        let mut right_camera = OrbitCamera::default();
        let start = center(&left) + Vector2::new(30.0, 30.0);

        let mut draw_list = RecordingDrawList::default();
        left
            .draw_gizmo_camera(&mut draw_list, &press(start), &mut left_camera, true)
            .unwrap();
        right
            .draw_gizmo_camera(&mut draw_list, &press(start), &mut right_camera, true)
            .unwrap();
        assert!(left.state().dragging_started());
        assert!(!right.state().dragging_started());

        let moved = drag(start + Vector2::new(40.0, 0.0));
        let left_response = left
            .draw_gizmo_camera(&mut draw_list, &moved, &mut left_camera, true)
            .unwrap();
        let right_response = right
            .draw_gizmo_camera(&mut draw_list, &moved, &mut right_camera, true)
            .unwrap();

        assert!(left_response.view_changed);
        assert!(!right_response.dragging);
        assert!(!right_response.view_changed);
        assert_eq!(right_camera.yaw, -90.0);
        assert!((left_camera.yaw - (-80.0)).abs() < EPS);
    }

    #[test]
    fn test_click_negative_y_snaps_to_bottom_view() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        camera.target = Vector3::new(1.0, 2.0, 3.0);
        camera.position = camera.target + Vector3::new(0.0, 0.0, 6.0);

        // -Y sits straight below the center for a camera looking down -Z.
        let pointer = press(center(&gizmo) + Vector2::new(0.0, 45.0));
        let mut draw_list = RecordingDrawList::default();
        let response = gizmo
            .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, true)
            .unwrap();

        assert!(response.view_changed);
        assert!(!response.dragging);
        assert_eq!(camera.pitch, -89.9);
        assert_eq!(camera.yaw, 0.0);
        assert!((camera.position - (camera.target - camera.forward * 6.0)).magnitude() < EPS);
        // Looking down -Y from above the target.
        assert!(camera.forward.y < -0.99);
        assert!(camera.position.y > camera.target.y);
    }

    #[test]
    fn test_release_resets_and_hides_halo() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        let start = center(&gizmo) + Vector2::new(30.0, 30.0);
        let outside = start + Vector2::new(200.0, 0.0);

        let mut draw_list = RecordingDrawList::default();
        gizmo
            .draw_gizmo_camera(&mut draw_list, &press(start), &mut camera, true)
            .unwrap();
        assert!(has_halo(&gizmo, &draw_list));

        let mut draw_list = RecordingDrawList::default();
        let dragging = gizmo
            .draw_gizmo_camera(&mut draw_list, &drag(outside), &mut camera, true)
            .unwrap();
        assert!(dragging.dragging);

        let mut draw_list = RecordingDrawList::default();
        let released = gizmo
            .draw_gizmo_camera(&mut draw_list, &release(outside), &mut camera, true)
            .unwrap();
        assert!(!released.dragging);
        assert!(!gizmo.state().dragging_started());
        assert_eq!(gizmo.state().last_pointer_position(), None);

        let mut draw_list = RecordingDrawList::default();
        let idle = gizmo
            .draw_gizmo_camera(&mut draw_list, &PointerState::at(outside), &mut camera, true)
            .unwrap();
        assert!(!idle.hovered);
        assert!(!has_halo(&gizmo, &draw_list));
    }

    #[test]
    fn test_at_most_one_handle_selected() {
        let mut gizmo = gizmo();
        let origin = center(&gizmo);

        for (yaw, pitch) in [(-90.0, 0.0), (-45.0, 30.0), (10.0, -60.0), (135.0, 85.0)] {
            let mut camera = OrbitCamera::default();
            camera.yaw = yaw;
            camera.pitch = pitch;
            camera.update_camera_vectors();
            camera.orbit_target(10.0);

            for dx in (-60..=60).step_by(6) {
                for dy in (-60..=60).step_by(6) {
                    let pointer = PointerState::at(origin + Vector2::new(dx as f32, dy as f32));
                    let mut draw_list = RecordingDrawList::default();
                    gizmo
                        .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, true)
                        .unwrap();
                    assert!(selected_labels(&gizmo, &draw_list) <= 1);
                }
            }
        }
    }

    #[test]
    fn test_hovering_a_handle_highlights_it_without_moving_camera() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        let before = camera.position;

        let pointer = PointerState::at(center(&gizmo) + Vector2::new(45.0, 0.0));
        let mut draw_list = RecordingDrawList::default();
        let response = gizmo
            .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, true)
            .unwrap();

        assert!(!response.view_changed);
        assert_eq!(camera.position, before);
        assert!(draw_list
            .texts()
            .contains(&("X", gizmo.config().color_white, crate::gfx::gizmos::LabelFont::Regular)));
    }

    #[test]
    fn test_non_interactive_camera_draws_no_halo_and_ignores_clicks() {
        let mut gizmo = gizmo();
        let mut camera = OrbitCamera::default();
        let before = camera.position;

        let pointer = press(center(&gizmo) + Vector2::new(45.0, 0.0));
        let mut draw_list = RecordingDrawList::default();
        let response = gizmo
            .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, false)
            .unwrap();

        assert!(response.hovered);
        assert!(!response.view_changed);
        assert!(!has_halo(&gizmo, &draw_list));
        assert_eq!(selected_labels(&gizmo, &draw_list), 0);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_view_matrix_without_pivot_is_not_interactive() {
        let mut gizmo = gizmo();
        let view = OrbitCamera::default().get_view_matrix();

        let pointer = press(center(&gizmo) + Vector2::new(45.0, 0.0));
        let mut draw_list = RecordingDrawList::default();
        let (response, new_view) = gizmo.draw_gizmo(&mut draw_list, &pointer, &view, 0.0).unwrap();

        assert!(!response.view_changed);
        assert_eq!(new_view, view);
        assert!(!has_halo(&gizmo, &draw_list));
    }

    #[test]
    fn test_view_matrix_click_snaps_around_pivot() {
        let mut gizmo = gizmo();
        let camera = OrbitCamera::default();
        let view = camera.get_view_matrix();

        let pointer = press(center(&gizmo) + Vector2::new(0.0, 45.0));
        let mut draw_list = RecordingDrawList::default();
        let (response, new_view) = gizmo
            .draw_gizmo(&mut draw_list, &pointer, &view, camera.get_distance())
            .unwrap();

        assert!(response.view_changed);
        let pose = ViewMatrixPose::new(new_view, 10.0);
        let (_, pitch) = pose.yaw_pitch();
        assert!((pitch + 89.9).abs() < 0.05);
        assert!(pose.pivot().magnitude() < EPS);
        assert!(((pose.eye()).magnitude() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_view_matrix_drag_rotates_view() {
        let mut gizmo = gizmo();
        let view = OrbitCamera::default().get_view_matrix();
        let start = center(&gizmo) + Vector2::new(30.0, 30.0);

        let mut draw_list = RecordingDrawList::default();
        gizmo
            .draw_gizmo(&mut draw_list, &press(start), &view, 10.0)
            .unwrap();

        let mut draw_list = RecordingDrawList::default();
        let (response, new_view) = gizmo
            .draw_gizmo(&mut draw_list, &drag(start + Vector2::new(0.0, 40.0)), &view, 10.0)
            .unwrap();

        assert!(response.view_changed);
        let (yaw, pitch) = ViewMatrixPose::new(new_view, 10.0).yaw_pitch();
        assert!((yaw + 90.0).abs() < 0.05);
        assert!((pitch + 10.0).abs() < 0.05);
    }

    #[test]
    fn test_overflowing_handles_are_skipped() {
        let mut gizmo = gizmo();
        let mut view = OrbitCamera::default().get_view_matrix();
        // Finite, but the projected X axis overflows to infinity.
        view.x.x = f32::MAX;

        let mut draw_list = RecordingDrawList::default();
        let result = gizmo.draw_gizmo(&mut draw_list, &PointerState::default(), &view, 10.0);

        assert!(result.is_ok());
        assert!(draw_list.all_finite());
        assert!(!draw_list.commands.is_empty());
    }

    #[test]
    fn test_preconditions_abort_without_drawing() {
        let mut gizmo = gizmo();
        let pointer = press(center(&gizmo));

        let mut view = OrbitCamera::default().get_view_matrix();
        view.w.z = f32::NAN;
        let mut draw_list = RecordingDrawList::default();
        assert_eq!(
            gizmo.draw_gizmo(&mut draw_list, &pointer, &view, 10.0).unwrap_err(),
            GizmoError::NonFiniteViewMatrix
        );

        let view = OrbitCamera::default().get_view_matrix();
        assert!(matches!(
            gizmo.draw_gizmo(&mut draw_list, &pointer, &view, f32::INFINITY),
            Err(GizmoError::NonFinitePivotDistance(_))
        ));

        let mut camera = OrbitCamera::default();
        camera.position.x = f32::NAN;
        assert_eq!(
            gizmo
                .draw_gizmo_camera(&mut draw_list, &pointer, &mut camera, true)
                .unwrap_err(),
            GizmoError::DegenerateCamera
        );

        assert!(draw_list.commands.is_empty());
        assert!(!gizmo.state().dragging_started());
    }

    #[test]
    fn test_degenerate_rect_is_clamped() {
        let mut gizmo = gizmo();
        gizmo.set_rect(5.0, 5.0, -20.0);
        assert_eq!(gizmo.config().rect.size, crate::gfx::gizmos::config::MIN_GIZMO_SIZE);

        let mut camera = OrbitCamera::default();
        let mut draw_list = RecordingDrawList::default();
        gizmo
            .draw_gizmo_camera(&mut draw_list, &PointerState::default(), &mut camera, true)
            .unwrap();
        assert!(draw_list.all_finite());
    }
}
