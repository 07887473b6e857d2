use winit::{
    event::{DeviceEvent, ElementState, KeyEvent, MouseButton},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use super::orbit_camera::OrbitCamera;

/// Fly controls for the demo viewport.
///
/// W/S/A/D/E/Q move the camera, dragging with the right mouse button looks
/// around, Shift+C resets the pose.
#[derive(Debug, Default)]
pub struct CameraController {
    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_left_pressed: bool,
    is_right_pressed: bool,
    is_up_pressed: bool,
    is_down_pressed: bool,
    is_shift_held: bool,
    is_look_pressed: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw mouse motion; rotates the camera while the look button is held.
    pub fn process_events(&mut self, event: &DeviceEvent, window: &Window, camera: &mut OrbitCamera) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.is_look_pressed {
                camera.rotate(delta.0 as f32, delta.1 as f32);
                window.request_redraw();
            }
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.is_look_pressed = state == ElementState::Pressed;
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent, camera: &mut OrbitCamera) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        match code {
            KeyCode::KeyW => self.is_forward_pressed = pressed,
            KeyCode::KeyS => self.is_backward_pressed = pressed,
            KeyCode::KeyA => self.is_left_pressed = pressed,
            KeyCode::KeyD => self.is_right_pressed = pressed,
            KeyCode::KeyE => self.is_up_pressed = pressed,
            KeyCode::KeyQ => self.is_down_pressed = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.is_shift_held = pressed,
            KeyCode::KeyC if pressed && self.is_shift_held => {
                log::info!("resetting camera to default pose");
                camera.reset_to_default();
            }
            _ => (),
        }
    }

    /// Applies held movement keys; the camera must have been updated this frame.
    pub fn update_camera(&self, camera: &mut OrbitCamera) {
        if self.is_forward_pressed {
            camera.move_forward();
        }
        if self.is_backward_pressed {
            camera.move_backward();
        }
        if self.is_right_pressed {
            camera.move_right();
        }
        if self.is_left_pressed {
            camera.move_left();
        }
        if self.is_up_pressed {
            camera.move_up();
        }
        if self.is_down_pressed {
            camera.move_down();
        }
    }

    /// Returns true while the look button is held
    pub fn is_looking(&self) -> bool {
        self.is_look_pressed
    }

    /// Returns true if any movement key is held
    pub fn is_moving(&self) -> bool {
        self.is_forward_pressed
            || self.is_backward_pressed
            || self.is_left_pressed
            || self.is_right_pressed
            || self.is_up_pressed
            || self.is_down_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_button_toggles_look() {
        let mut controller = CameraController::new();
        assert!(!controller.is_looking());

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(!controller.is_looking());

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(controller.is_looking());
        assert!(!controller.is_moving());

        controller.process_mouse_button(MouseButton::Right, ElementState::Released);
        assert!(!controller.is_looking());
    }
}
