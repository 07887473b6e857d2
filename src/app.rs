use anyhow::Context;
use std::{sync::Arc, time::Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    gfx::{
        camera::{CameraController, OrbitCamera},
        render_engine::RenderEngine,
    },
    ui::{render_demo_ui, DemoUiState, UiManager},
};

/// Demo application: a window with the gizmo panels over a cleared surface.
pub struct GizmoApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    camera: OrbitCamera,
    controller: CameraController,
    ui_state: DemoUiState,
    last_frame: Instant,
    error: Option<anyhow::Error>,
}

impl GizmoApp {
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                camera: OrbitCamera::default(),
                controller: CameraController::new(),
                ui_state: DemoUiState::default(),
                last_frame: Instant::now(),
                error: None,
            },
        })
    }

    /// Runs the event loop until the window closes.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated with an error")?;

        match self.app_state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title("Orientation Gizmo")
                    .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
            )
            .context("failed to create window")?;
        let window_handle = Arc::new(window);

        let (width, height) = window_handle.inner_size().into();
        let renderer = pollster::block_on(RenderEngine::new(window_handle.clone(), width, height))?;

        let mut ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );
        ui_manager.update_display_size(width, height);
        self.ui_state = DemoUiState::new(Some(ui_manager.small_font()));

        self.window = Some(window_handle);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let (Some(window), Some(render_engine), Some(ui_manager)) = (
            self.window.as_ref(),
            self.render_engine.as_mut(),
            self.ui_manager.as_mut(),
        ) else {
            return Ok(());
        };

        let now = Instant::now();
        let delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.camera.update(delta_time);
        if self.controller.is_moving() && !ui_manager.wants_keyboard() {
            self.controller.update_camera(&mut self.camera);
        }

        let camera = &mut self.camera;
        let ui_state = &mut self.ui_state;
        render_engine.render_frame_with_ui(|device, queue, encoder, color_attachment| {
            ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                render_demo_ui(ui, ui_state, camera);
            })
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // UI sees every input first
        let ui_captured = match self.ui_manager.as_mut() {
            Some(ui_manager) => {
                let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                    window_id,
                    event: event.clone(),
                };
                ui_manager.handle_input(&window, &ui_event)
            }
            None => false,
        };

        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } if !ui_captured => {
                if key_event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    event_loop.exit();
                    return;
                }
                self.controller
                    .process_keyed_events(&key_event, &mut self.camera);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                // Look also works over the viewport canvas, which imgui owns.
                let look_button = button == MouseButton::Right
                    && (self.ui_state.viewport_hovered || state == ElementState::Released);
                if !ui_captured || look_button {
                    self.controller.process_mouse_button(button, state);
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                    return;
                }
                if self.ui_state.exit_requested {
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Don't process camera events when UI is active, unless a look drag is running
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            if ui_manager.wants_input() && !self.controller.is_looking() {
                return;
            }
        }

        self.controller
            .process_events(&event, window, &mut self.camera);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
