//! # Pointer Interaction
//!
//! Per-frame pointer input and the drag state the gizmo keeps between frames.

use cgmath::Vector2;

/// Snapshot of the primary pointer button for one frame.
///
/// Positions are screen pixels, Y down. `clicked` means the button went down
/// this frame; `dragging` means it is held and has moved past the host's drag
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vector2<f32>,
    pub down: bool,
    pub released: bool,
    pub clicked: bool,
    pub dragging: bool,
    pub window_focused: bool,
}

impl PointerState {
    /// Pointer resting at `position` with no buttons involved.
    pub fn at(position: Vector2<f32>) -> Self {
        Self {
            position,
            down: false,
            released: false,
            clicked: false,
            dragging: false,
            window_focused: true,
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(Vector2::new(0.0, 0.0))
    }
}

/// What the gizmo is doing with the pointer this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    /// Button went down over the gizmo; waiting for movement.
    HoverArmed,
    /// Orbiting: pointer deltas rotate the view.
    Dragging,
}

/// Drag state carried across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    dragging_started: bool,
    last_pointer_position: Option<Vector2<f32>>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging_started(&self) -> bool {
        self.dragging_started
    }

    pub fn last_pointer_position(&self) -> Option<Vector2<f32>> {
        self.last_pointer_position
    }

    /// Advances the state machine with this frame's input.
    ///
    /// A press inside the hover circle arms the drag; a release anywhere
    /// disarms it. The result is `Dragging` only while the window is focused,
    /// the host reports a drag and the drag was armed over the gizmo.
    pub fn update(&mut self, hovered: bool, pointer: &PointerState) -> InteractionPhase {
        if pointer.down && hovered && !self.dragging_started {
            self.dragging_started = true;
            self.last_pointer_position = Some(pointer.position);
            log::debug!("orientation gizmo drag armed at {:?}", pointer.position);
        }

        if pointer.released {
            if self.dragging_started {
                log::debug!("orientation gizmo drag released");
            }
            self.reset();
        }

        if pointer.window_focused && pointer.dragging && self.dragging_started {
            InteractionPhase::Dragging
        } else if self.dragging_started {
            InteractionPhase::HoverArmed
        } else {
            InteractionPhase::Idle
        }
    }

    /// Pointer movement since the previous call, recording `position` as the new anchor.
    ///
    /// `None` when no drag is armed.
    pub fn take_pointer_delta(&mut self, position: Vector2<f32>) -> Option<Vector2<f32>> {
        let last = self.last_pointer_position?;
        self.last_pointer_position = Some(position);
        Some(position - last)
    }

    pub fn reset(&mut self) {
        self.dragging_started = false;
        self.last_pointer_position = None;
    }
}
