//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse. This
//! module is decoupled from any specific windowing system: the host
//! translates its raw events into [`KeyCode`]/[`MouseButton`] values and the
//! simulation consumes one [`FrameInput`] snapshot per tick.
//!
//! # Example
//!
//! ```ignore
//! use grapple_rush_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//! input.mouse.set_captured(true);
//!
//! // In the event loop:
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_button(MouseButton::Right, true);
//! input.accumulate_mouse_delta(12.0, -3.0);
//!
//! // Once per simulation tick:
//! let frame = input.frame_input();
//! // ... run the simulation with `frame` ...
//! input.end_frame();
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::{FpsMouseState, MouseButton};

/// Edge-tracked state of a button or logical action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Held down this tick
    pub pressed: bool,
    /// Transitioned up -> down this tick
    pub just_pressed: bool,
    /// Transitioned down -> up this tick
    pub just_released: bool,
}

impl ButtonState {
    /// Feed a press/release event, updating the edge flags.
    ///
    /// Repeated events with the same state (e.g. OS key repeat) do not
    /// re-trigger the edges.
    pub fn set(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.pressed;
        self.just_released = !pressed && self.pressed;
        self.pressed = pressed;
    }

    /// Clear the per-tick edge flags. Call at the end of every tick.
    pub fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Per-tick input snapshot the simulation consumes.
///
/// All values are already logical: axes are in [-1, 1], look deltas are raw
/// pointer units (sensitivity scaling happens in the look controller), and
/// the buttons carry edge flags valid for this tick only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Strafe axis in [-1, 1]; positive = right
    pub move_x: f32,
    /// Forward axis in [-1, 1]; positive = forward
    pub move_z: f32,
    /// Pointer delta; positive = look right
    pub look_dx: f32,
    /// Pointer delta; positive = look up
    pub look_dy: f32,
    /// Jump action (edge-triggered)
    pub jump: ButtonState,
    /// Grapple aim action (hold to aim, release to fire)
    pub grapple: ButtonState,
}

impl FrameInput {
    /// A snapshot with no input at all - useful for tests and idle frames.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Combined input state for keyboard and mouse.
///
/// Collects raw events between ticks and produces the [`FrameInput`]
/// snapshot. The right mouse button is wired to the grapple action in
/// addition to its key binding.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Movement key states (WASD)
    pub movement: MovementKeys,
    /// Key-to-action bindings
    pub bindings: KeyBindings,
    /// Captured-mouse delta accumulator
    pub mouse: FpsMouseState,
    jump: ButtonState,
    grapple: ButtonState,
}

impl InputState {
    /// Create a new input state with default bindings and all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.movement.handle_key(key, pressed);

        match self.bindings.get_action(key) {
            Some(InputAction::Jump) => self.jump.set(pressed),
            Some(InputAction::Grapple) => self.grapple.set(pressed),
            _ => {}
        }
    }

    /// Handle a mouse button event. The right button aims/fires the grapple.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Right {
            self.grapple.set(pressed);
        }
    }

    /// Accumulate raw mouse motion (screen convention, positive dy = down).
    pub fn accumulate_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse.accumulate_delta(dx, dy);
    }

    /// Produce the snapshot for the current tick, consuming the accumulated
    /// mouse delta.
    pub fn frame_input(&mut self) -> FrameInput {
        let (dx, dy) = self.mouse.consume_delta();
        FrameInput {
            move_x: self.movement.right_axis() as f32,
            move_z: self.movement.forward_axis() as f32,
            look_dx: dx,
            // Screen deltas grow downward; looking up is positive here
            look_dy: -dy,
            jump: self.jump,
            grapple: self.grapple,
        }
    }

    /// Clear per-tick edge flags. Call after the simulation consumed the
    /// snapshot.
    pub fn end_frame(&mut self) {
        self.jump.end_frame();
        self.grapple.end_frame();
    }

    /// Reset all input state to defaults (held keys, edges, pending deltas).
    pub fn reset(&mut self) {
        self.movement.reset();
        self.jump = ButtonState::default();
        self.grapple = ButtonState::default();
        let _ = self.mouse.consume_delta();
    }
}
