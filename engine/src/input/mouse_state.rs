//! FPS-style Mouse State Tracker
//!
//! Handles captured mouse input with delta accumulation for FPS-style camera
//! control. Raw deltas accumulate between frames and are consumed atomically
//! once per tick, so camera rotation never depends on how many motion events
//! the host delivered within a frame.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// FPS-style mouse state tracker with delta accumulation.
///
/// Designed for play with the cursor captured (hidden and confined), where
/// raw mouse motion drives the camera directly:
///
/// - **Delta accumulation**: raw deltas accumulate until consumed
/// - **Cursor capture tracking**: records whether the host captured the cursor
/// - **Atomic consumption**: `consume_delta()` returns the accumulated delta
///   and resets it
///
/// Cursor capture itself is a host/platform action performed outside the
/// simulation; this struct only mirrors the flag so deltas received while
/// uncaptured can be discarded.
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume (screen convention,
    /// positive = down).
    delta_y: f32,
    /// Whether the cursor is currently captured (hidden and confined).
    cursor_captured: bool,
}

impl FpsMouseState {
    /// Create a new FPS mouse state with zero deltas and cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    ///
    /// Call this from the event loop whenever raw mouse motion is received.
    /// Motion received while the cursor is not captured is ignored.
    ///
    /// # Arguments
    ///
    /// * `dx` - Horizontal delta in device units (positive = right)
    /// * `dy` - Vertical delta in device units (positive = down)
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor_captured {
            self.delta_x += dx;
            self.delta_y += dy;
        }
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    ///
    /// Call this once per tick to get all accumulated mouse motion since the
    /// previous tick.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Set whether the cursor is captured.
    ///
    /// Accumulated deltas are cleared when the capture state changes, to
    /// prevent the camera jumping on the first captured frame.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        if self.cursor_captured != captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
        self.cursor_captured = captured;
    }

    /// Check whether the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }
}
