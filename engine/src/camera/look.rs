//! First-person look controller
//!
//! Converts pointer deltas into body yaw and camera pitch. The body only
//! ever rotates about the vertical axis; the vertical component of the look
//! is a separate pitch accumulator applied to the camera alone, so the
//! character's facing stays horizontal no matter where the player looks.
//!
//! Key behavior:
//! - Deltas are scaled by sensitivity and the tick duration
//!   (default: 500 degrees per delta-unit per second)
//! - Yaw is unbounded and wraps naturally
//! - Pitch is clamped to ±90 degrees

use glam::Vec3;

/// Default look sensitivity, in degrees per pointer-delta unit per second.
pub const LOOK_SENSITIVITY: f32 = 500.0;

/// Pitch limit: straight down, in radians
const PITCH_MIN: f32 = -std::f32::consts::FRAC_PI_2;
/// Pitch limit: straight up, in radians
const PITCH_MAX: f32 = std::f32::consts::FRAC_PI_2;

/// First-person look state: body yaw plus camera pitch.
///
/// ## Usage
/// ```ignore
/// let mut look = LookController::new();
///
/// // Each tick, feed the raw pointer delta:
/// look.apply_pointer_delta(mouse_dx, mouse_dy, dt);
///
/// // Movement uses the planar basis; aiming uses the full view direction
/// let forward = look.planar_forward();
/// let aim = look.view_forward();
/// ```
#[derive(Clone, Debug)]
pub struct LookController {
    /// Body yaw in radians - unrestricted, wraps around
    pub yaw: f32,
    /// Camera pitch in radians - clamped to ±90°
    pub pitch: f32,
    /// Sensitivity in degrees per pointer-delta unit per second
    pub sensitivity: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl LookController {
    /// Create a look controller with default sensitivity, facing -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a look controller with custom sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Apply a pointer delta, rotating body yaw and camera pitch.
    ///
    /// The rotation applied is `delta * sensitivity * dt` degrees, matching
    /// per-second sensitivity tuning: a steady pointer speed produces the
    /// same turn rate at any frame rate.
    ///
    /// # Arguments
    /// * `dx` - Pointer movement right (positive = look right)
    /// * `dy` - Pointer movement up (positive = look up)
    /// * `dt` - Tick duration in seconds
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32, dt: f32) {
        let yaw_step = (dx * self.sensitivity * dt).to_radians();
        let pitch_step = (dy * self.sensitivity * dt).to_radians();

        self.yaw += yaw_step;
        // Pitch accumulates separately and only ever drives the camera
        self.pitch = (self.pitch + pitch_step).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// The camera's view direction, derived from yaw and pitch.
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward
    ///
    /// When yaw=0 and pitch=0 the view points toward -Z.
    #[inline]
    pub fn view_forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// The body's forward direction on the horizontal plane (yaw only).
    #[inline]
    pub fn planar_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// The body's right direction on the horizontal plane.
    ///
    /// Perpendicular to [`planar_forward`](Self::planar_forward).
    #[inline]
    pub fn planar_right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Reset orientation to default (facing -Z, level pitch).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
