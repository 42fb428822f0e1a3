//! Ground locomotion: camera-relative movement, gravity, jumping
//!
//! Planar movement is always expressed in the body's own frame - the input
//! axes push along the facing-derived right/forward directions, never along
//! world axes. Vertical motion lives on the body's velocity and is the only
//! velocity channel this controller touches.

use glam::Vec3;

use crate::input::ButtonState;
use crate::physics::{BlockWorld, CapsuleBody};
use crate::player::config::PlayerConfig;

/// Camera-relative planar movement plus the vertical channel (gravity and
/// jump impulses).
///
/// The controller owns its tuning; construct it from a [`PlayerConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionController {
    /// Ground movement speed in m/s
    pub move_speed: f32,
    /// Gravity acceleration in m/s² (negative = down)
    pub gravity: f32,
    /// Upward velocity applied by a jump, in m/s
    pub jump_force: f32,
    /// Resting downward velocity while grounded, in m/s
    pub grounded_fall_clamp: f32,
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl LocomotionController {
    /// Build a controller from the shared tuning config.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            move_speed: config.movement_speed,
            gravity: config.gravity,
            jump_force: config.jump_force,
            grounded_fall_clamp: config.grounded_fall_clamp,
        }
    }

    /// Apply planar movement input for one tick.
    ///
    /// The movement vector is `right * move_x + forward * move_z`, both axes
    /// taken from the body's current facing, swept through the world by the
    /// collision-aware move. Axes are expected in [-1, 1].
    pub fn update_planar(
        &self,
        body: &mut CapsuleBody,
        world: &BlockWorld,
        forward: Vec3,
        right: Vec3,
        move_x: f32,
        move_z: f32,
        dt: f32,
    ) {
        let movement = right * move_x + forward * move_z;
        body.move_and_collide(world, movement * self.move_speed * dt);
    }

    /// Integrate gravity into the body's vertical velocity for one tick.
    ///
    /// - Grounded with a large downward carry-over: clamp to the resting
    ///   value, so the body stays pressed to the ground without the fall
    ///   speed of the previous airtime
    /// - Airborne: accelerate downward
    /// - Grounded otherwise: leave the velocity alone (jump impulses pass
    ///   through untouched)
    ///
    /// The grounded state is probed fresh here; it must never be carried
    /// over from an earlier point in the tick.
    pub fn apply_gravity(&self, body: &mut CapsuleBody, world: &BlockWorld, dt: f32) {
        if body.is_grounded(world) {
            if body.velocity.y < self.grounded_fall_clamp {
                body.velocity.y = self.grounded_fall_clamp;
            }
        } else {
            body.velocity.y += self.gravity * dt;
        }
    }

    /// Apply a jump impulse on the rising edge of the jump input, if the
    /// body is grounded.
    ///
    /// Returns `true` if a jump was initiated.
    pub fn try_jump(&self, body: &mut CapsuleBody, world: &BlockWorld, jump: ButtonState) -> bool {
        if jump.just_pressed && body.is_grounded(world) {
            body.velocity.y = self.jump_force;
            log::debug!("jump: impulse {} m/s", self.jump_force);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_world() -> BlockWorld {
        let mut world = BlockWorld::new(1.0);
        world.fill((-10, -1, -10), (10, -1, 10), 0);
        world
    }

    fn grounded_body() -> CapsuleBody {
        CapsuleBody::new(Vec3::new(0.0, 0.9, 0.0), 0.9, 0.4)
    }

    fn pressed_edge() -> ButtonState {
        let mut b = ButtonState::default();
        b.set(true);
        b
    }

    #[test]
    fn test_gravity_clamps_grounded_fall() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();
        body.velocity.y = -5.0;

        ctrl.apply_gravity(&mut body, &world, 1.0 / 60.0);
        assert_eq!(body.velocity.y, -2.0);
    }

    #[test]
    fn test_gravity_leaves_small_grounded_velocity() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();
        body.velocity.y = -1.0;

        ctrl.apply_gravity(&mut body, &world, 1.0 / 60.0);
        assert_eq!(body.velocity.y, -1.0);
    }

    #[test]
    fn test_gravity_accelerates_airborne_fall() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();
        body.position.y = 10.0;
        body.velocity.y = 0.0;

        ctrl.apply_gravity(&mut body, &world, 1.0);
        assert!((body.velocity.y - (-9.18)).abs() < 1e-4);
    }

    #[test]
    fn test_gravity_does_not_clamp_upward_velocity() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();
        body.velocity.y = 10.0; // Fresh jump impulse, still within probe range

        ctrl.apply_gravity(&mut body, &world, 1.0 / 60.0);
        assert_eq!(body.velocity.y, 10.0);
    }

    #[test]
    fn test_planar_movement_follows_facing() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();

        // Facing -Z: forward input moves toward -Z at move_speed
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let right = Vec3::new(1.0, 0.0, 0.0);
        ctrl.update_planar(&mut body, &world, forward, right, 0.0, 1.0, 0.1);

        assert!((body.position.z - (-1.0)).abs() < 1e-4);
        assert_eq!(body.position.x, 0.0);
    }

    #[test]
    fn test_strafe_movement() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();

        let forward = Vec3::new(0.0, 0.0, -1.0);
        let right = Vec3::new(1.0, 0.0, 0.0);
        ctrl.update_planar(&mut body, &world, forward, right, -1.0, 0.0, 0.1);

        assert!((body.position.x - (-1.0)).abs() < 1e-4);
        assert_eq!(body.position.z, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();

        assert!(ctrl.try_jump(&mut body, &world, pressed_edge()));
        assert_eq!(body.velocity.y, 10.0);
    }

    #[test]
    fn test_no_jump_in_air() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();
        body.position.y = 5.0;

        assert!(!ctrl.try_jump(&mut body, &world, pressed_edge()));
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_no_jump_on_held_button() {
        let world = flat_world();
        let ctrl = LocomotionController::default();
        let mut body = grounded_body();

        // Held but not a rising edge
        let mut held = ButtonState::default();
        held.set(true);
        held.end_frame();

        assert!(!ctrl.try_jump(&mut body, &world, held));
    }
}
