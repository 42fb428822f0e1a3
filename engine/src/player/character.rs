//! Player character aggregate
//!
//! Owns the kinematic body and every per-concern controller, and runs them
//! in a fixed order once per tick. The host loop only has to translate raw
//! events into a [`FrameInput`](crate::input::FrameInput) and call
//! [`PlayerCharacter::tick`]; afterwards it reads camera orientation, FOV,
//! and the rope/marker/effect outputs for rendering.
//!
//! Tick order:
//! 1. look (state-independent)
//! 2. state-gated movement: locomotion/gravity/jump in Normal and Shooting,
//!    the pull in Grappling; the aim probe runs in every state
//! 3. FOV smoothing
//! 4. always last, the raw velocity integration `move(velocity * dt)`, so
//!    vertical displacement lands after any horizontal movement of the tick

use glam::Vec3;

use crate::camera::{FovController, LookController};
use crate::input::FrameInput;
use crate::physics::{BlockWorld, CapsuleBody};
use crate::player::config::PlayerConfig;
use crate::player::grapple::{GrappleController, GrapplePhase};
use crate::player::locomotion::LocomotionController;

/// The complete first-person character: body, look, locomotion, grapple,
/// and camera feedback, stepped by a host-owned loop.
#[derive(Debug, Clone)]
pub struct PlayerCharacter {
    /// Kinematic capsule driven through the collision-aware move
    pub body: CapsuleBody,
    /// Body yaw + camera pitch
    pub look: LookController,
    /// Animated camera field of view
    pub fov: FovController,
    /// Planar movement, gravity, jump
    pub locomotion: LocomotionController,
    /// The grapple state machine
    pub grapple: GrappleController,
    /// Camera eye height above the capsule center, in meters
    pub eye_height: f32,
}

impl PlayerCharacter {
    /// Create a character at `spawn` (capsule center), facing -Z, with the
    /// camera at rest at the normal FOV and the rope inactive.
    pub fn new(config: &PlayerConfig, spawn: Vec3) -> Self {
        Self {
            body: CapsuleBody::new(spawn, config.capsule_half_height, config.capsule_radius),
            look: LookController::with_sensitivity(config.mouse_sensitivity),
            fov: FovController::with_rate(config.normal_fov, config.fov_smooth_rate),
            locomotion: LocomotionController::from_config(config),
            grapple: GrappleController::from_config(config),
            eye_height: config.eye_height,
        }
    }

    /// Create a character with default tuning.
    pub fn spawn_default(spawn: Vec3) -> Self {
        Self::new(&PlayerConfig::default(), spawn)
    }

    /// World-space camera position (the aim probe origin).
    #[inline]
    pub fn camera_position(&self) -> Vec3 {
        self.body.position + Vec3::Y * self.eye_height
    }

    /// Advance the character by one tick.
    pub fn tick(&mut self, dt: f32, input: &FrameInput, world: &BlockWorld) {
        match self.grapple.phase() {
            GrapplePhase::Normal => {
                self.handle_look(input, dt);
                self.handle_movement(input, world, dt);
                self.handle_gravity(world, dt);
                self.handle_jump(input, world);
                self.handle_aiming(input, world);
            }
            GrapplePhase::Shooting => {
                self.grapple
                    .tick_shooting(self.body.position, &mut self.fov, dt);
                self.handle_look(input, dt);
                self.handle_movement(input, world, dt);
                self.handle_gravity(world, dt);
                self.handle_jump(input, world);
                self.handle_aiming(input, world);
            }
            GrapplePhase::Grappling => {
                self.handle_look(input, dt);
                self.handle_aiming(input, world);
                self.grapple.tick_pull(
                    &mut self.body,
                    world,
                    &mut self.fov,
                    input.jump,
                    dt,
                );
            }
        }

        self.fov.tick(dt);

        // Raw velocity integration, always last
        let velocity = self.body.velocity;
        self.body.move_and_collide(world, velocity * dt);
    }

    fn handle_look(&mut self, input: &FrameInput, dt: f32) {
        self.look.apply_pointer_delta(input.look_dx, input.look_dy, dt);
    }

    fn handle_movement(&mut self, input: &FrameInput, world: &BlockWorld, dt: f32) {
        self.locomotion.update_planar(
            &mut self.body,
            world,
            self.look.planar_forward(),
            self.look.planar_right(),
            input.move_x,
            input.move_z,
            dt,
        );
    }

    fn handle_gravity(&mut self, world: &BlockWorld, dt: f32) {
        self.locomotion.apply_gravity(&mut self.body, world, dt);
    }

    fn handle_jump(&mut self, input: &FrameInput, world: &BlockWorld) {
        self.locomotion.try_jump(&mut self.body, world, input.jump);
    }

    fn handle_aiming(&mut self, input: &FrameInput, world: &BlockWorld) {
        let body_pos = self.body.position;
        let cam_origin = self.camera_position();
        let cam_dir = self.look.view_forward();
        self.grapple
            .handle_aiming(body_pos, cam_origin, cam_dir, world, input.grapple);
    }
}
