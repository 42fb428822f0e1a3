//! Grapple hook state machine
//!
//! The centerpiece of the character kit. A grapple interaction runs through
//! three phases:
//!
//! - **Normal**: free movement; holding the grapple action aims (a forward
//!   probe tracks the surface under the crosshair), releasing it fires if
//!   the aimed point is far enough away.
//! - **Shooting**: the rope visual extends toward the fixed anchor while
//!   normal movement continues. When the rope reaches the anchor the hook
//!   connects.
//! - **Grappling**: the body is pulled toward the anchor with
//!   distance-derived, clamped speed; gravity is suppressed for the
//!   duration. The pull ends on arrival, on timeout, or through a
//!   jump-cancel that converts the pull into a jump impulse.
//!
//! A [`GrappleSession`] exists exactly while the machine is not in the
//! `Normal` phase; the payload enum makes that invariant structural. The
//! aiming flag is orthogonal: it keeps updating the probe and marker in any
//! phase, but releasing it only commits a shot from `Normal`.

use glam::Vec3;

use crate::camera::FovController;
use crate::input::ButtonState;
use crate::physics::{BlockWorld, CapsuleBody};
use crate::player::config::PlayerConfig;

/// One bounded grapple interaction, from committed shot to pull completion
/// or cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrappleSession {
    /// World-space point the hook was fired at; fixed for the session
    pub anchor: Vec3,
    /// Remaining time budget in seconds, counted down during the pull
    pub time_left: f32,
    /// Current rope length in meters (grows while shooting, tracks the live
    /// anchor distance while pulling)
    pub rope_length: f32,
}

/// The grapple phases, carrying the session where one exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrappleState {
    /// No session; regular locomotion
    Normal,
    /// Rope extending toward the anchor
    Shooting(GrappleSession),
    /// Body being pulled toward the anchor
    Grappling(GrappleSession),
}

/// Discriminant-only view of [`GrappleState`], for per-tick dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrapplePhase {
    Normal,
    Shooting,
    Grappling,
}

/// Transform state of the rope mesh, written by the state machine and read
/// by the host renderer. One-way output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeVisual {
    /// Whether the rope should be rendered at all
    pub active: bool,
    /// Point the rope is stretched toward
    pub anchor: Vec3,
    /// Length to scale the rope mesh to, in meters
    pub length: f32,
}

impl Default for RopeVisual {
    fn default() -> Self {
        Self {
            active: false,
            anchor: Vec3::ZERO,
            length: 0.0,
        }
    }
}

/// The aim indicator shown while the grapple action is held. One-way output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimMarker {
    /// Visible iff the player is aiming
    pub visible: bool,
    /// Probe hit position; the body's own position when nothing was hit
    pub position: Vec3,
}

impl Default for AimMarker {
    fn default() -> Self {
        Self {
            visible: false,
            position: Vec3::ZERO,
        }
    }
}

/// The grapple state machine and its feedback outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GrappleController {
    state: GrappleState,
    /// Aiming overlay; only a release in `Normal` can commit a shot
    aiming: bool,
    /// Probe result refreshed every tick while aiming
    aim_point: Vec3,
    rope: RopeVisual,
    marker: AimMarker,
    /// Whether the zoom particle effect should be playing
    zoom_effect: bool,

    // Tuning
    /// Rope extension speed while shooting, in m/s
    pub shooting_speed: f32,
    /// Multiplier on the distance-derived pull speed
    pub speed_multiplier: f32,
    /// Lower pull speed bound in m/s; also the jump-cancel exit speed
    pub min_speed: f32,
    /// Upper pull speed bound in m/s
    pub max_speed: f32,
    /// Session time budget in seconds
    pub session_time: f32,
    /// Minimum commit distance and arrival threshold, in meters
    pub min_dist: f32,
    /// Upward impulse of the jump-cancel, in m/s
    pub jump_force: f32,
    /// FOV pushed while pulling, in degrees
    pub zoom_fov: f32,
    /// FOV restored when the session ends, in degrees
    pub normal_fov: f32,
}

impl Default for GrappleController {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl GrappleController {
    /// Build a controller from the shared tuning config, idle in `Normal`.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            state: GrappleState::Normal,
            aiming: false,
            aim_point: Vec3::ZERO,
            rope: RopeVisual::default(),
            marker: AimMarker::default(),
            zoom_effect: false,

            shooting_speed: config.grapple_shooting_speed,
            speed_multiplier: config.grapple_speed_multiplier,
            min_speed: config.min_grapple_speed,
            max_speed: config.max_grapple_speed,
            session_time: config.grapple_time,
            min_dist: config.min_grapple_dist,
            jump_force: config.jump_force,
            zoom_fov: config.grapple_fov,
            normal_fov: config.normal_fov,
        }
    }

    /// Current phase, for dispatching.
    pub fn phase(&self) -> GrapplePhase {
        match self.state {
            GrappleState::Normal => GrapplePhase::Normal,
            GrappleState::Shooting(_) => GrapplePhase::Shooting,
            GrappleState::Grappling(_) => GrapplePhase::Grappling,
        }
    }

    /// Full state including the session payload.
    pub fn state(&self) -> &GrappleState {
        &self.state
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&GrappleSession> {
        match &self.state {
            GrappleState::Normal => None,
            GrappleState::Shooting(s) | GrappleState::Grappling(s) => Some(s),
        }
    }

    /// Whether the aim overlay is currently held.
    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    /// The current probe point (the body position when aiming at nothing).
    pub fn aim_point(&self) -> Vec3 {
        self.aim_point
    }

    /// Rope mesh transform state for the host renderer.
    pub fn rope(&self) -> &RopeVisual {
        &self.rope
    }

    /// Aim indicator state for the host renderer.
    pub fn aim_marker(&self) -> &AimMarker {
        &self.marker
    }

    /// Whether the zoom particle effect should be playing.
    pub fn zoom_effect_active(&self) -> bool {
        self.zoom_effect
    }

    /// Process the aim overlay for one tick: button edges, the commit
    /// attempt, and the probe refresh.
    ///
    /// Runs in every phase; the commit is gated on `Normal`. The probe
    /// refresh happens after the edge handling, so a commit consumes the
    /// point acquired on the previous tick - the one the player saw.
    pub fn handle_aiming(
        &mut self,
        body_pos: Vec3,
        cam_origin: Vec3,
        cam_dir: Vec3,
        world: &BlockWorld,
        grapple: ButtonState,
    ) {
        if grapple.just_pressed {
            self.aiming = true;
        } else if grapple.just_released {
            self.aiming = false;
            if matches!(self.state, GrappleState::Normal)
                && self.aim_point.distance(body_pos) > self.min_dist
            {
                self.state = GrappleState::Shooting(GrappleSession {
                    anchor: self.aim_point,
                    time_left: self.session_time,
                    rope_length: 0.0,
                });
                self.rope = RopeVisual {
                    active: true,
                    anchor: self.aim_point,
                    length: 0.0,
                };
                log::info!(
                    "grapple: shot committed, anchor ({:.2}, {:.2}, {:.2})",
                    self.aim_point.x,
                    self.aim_point.y,
                    self.aim_point.z
                );
            }
            // Too-close or missing aim point: silently keep walking
        }

        self.aim_point = if self.aiming {
            match world.ray_cast(cam_origin, cam_dir, f32::INFINITY) {
                Some(hit) => hit.position,
                None => body_pos,
            }
        } else {
            body_pos
        };
        self.marker.visible = self.aiming;
        self.marker.position = self.aim_point;
    }

    /// Advance the shot for one tick: extend the rope and connect once it
    /// reaches the anchor.
    ///
    /// On connection the zoom feedback starts and the FOV target is pushed
    /// to the zoom value.
    pub fn tick_shooting(&mut self, body_pos: Vec3, fov: &mut FovController, dt: f32) {
        let GrappleState::Shooting(mut session) = self.state else {
            return;
        };

        session.rope_length += self.shooting_speed * dt;
        self.rope.anchor = session.anchor;
        self.rope.length = session.rope_length;

        let dist = body_pos.distance(session.anchor);
        if session.rope_length >= dist {
            self.state = GrappleState::Grappling(session);
            self.zoom_effect = true;
            fov.set_target(self.zoom_fov);
            log::debug!("grapple: hooked at {:.2} m, pulling", dist);
        } else {
            self.state = GrappleState::Shooting(session);
        }
    }

    /// Advance the pull for one tick.
    ///
    /// Order within the tick, matching the session semantics:
    /// 1. rope tracks the live anchor distance
    /// 2. jump-cancel exits before any pull movement
    /// 3. the body is pulled with distance-derived, clamped speed
    /// 4. arrival / timeout end the session; otherwise gravity is suppressed
    ///    and the timer counts down
    pub fn tick_pull(
        &mut self,
        body: &mut CapsuleBody,
        world: &BlockWorld,
        fov: &mut FovController,
        jump: ButtonState,
        dt: f32,
    ) {
        let GrappleState::Grappling(mut session) = self.state else {
            return;
        };

        let to_anchor = session.anchor - body.position;
        let dist = to_anchor.length();
        session.rope_length = dist;
        self.rope.anchor = session.anchor;
        self.rope.length = dist;

        // Jump-cancel: the remaining pull becomes a jump impulse, applied by
        // the host's end-of-tick velocity integration
        if jump.just_pressed {
            let dir = if dist > f32::EPSILON {
                to_anchor / dist
            } else {
                Vec3::ZERO
            };
            body.velocity = dir * self.min_speed * dt;
            body.velocity.y += self.jump_force;
            log::info!("grapple: jump-cancel at {:.2} m from anchor", dist);
            self.stop_session(fov);
            return;
        }

        // Standing exactly on the anchor: nothing to pull along, the session
        // is complete
        if dist <= f32::EPSILON {
            self.stop_session(fov);
            return;
        }

        let dir = to_anchor / dist;
        let speed = dist.clamp(self.min_speed, self.max_speed) * self.speed_multiplier;
        body.move_and_collide(world, dir * speed * dt);

        if body.position.distance(session.anchor) < self.min_dist || session.time_left <= 0.0 {
            self.stop_session(fov);
        } else {
            // Gravity must not accumulate while the hook carries the body
            body.velocity.y = 0.0;
            session.time_left -= dt;
            self.state = GrappleState::Grappling(session);
        }
    }

    /// End the session: rope off, zoom feedback off, FOV back to normal.
    fn stop_session(&mut self, fov: &mut FovController) {
        self.zoom_effect = false;
        self.rope.active = false;
        fov.set_target(self.normal_fov);
        self.state = GrappleState::Normal;
        log::debug!("grapple: session ended");
    }
}
