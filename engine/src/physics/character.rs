//! Character collision body
//!
//! Provides the kinematic capsule body the player controller drives, together
//! with the collision-aware move primitive. The capsule is approximated by
//! its bounding box for resolution: displacement is applied one axis at a
//! time and swept against the blocks in its path, which gives natural wall
//! sliding without a full swept-shape solver.
//!
//! The gameplay layer never resolves collisions itself; it only calls
//! [`CapsuleBody::move_and_collide`] and the probes on this type.

use glam::Vec3;

use super::collision::BlockWorld;

/// Gap left between the body and the surface it was clamped against, so the
/// next sweep does not start flush with the same face.
const COLLISION_SKIN: f32 = 1e-3;

/// Extra reach of the ground probe beyond the capsule's lower extent.
const GROUND_PROBE_SLACK: f32 = 0.1;

/// Kinematic character body: a box-approximated capsule.
///
/// `position` is the capsule center. The vertical velocity channel
/// (`velocity.y`) carries gravity and jump impulses; horizontal locomotion
/// and the grapple pull are applied as direct swept displacements instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleBody {
    /// Capsule center in world space
    pub position: Vec3,
    /// Half of the capsule's vertical extent in meters
    pub half_height: f32,
    /// Horizontal radius in meters
    pub radius: f32,
    /// Carried velocity, integrated once per tick by the host
    pub velocity: Vec3,
}

impl CapsuleBody {
    /// Creates a body at the given center position.
    pub fn new(position: Vec3, half_height: f32, radius: f32) -> Self {
        Self {
            position,
            half_height,
            radius,
            velocity: Vec3::ZERO,
        }
    }

    /// World-space position of the capsule's lowest point.
    #[inline]
    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::Y * self.half_height
    }

    /// World-space position of the capsule's highest point.
    #[inline]
    pub fn top(&self) -> Vec3 {
        self.position + Vec3::Y * self.half_height
    }

    /// Bounding box of the body at its current position.
    #[inline]
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let half = Vec3::new(self.radius, self.half_height, self.radius);
        (self.position - half, self.position + half)
    }

    /// Downward ground probe.
    ///
    /// Casts a ray from the capsule center straight down, reaching slightly
    /// past the capsule's lower extent (0.1 m of slack). Returns true iff
    /// the probe intersects any block. The result is computed fresh on every
    /// call; callers must not cache it across ticks, since the body may be
    /// airborne transiently.
    pub fn is_grounded(&self, world: &BlockWorld) -> bool {
        world.ray_test(
            self.position,
            Vec3::NEG_Y,
            self.half_height + GROUND_PROBE_SLACK,
        )
    }

    /// Moves the body by `displacement`, resolving collisions against the
    /// world.
    ///
    /// The displacement is applied per axis (X, Z, then Y) and each axis is
    /// swept independently: movement along an axis is clamped so the body
    /// stops at the first block face in its path, leaving a small skin gap.
    /// A blocked axis does not cancel movement on the other axes, so the
    /// body slides along walls and floors. Sweeping (rather than moving and
    /// pushing out) means even a fast grapple pull cannot tunnel through a
    /// thin wall in a single tick.
    pub fn move_and_collide(&mut self, world: &BlockWorld, displacement: Vec3) {
        self.translate_axis(world, Axis::X, displacement.x);
        self.translate_axis(world, Axis::Z, displacement.z);
        self.translate_axis(world, Axis::Y, displacement.y);
    }

    fn translate_axis(&mut self, world: &BlockWorld, axis: Axis, amount: f32) {
        if amount == 0.0 {
            return;
        }

        // Broadphase: the box covering the whole sweep along this axis
        let (mut sweep_min, mut sweep_max) = self.aabb();
        if amount > 0.0 {
            *axis.get_mut(&mut sweep_max) += amount;
        } else {
            *axis.get_mut(&mut sweep_min) += amount;
        }

        let half = Vec3::new(self.radius, self.half_height, self.radius);
        let center = axis.get(self.position);
        let mut allowed = amount.abs();

        for block in world.overlapping(sweep_min, sweep_max) {
            // Minkowski expansion: sweep the center point against the block
            // grown by the body's half extents
            let face = if amount > 0.0 {
                axis.get(block.min) - axis.get(half)
            } else {
                axis.get(block.max) + axis.get(half)
            };
            let gap = if amount > 0.0 { face - center } else { center - face };
            if gap >= 0.0 {
                allowed = allowed.min(gap - COLLISION_SKIN);
            }
        }

        *axis.get_mut(&mut self.position) += allowed.max(0.0) * amount.signum();
    }
}

/// A coordinate axis, used to address vector components by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    #[inline]
    fn get_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_world() -> BlockWorld {
        // Floor spanning y in [-1, 0]
        let mut world = BlockWorld::new(1.0);
        world.fill((-5, -1, -5), (5, -1, 5), 0);
        world
    }

    fn standing_body() -> CapsuleBody {
        // Feet exactly on the floor surface at y=0
        CapsuleBody::new(Vec3::new(0.5, 0.9, 0.5), 0.9, 0.4)
    }

    #[test]
    fn test_grounded_on_floor() {
        let world = flat_world();
        let body = standing_body();
        assert!(body.is_grounded(&world));
    }

    #[test]
    fn test_not_grounded_in_air() {
        let world = flat_world();
        let mut body = standing_body();
        body.position.y += 1.0;
        assert!(!body.is_grounded(&world));
    }

    #[test]
    fn test_grounded_within_probe_slack() {
        let world = flat_world();
        let mut body = standing_body();
        body.position.y += 0.05; // Feet 5 cm above the surface
        assert!(body.is_grounded(&world));

        body.position.y += 0.1; // Now past the 0.1 m slack
        assert!(!body.is_grounded(&world));
    }

    #[test]
    fn test_free_move_applies_displacement() {
        let world = flat_world();
        let mut body = standing_body();
        body.position.y = 5.0;

        body.move_and_collide(&world, Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(body.position, Vec3::new(1.5, 5.5, -1.5));
    }

    #[test]
    fn test_falling_body_lands_on_floor() {
        let world = flat_world();
        let mut body = standing_body();
        body.position.y = 3.0;

        body.move_and_collide(&world, Vec3::new(0.0, -5.0, 0.0));

        // Feet should rest on the surface (plus skin gap)
        let feet_y = body.feet().y;
        assert!(feet_y >= 0.0, "body sank into the floor: feet at {}", feet_y);
        assert!(feet_y < 0.01, "body stopped early: feet at {}", feet_y);
        assert!(body.is_grounded(&world));
    }

    #[test]
    fn test_wall_blocks_horizontal_move_but_slides() {
        let mut world = flat_world();
        // Wall at x cell 2, two cells tall
        world.fill((2, 0, -5), (2, 1, 5), 0);

        let mut body = standing_body();
        body.move_and_collide(&world, Vec3::new(5.0, 0.0, 1.0));

        // X is clamped against the wall face at x=2
        assert!(body.position.x < 2.0 - body.radius + 0.01);
        assert!(body.position.x > 2.0 - body.radius - 0.01);
        // Z movement is unaffected
        assert!((body.position.z - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_ceiling_blocks_upward_move() {
        let mut world = flat_world();
        world.fill((-5, 3, -5), (5, 3, 5), 0); // Ceiling spanning y in [3, 4]

        let mut body = standing_body();
        body.move_and_collide(&world, Vec3::new(0.0, 10.0, 0.0));

        let top_y = body.top().y;
        assert!(top_y <= 3.0, "body passed through ceiling: top at {}", top_y);
        assert!((top_y - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_walks_off_ledge_becomes_airborne() {
        // Single-cell platform
        let mut world = BlockWorld::new(1.0);
        world.insert_cell(0, -1, 0, 0);

        let mut body = standing_body();
        assert!(body.is_grounded(&world));

        body.move_and_collide(&world, Vec3::new(3.0, 0.0, 0.0));
        assert!(!body.is_grounded(&world));
    }
}
