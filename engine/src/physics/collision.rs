//! Collision detection module
//!
//! Ray and overlap queries against the static level geometry. The level is a
//! sparse grid of axis-aligned blocks; every probe the character controller
//! performs (ground sensing, grapple aiming) runs through this module.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use grapple_rush_engine::physics::collision::{BlockWorld, ray_aabb_intersect};
//! use glam::Vec3;
//!
//! let mut world = BlockWorld::new(1.0);
//! world.insert_cell(0, 0, 0, 0);
//!
//! let origin = Vec3::new(0.5, 5.0, 0.5);
//! if let Some(hit) = world.ray_cast(origin, Vec3::NEG_Y, 100.0) {
//!     println!("Hit block {:?} at {:?}", hit.block_coord, hit.position);
//! }
//! ```

use glam::Vec3;
use std::collections::HashMap;

/// Information about a ray-block collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    /// World-space position where the collision occurred
    pub position: Vec3,
    /// Surface normal at the hit point (normalized)
    pub normal: Vec3,
    /// Grid coordinates of the hit block (x, y, z)
    pub block_coord: (i32, i32, i32),
    /// Distance from ray origin to hit point
    pub distance: f32,
}

impl HitInfo {
    /// Creates a new HitInfo with the given parameters.
    pub fn new(position: Vec3, normal: Vec3, block_coord: (i32, i32, i32), distance: f32) -> Self {
        Self {
            position,
            normal,
            block_coord,
            distance,
        }
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// Each pair of axis-aligned planes clips the ray's valid interval; the
/// interval survives iff the ray passes through the box. `max_dist` may be
/// `f32::INFINITY` for an unbounded ray.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   For rays starting inside the box this is the exit distance.
/// * `None` - No intersection, or the box lies behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    let origin = ray_origin.to_array();
    let dir = ray_dir.to_array();
    let lo = aabb_min.to_array();
    let hi = aabb_max.to_array();

    for axis in 0..3 {
        if dir[axis].abs() > 1e-10 {
            let inv = 1.0 / dir[axis];
            let t1 = (lo[axis] - origin[axis]) * inv;
            let t2 = (hi[axis] - origin[axis]) * inv;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        } else if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
            // Ray is parallel to this slab and starts outside it
            return None;
        }
    }

    if t_max >= t_min && t_max >= 0.0 {
        // Nearest positive intersection; rays starting inside report the exit
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Computes the outward surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on and returns the
/// outward normal of that face.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let local = point - center;

    // Normalize to unit cube space, then pick the dominant axis
    let normalized = Vec3::new(
        local.x / half_extents.x,
        local.y / half_extents.y,
        local.z / half_extents.z,
    );
    let abs = normalized.abs();

    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.x && abs.y >= abs.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

// =============================================================================
// Block - axis-aligned level geometry voxel
// =============================================================================

/// A single axis-aligned block of level geometry.
///
/// Blocks are stored with their world-space AABB precomputed so collision
/// queries never need to re-derive it from grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Minimum corner of the block in world space
    pub min: Vec3,
    /// Maximum corner of the block in world space
    pub max: Vec3,
    /// Material type identifier (for rendering/surface properties)
    pub material: u8,
}

impl Block {
    /// Creates a new block from its world-space corners.
    pub fn new(min: Vec3, max: Vec3, material: u8) -> Self {
        Self { min, max, material }
    }

    /// Returns the world-space center of the block.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Tests whether this block overlaps the given AABB.
    pub fn overlaps(&self, other_min: Vec3, other_max: Vec3) -> bool {
        self.min.x < other_max.x
            && self.max.x > other_min.x
            && self.min.y < other_max.y
            && self.max.y > other_min.y
            && self.min.z < other_max.z
            && self.max.z > other_min.z
    }
}

// =============================================================================
// BlockWorld - sparse grid of collidable blocks
// =============================================================================

/// The static collidable environment: a sparse cubic grid of blocks.
///
/// Uses a HashMap for sparse storage, allowing efficient insertion and
/// removal of individual blocks. Supports raycasting for ground probes and
/// grapple aiming, and overlap queries for character collision resolution.
#[derive(Debug, Clone, Default)]
pub struct BlockWorld {
    /// Stored blocks indexed by grid coordinate (x, y, z)
    blocks: HashMap<(i32, i32, i32), Block>,
    /// Edge length of one grid cell in meters
    pub cell_size: f32,
}

impl BlockWorld {
    /// Creates a new empty world.
    ///
    /// # Arguments
    ///
    /// * `cell_size` - Edge length of one grid cell in meters
    pub fn new(cell_size: f32) -> Self {
        Self {
            blocks: HashMap::new(),
            cell_size,
        }
    }

    /// Converts grid coordinates to the world position of the cell's
    /// minimum corner.
    pub fn cell_to_world(&self, x: i32, y: i32, z: i32) -> Vec3 {
        Vec3::new(
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
            z as f32 * self.cell_size,
        )
    }

    /// Inserts a full-cell block at the given grid coordinate.
    ///
    /// The block's AABB is computed from the grid coordinate and cell size.
    /// If a block already exists at this coordinate, it is replaced.
    pub fn insert_cell(&mut self, x: i32, y: i32, z: i32, material: u8) {
        let min = self.cell_to_world(x, y, z);
        let max = min + Vec3::splat(self.cell_size);
        self.blocks.insert((x, y, z), Block::new(min, max, material));
    }

    /// Inserts a block with an explicit AABB at the given grid coordinate.
    pub fn insert(&mut self, x: i32, y: i32, z: i32, block: Block) {
        self.blocks.insert((x, y, z), block);
    }

    /// Fills a rectangular slab of cells, inclusive on both ends.
    ///
    /// Convenient for laying floors and walls in tests and demo scenes.
    pub fn fill(&mut self, from: (i32, i32, i32), to: (i32, i32, i32), material: u8) {
        for x in from.0..=to.0 {
            for y in from.1..=to.1 {
                for z in from.2..=to.2 {
                    self.insert_cell(x, y, z, material);
                }
            }
        }
    }

    /// Gets a reference to the block at the given coordinate, if it exists.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<&Block> {
        self.blocks.get(&(x, y, z))
    }

    /// Removes the block at the given coordinate.
    ///
    /// # Returns
    ///
    /// The removed block, if one existed at this coordinate
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> Option<Block> {
        self.blocks.remove(&(x, y, z))
    }

    /// Returns the number of blocks in the world.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the world contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Clears all blocks.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Returns an iterator over all (coordinate, block) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32, i32), &Block)> {
        self.blocks.iter()
    }

    /// Returns an iterator over the blocks overlapping the given AABB.
    ///
    /// Brute-force over all blocks; the worlds this game builds are small.
    /// For large worlds, consider spatial partitioning (octree, BVH).
    pub fn overlapping(
        &self,
        aabb_min: Vec3,
        aabb_max: Vec3,
    ) -> impl Iterator<Item = &Block> + '_ {
        self.blocks
            .values()
            .filter(move |b| b.overlaps(aabb_min, aabb_max))
    }

    /// Casts a ray against all blocks and returns the closest hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (should be normalized)
    /// * `max_dist` - Maximum distance to check; `f32::INFINITY` for unbounded
    ///
    /// # Returns
    ///
    /// `Some(HitInfo)` for the closest hit, or `None` if no intersection
    pub fn ray_cast(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<HitInfo> {
        let mut closest: Option<HitInfo> = None;
        let mut closest_dist = max_dist;

        for (&coord, block) in &self.blocks {
            if let Some(t) = ray_aabb_intersect(origin, direction, block.min, block.max) {
                if t >= 0.0 && t < closest_dist {
                    let hit_position = origin + direction * t;
                    let normal = aabb_surface_normal(hit_position, block.min, block.max);

                    closest = Some(HitInfo {
                        position: hit_position,
                        normal,
                        block_coord: coord,
                        distance: t,
                    });
                    closest_dist = t;
                }
            }
        }

        closest
    }

    /// Checks if a ray intersects any block within `max_dist`.
    ///
    /// Faster than `ray_cast` when you only need to know if a hit occurred,
    /// e.g. for the ground probe.
    pub fn ray_test(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> bool {
        for block in self.blocks.values() {
            if let Some(t) = ray_aabb_intersect(origin, direction, block.min, block.max) {
                if t >= 0.0 && t < max_dist {
                    return true;
                }
            }
        }
        false
    }
}
