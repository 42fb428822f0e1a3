//! Physics module for the grapple locomotion core
//!
//! Custom, minimal collision support for a kinematic character: no external
//! physics library, no dynamics. The gameplay layer consumes exactly three
//! primitives from here: raycasts (ground probe, grapple aim), the sparse
//! block environment, and the collision-aware capsule move.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`collision`] - Ray-AABB intersection and the sparse block world
//! - [`character`] - Kinematic capsule body with swept move resolution

pub mod character;
pub mod collision;
pub mod types;

// Re-export commonly used types at the physics module level
pub use character::CapsuleBody;
pub use collision::{Block, BlockWorld, HitInfo, aabb_surface_normal, ray_aabb_intersect};
pub use types::Vec3;
