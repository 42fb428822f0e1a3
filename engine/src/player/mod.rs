//! Player Module
//!
//! The first-person character kit: locomotion, jumping, and the grapple
//! hook, aggregated behind a single per-tick entry point.
//!
//! # Components
//!
//! - [`PlayerCharacter`] - the aggregate; owns the body and controllers and
//!   runs the per-tick dispatch
//! - [`LocomotionController`] - camera-relative planar movement, gravity
//!   integration, jump impulses
//! - [`GrappleController`] - the grapple state machine with its rope, aim
//!   marker, and zoom feedback outputs
//! - [`PlayerConfig`] - every tuning constant, with JSON load/save

pub mod character;
pub mod config;
pub mod grapple;
pub mod locomotion;

pub use character::PlayerCharacter;
pub use config::{ConfigError, PlayerConfig};
pub use grapple::{
    AimMarker, GrappleController, GrapplePhase, GrappleSession, GrappleState, RopeVisual,
};
pub use locomotion::LocomotionController;
