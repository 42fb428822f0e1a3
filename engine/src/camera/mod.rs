//! Camera Module
//!
//! Look control and field-of-view smoothing for the first-person rig.
//! This module is window-system agnostic - it only deals with camera state
//! and math; the host applies the resulting orientation and FOV to its
//! actual camera.

pub mod fov;
pub mod look;

pub use fov::{FOV_SMOOTH_RATE, FovController, GRAPPLE_FOV, NORMAL_FOV};
pub use look::{LOOK_SENSITIVITY, LookController};
