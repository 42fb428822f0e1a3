//! Grapple Rush Engine
//!
//! A headless first-person locomotion and grapple-hook simulation library.
//! The library owns character state and gameplay math only; windowing,
//! rendering, and raw input polling belong to the host, which drives the
//! simulation through one `tick(dt)` per frame and reads back the camera and
//! visual-feedback state.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic input handling and the per-tick snapshot
//! - [`physics`] - Ray/overlap queries, the block world, and the kinematic
//!   capsule body
//! - [`camera`] - Look control and field-of-view smoothing
//! - [`player`] - Locomotion, jumping, and the grapple state machine
//!
//! # Example
//!
//! ```ignore
//! use grapple_rush_engine::physics::BlockWorld;
//! use grapple_rush_engine::player::{PlayerCharacter, PlayerConfig};
//! use grapple_rush_engine::input::InputState;
//! use glam::Vec3;
//!
//! let mut world = BlockWorld::new(1.0);
//! world.fill((-20, -1, -20), (20, -1, 20), 0);
//!
//! let config = PlayerConfig::default();
//! let mut player = PlayerCharacter::new(&config, Vec3::new(0.0, 0.9, 0.0));
//! let mut input = InputState::new();
//!
//! // Each frame:
//! let frame = input.frame_input();
//! player.tick(1.0 / 60.0, &frame, &world);
//! input.end_frame();
//!
//! // Render using player.camera_position(), player.look, player.fov,
//! // player.grapple.rope(), player.grapple.aim_marker(), ...
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;

// Re-export commonly used types at crate level for convenience
pub use camera::{FovController, LookController};
pub use input::{FrameInput, InputState, KeyCode, MouseButton};
pub use physics::{BlockWorld, CapsuleBody};
pub use player::{PlayerCharacter, PlayerConfig};
