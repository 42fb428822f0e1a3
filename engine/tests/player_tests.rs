//! Player Tests - Locomotion, Gravity, Camera
//!
//! Integration tests for the non-grapple half of the character kit: walking,
//! falling, jumping, looking, FOV smoothing, and the tuning config.

use glam::Vec3;
use grapple_rush_engine::camera::FovController;
use grapple_rush_engine::input::{FrameInput, InputState, KeyCode};
use grapple_rush_engine::physics::BlockWorld;
use grapple_rush_engine::player::{PlayerCharacter, PlayerConfig};

const DT: f32 = 1.0 / 60.0;

fn flat_world() -> BlockWorld {
    let mut world = BlockWorld::new(1.0);
    world.fill((-30, -1, -30), (30, -1, 30), 0);
    world
}

fn step(player: &mut PlayerCharacter, input: &mut InputState, world: &BlockWorld) {
    let frame = input.frame_input();
    player.tick(DT, &frame, world);
    input.end_frame();
}

// ============================================================================
// Locomotion
// ============================================================================

#[test]
fn test_walk_speed_matches_tuning() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();

    input.handle_key(KeyCode::W, true);
    for _ in 0..60 {
        step(&mut player, &mut input, &world);
    }

    // One second at 10 m/s toward -Z (facing -Z by default)
    assert!((player.body.position.z - (-10.0)).abs() < 0.05);
}

#[test]
fn test_diagonal_input_combines_axes() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();

    input.handle_key(KeyCode::W, true);
    input.handle_key(KeyCode::D, true);
    for _ in 0..60 {
        step(&mut player, &mut input, &world);
    }

    assert!(player.body.position.x > 9.0);
    assert!(player.body.position.z < -9.0);
}

#[test]
fn test_movement_turns_with_the_body() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));

    // Quarter turn right, then walk forward
    player.look.yaw = std::f32::consts::FRAC_PI_2;
    let forward = FrameInput {
        move_z: 1.0,
        ..FrameInput::none()
    };
    for _ in 0..60 {
        player.tick(DT, &forward, &world);
    }

    assert!(player.body.position.x > 9.0);
    assert!(player.body.position.z.abs() < 0.05);
}

#[test]
fn test_walking_into_wall_slides_along_it() {
    let mut world = flat_world();
    // Wall across the -Z path
    world.fill((-30, 0, -6), (30, 3, -6), 0);

    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();
    input.handle_key(KeyCode::W, true);
    input.handle_key(KeyCode::A, true);

    for _ in 0..120 {
        step(&mut player, &mut input, &world);
    }

    // Stopped against the wall face (front at z = -5), still strafing left
    assert!(player.body.position.z > -5.7);
    assert!(player.body.position.x < -10.0);
}

// ============================================================================
// Gravity and jumping
// ============================================================================

#[test]
fn test_fall_from_height_lands_on_floor() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 10.0, 0.0));
    let mut input = InputState::new();

    assert!(!player.body.is_grounded(&world));
    for _ in 0..300 {
        step(&mut player, &mut input, &world);
    }

    assert!(player.body.is_grounded(&world));
    assert!(player.body.feet().y.abs() < 0.01);
    // Resting clamp, not a huge accumulated fall velocity
    assert!(player.body.velocity.y >= -2.0);
}

#[test]
fn test_jump_height_matches_ballistics() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();

    let start_y = player.body.position.y;
    input.handle_key(KeyCode::Space, true);

    let mut peak = start_y;
    for _ in 0..300 {
        step(&mut player, &mut input, &world);
        peak = peak.max(player.body.position.y);
    }

    // v0 = 10, g = 9.18: h = v0^2 / (2g) ~= 5.45 m. Discrete integration
    // lands near that; allow a generous band.
    let rise = peak - start_y;
    assert!(rise > 4.8 && rise < 6.2, "jump rise was {}", rise);

    // And the player came back down
    assert!(player.body.is_grounded(&world));
}

#[test]
fn test_no_mid_air_jump() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();

    input.handle_key(KeyCode::Space, true);
    step(&mut player, &mut input, &world);
    let v_after_first = player.body.velocity.y;
    assert!(v_after_first > 0.0);

    // Re-press in the air: no second impulse
    input.handle_key(KeyCode::Space, false);
    step(&mut player, &mut input, &world);
    input.handle_key(KeyCode::Space, true);
    step(&mut player, &mut input, &world);

    assert!(player.body.velocity.y < v_after_first);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn test_look_yaw_and_pitch_through_input() {
    let world = flat_world();
    let mut player = PlayerCharacter::spawn_default(Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();
    input.mouse.set_captured(true);

    input.accumulate_mouse_delta(5.0, -3.0); // Right and up (screen dy < 0)
    step(&mut player, &mut input, &world);

    assert!(player.look.yaw > 0.0);
    assert!(player.look.pitch > 0.0);

    // Delta was consumed; an idle tick does not keep rotating
    let yaw = player.look.yaw;
    step(&mut player, &mut input, &world);
    assert_eq!(player.look.yaw, yaw);
}

#[test]
fn test_fov_smoothing_reference_values() {
    // target=100 from current=60 at rate 4: dt=0.25 converges fully,
    // dt=0.1 lands at 76
    let mut fov = FovController::new(60.0);
    fov.set_target(100.0);
    fov.tick(0.25);
    assert!((fov.current() - 100.0).abs() < 1e-4);

    let mut fov = FovController::new(60.0);
    fov.set_target(100.0);
    fov.tick(0.1);
    assert!((fov.current() - 76.0).abs() < 1e-4);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_file_round_trip() {
    let mut config = PlayerConfig::default();
    config.movement_speed = 8.0;
    config.grapple_fov = 110.0;

    let path = std::env::temp_dir().join("grapple_rush_player_config_test.json");
    config.save(&path).expect("save config");
    let loaded = PlayerConfig::load(&path).expect("load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_character_uses_config_tuning() {
    let mut config = PlayerConfig::default();
    config.movement_speed = 5.0;
    config.normal_fov = 75.0;

    let player = PlayerCharacter::new(&config, Vec3::ZERO);
    assert_eq!(player.locomotion.move_speed, 5.0);
    assert_eq!(player.fov.current(), 75.0);
    assert_eq!(player.grapple.normal_fov, 75.0);
}
