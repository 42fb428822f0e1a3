//! Headless grapple demo
//!
//! Drives a scripted session through the full stack without a window: build
//! a small arena, walk, jump, aim the grapple at a tower, ride the pull, and
//! jump-cancel a second shot. Run with `RUST_LOG=debug` to watch the state
//! machine transitions.

use glam::Vec3;
use grapple_rush_engine::input::{InputState, KeyCode, MouseButton};
use grapple_rush_engine::physics::BlockWorld;
use grapple_rush_engine::player::{GrapplePhase, PlayerCharacter, PlayerConfig};

const DT: f32 = 1.0 / 60.0;

/// Floor, a tower 40 m ahead, and a side wall for the second shot.
fn build_arena() -> BlockWorld {
    let mut world = BlockWorld::new(1.0);
    world.fill((-30, -1, -50), (30, -1, 30), 0);
    world.fill((-2, 0, -41), (2, 10, -40), 1);
    world.fill((20, 0, -30), (23, 12, -20), 1);
    world
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let world = build_arena();
    let config = PlayerConfig::default();
    let mut player = PlayerCharacter::new(&config, Vec3::new(0.0, 0.9, 0.0));
    let mut input = InputState::new();
    input.mouse.set_captured(true);

    log::info!(
        "arena: {} blocks, player at {:?}, fov {:.0}",
        world.len(),
        player.body.position,
        player.fov.current()
    );

    let mut last_phase = GrapplePhase::Normal;
    for tick in 0..(12 * 60) {
        let t = tick as f32 * DT;
        script_input(t, &mut input, &player);

        let frame = input.frame_input();
        player.tick(DT, &frame, &world);
        input.end_frame();

        let phase = player.grapple.phase();
        if phase != last_phase {
            log::info!(
                "t={:5.2}s {:?} -> {:?} at ({:6.2}, {:5.2}, {:6.2})",
                t,
                last_phase,
                phase,
                player.body.position.x,
                player.body.position.y,
                player.body.position.z
            );
            last_phase = phase;
        }

        if tick % 60 == 0 {
            log::debug!(
                "t={:5.2}s pos=({:6.2}, {:5.2}, {:6.2}) fov={:5.1} rope={}",
                t,
                player.body.position.x,
                player.body.position.y,
                player.body.position.z,
                player.fov.current(),
                if player.grapple.rope().active {
                    format!("{:.1} m", player.grapple.rope().length)
                } else {
                    "off".to_string()
                }
            );
        }
    }

    log::info!(
        "done: player at ({:.2}, {:.2}, {:.2}), phase {:?}",
        player.body.position.x,
        player.body.position.y,
        player.body.position.z,
        player.grapple.phase()
    );
}

/// The scripted player: a few seconds of each mechanic.
fn script_input(t: f32, input: &mut InputState, player: &PlayerCharacter) {
    // 0-1 s: walk forward toward the tower
    key(input, KeyCode::W, t >= 0.0 && t < 1.0);

    // 1.2 s: a hop
    key(input, KeyCode::Space, t >= 1.2 && t < 1.3);

    // 2.0-2.5 s: aim at the tower, then release to fire
    button(input, MouseButton::Right, t >= 2.0 && t < 2.5);

    // After the first pull: turn toward the side wall and fire again
    if t >= 6.0 && t < 6.2 {
        // Steady pointer motion to the left-hand wall
        input.accumulate_mouse_delta(1.2, 0.0);
    }
    button(input, MouseButton::Right, t >= 6.5 && t < 7.0);

    // 7.5 s: cancel the second pull into a jump
    let pulling = player.grapple.phase() == GrapplePhase::Grappling;
    key(input, KeyCode::Space, pulling && t >= 7.5 && t < 7.6);
}

/// Hold or release a key according to the script window.
fn key(input: &mut InputState, code: KeyCode, held: bool) {
    input.handle_key(code, held);
}

/// Hold or release a mouse button according to the script window.
fn button(input: &mut InputState, btn: MouseButton, held: bool) {
    input.handle_mouse_button(btn, held);
}
