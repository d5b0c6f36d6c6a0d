//! Fixed timestep simulation tick
//!
//! The single entry point that advances the whole sim deterministically.
//! Play mode runs intents, integration, collision resolution and the camera
//! follow; edit mode suspends physics and routes pointer intents to the
//! editor state machine.

use glam::Vec2;

use super::collision::{resolve_platform_collisions, resolve_spike_collisions};
use super::state::{GameEvent, GameState, Mode};
use crate::lerp;
use crate::tuning::Tuning;

/// Input intents for a single tick (deterministic)
///
/// `move_dir` is level-triggered; everything else is a one-shot intent the
/// caller must clear after the tick that consumed it.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal input direction, -1/0/1
    pub move_dir: i8,
    /// Jump pressed
    pub jump: bool,
    /// Fire the grapple at a world-space anchor
    pub fire_at: Option<Vec2>,
    /// Release the grapple
    pub release: bool,
    /// Toggle between play and edit mode
    pub toggle_edit: bool,
    /// Pointer pressed at a world-space point (edit mode)
    pub pointer_press: Option<Vec2>,
    /// Pointer held at a world-space point (edit mode)
    pub pointer_drag: Option<Vec2>,
    /// Pointer released at a world-space point (edit mode)
    pub pointer_release: Option<Vec2>,
    /// Create a platform centered on this point (edit mode)
    pub spawn_platform: Option<Vec2>,
    /// Create a spike at this point (edit mode)
    pub spawn_spike: Option<Vec2>,
    /// Delete the selected entity (edit mode)
    pub delete_selected: bool,
    /// Teleport the body back to spawn
    pub reset: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    if input.toggle_edit {
        state.mode = match state.mode {
            Mode::Play => Mode::Edit,
            Mode::Edit => Mode::Play,
        };
        state.editor.clear();
        log::debug!("mode toggled to {:?}", state.mode);
    }

    if input.reset {
        state.respawn();
        state.events.push(GameEvent::Reset);
    }

    match state.mode {
        Mode::Play => play_tick(state, input, tuning, dt),
        Mode::Edit => edit_tick(state, input, tuning),
    }
}

fn play_tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    let player = &mut state.player;
    player.move_dir = input.move_dir.clamp(-1, 1);

    // Discrete intents first: jump consumes the grounding established by
    // the previous tick's collision pass.
    if input.jump {
        player.jump(tuning);
    }
    if let Some(anchor) = input.fire_at
        && player.attach_grapple(anchor, tuning)
    {
        state.events.push(GameEvent::GrappleAttached);
    }
    if input.release && player.release_grapple(tuning) {
        state.events.push(GameEvent::GrappleReleased);
    }

    player.integrate(tuning, dt);
    resolve_platform_collisions(player, &state.world.platforms, tuning, &mut state.events);
    resolve_spike_collisions(player, &state.world.spikes, state.spawn, &mut state.events);
    if player.clamp_to_world() {
        state.events.push(GameEvent::Landed);
    }

    state.camera_target.x = lerp(state.camera_target.x, player.position.x, tuning.camera_lerp);
    state.camera_target.y = lerp(state.camera_target.y, player.position.y, tuning.camera_lerp);
}

fn edit_tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    let world = &mut state.world;
    let editor = &mut state.editor;

    if let Some(point) = input.pointer_press {
        editor.pointer_press(world, point, tuning);
    }
    if let Some(point) = input.pointer_drag {
        editor.pointer_drag(world, point, tuning);
    }
    if let Some(point) = input.pointer_release {
        // Apply the final pointer position before ending the drag
        editor.pointer_drag(world, point, tuning);
        editor.pointer_release(world, tuning);
    }
    if let Some(point) = input.spawn_platform {
        editor.create_platform(world, point, tuning);
    }
    if let Some(point) = input.spawn_spike {
        editor.create_spike(world, point, tuning);
    }
    if input.delete_selected {
        editor.delete_selected(world);
    }
}
