//! Fixed timestep simulation tick and phase transitions
//!
//! `tick` only advances the world while `Playing`; the level gate and game
//! over freeze it until `continue_level` or `restart` is called.

use super::collision::{collect_bananas, collect_powerups, resolve_obstacles};
use super::level::next_level_index;
use super::physics::{move_entities, step_player};
use super::spawn::spawn_entities;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump request (space, button, single tap)
    pub jump: bool,
    /// Dash request (shift, button, double tap)
    pub dash: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        state.player.jump();
    }
    if input.dash {
        state.player.dash();
    }

    step_player(&mut state.player, dt);
    state.effects.tick(dt);

    spawn_entities(state);
    move_entities(state, dt);

    if !resolve_obstacles(state) {
        end_run(state);
        return;
    }
    collect_bananas(state);
    collect_powerups(state);

    state.level_time += dt;
    if state.level_time >= state.level().duration {
        open_level_gate(state);
    }
}

/// Start screen -> first level
pub fn start(state: &mut GameState) {
    if state.phase != GamePhase::PreStart {
        return;
    }
    begin_run(state);
}

/// Game over -> first level
pub fn restart(state: &mut GameState) {
    if state.phase != GamePhase::GameOver {
        return;
    }
    begin_run(state);
}

/// Level gate -> next level at its base speed
pub fn continue_level(state: &mut GameState) {
    if state.phase != GamePhase::LevelGate {
        return;
    }
    state.speed = state.level().base_speed;
    state.level_time = 0.0;
    state.phase = GamePhase::Playing;
    log::info!("Entering {}", state.level().name);
    state.events.push(GameEvent::LevelStarted {
        level: state.level_index,
    });
}

fn begin_run(state: &mut GameState) {
    state.reset_run();
    state.phase = GamePhase::Playing;
    log::info!("Run started (seed {})", state.seed);
    state.events.push(GameEvent::RunStarted);
}

fn open_level_gate(state: &mut GameState) {
    state.level_index = next_level_index(state.level_index);
    state.phase = GamePhase::LevelGate;
    log::info!("Level complete, next up: {}", state.level().name);
    state.events.push(GameEvent::LevelComplete {
        next_level: state.level_index,
    });
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!("Game over with {} bananas", state.score);
    state
        .events
        .push(GameEvent::GameOver { score: state.score });
}
