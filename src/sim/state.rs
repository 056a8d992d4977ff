//! Game state and core simulation types
//!
//! One `GameState` holds everything a run needs. Nothing here touches the
//! browser, so whole sessions can be driven from tests.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::{self, Level};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    PreStart,
    /// Active gameplay
    Playing,
    /// Level gate shown between levels, simulation frozen
    LevelGate,
    /// Run ended
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/s, negative is up)
    pub vel_y: f32,
    /// Airborne after a jump, cleared on landing
    pub jumping: bool,
    pub dashing: bool,
    /// Seconds of dash remaining
    pub dash_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_START_ALTITUDE),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            jumping: false,
            dashing: false,
            dash_timer: 0.0,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Y of the top edge when standing on the ground
    pub fn ground_y(&self) -> f32 {
        GROUND_Y - self.size.y
    }

    /// Single jump: ignored while airborne
    pub fn jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.vel_y = JUMP_VELOCITY;
        self.jumping = true;
        true
    }

    /// Start a dash: ignored while already dashing.
    /// Never slows an upward movement that is already faster than the lift.
    pub fn dash(&mut self) -> bool {
        if self.dashing {
            return false;
        }
        self.dashing = true;
        self.dash_timer = DASH_DURATION;
        self.vel_y = self.vel_y.min(DASH_LIFT_VELOCITY);
        true
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Solid crate sitting on the ground
    Box,
    /// Rolling droid, collides as a circle
    Droid,
    /// Pulsing laser beam along the top or bottom edge
    Laser { phase: f32 },
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed (pixels/s), fixed at spawn
    pub vel_x: f32,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Circle inscribed in the bounding box (used by droids)
    pub fn circle(&self) -> (Vec2, f32) {
        (self.pos + self.size * 0.5, self.size.x * 0.5)
    }

    /// Pulse intensity in 0..=1 (lasers only, 1 otherwise)
    pub fn pulse(&self) -> f32 {
        match self.kind {
            ObstacleKind::Laser { phase } => (phase.sin() + 1.0) * 0.5,
            _ => 1.0,
        }
    }
}

/// A banana collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banana {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Absorbs one obstacle hit
    Shield,
    /// Pulls bananas toward the player
    Magnet,
}

/// A power-up entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub kind: PowerupKind,
    /// Center
    pub pos: Vec2,
    pub radius: f32,
}

/// Active power-up effects (seconds remaining)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub shield: f32,
    pub magnet: f32,
}

impl ActiveEffects {
    pub fn shield_active(&self) -> bool {
        self.shield > 0.0
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet > 0.0
    }

    /// Overwrites any time left from an earlier pickup of the same kind
    pub fn activate(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Shield => self.shield = POWERUP_DURATION,
            PowerupKind::Magnet => self.magnet = POWERUP_DURATION,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.shield = (self.shield - dt).max(0.0);
        self.magnet = (self.magnet - dt).max(0.0);
    }
}

/// Notable things that happened during a tick or a phase change.
/// Drained by the presentation layer each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began at level 0
    RunStarted,
    /// Play resumed after a level gate
    LevelStarted { level: usize },
    /// Level time ran out; the gate for `next_level` is open
    LevelComplete { next_level: usize },
    /// Dashing player broke an obstacle
    ObstacleSmashed,
    /// Shield absorbed a hit
    ShieldBroken,
    LifeLost { lives: u8 },
    BananaCollected { score: u64 },
    SpeedUp { speed: f32 },
    PowerupCollected { kind: PowerupKind },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current level (index into the level table)
    pub level_index: usize,
    /// Seconds spent in the current level
    pub level_time: f32,
    pub lives: u8,
    /// Bananas collected
    pub score: u64,
    /// Session scroll speed (pixels/s)
    pub speed: f32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub bananas: Vec<Banana>,
    pub powerups: Vec<Powerup>,
    pub effects: ActiveEffects,
    /// Events not yet handed to the presentation layer
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the start screen
    pub fn new(seed: u64) -> Self {
        let first = level::level(0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level_index: 0,
            level_time: 0.0,
            lives: START_LIVES,
            score: 0,
            speed: first.base_speed,
            phase: GamePhase::PreStart,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            bananas: Vec::new(),
            powerups: Vec::new(),
            effects: ActiveEffects::default(),
            events: Vec::new(),
        }
    }

    /// The level currently being played (or gated)
    pub fn level(&self) -> &'static Level {
        level::level(self.level_index)
    }

    /// Reset everything a run owns back to level 0, keeping the RNG stream
    pub fn reset_run(&mut self) {
        self.level_index = 0;
        self.level_time = 0.0;
        self.lives = START_LIVES;
        self.score = 0;
        self.speed = self.level().base_speed;
        self.time_ticks = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.bananas.clear();
        self.powerups.clear();
        self.effects = ActiveEffects::default();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_is_single() {
        let mut player = Player::default();
        assert!(player.jump());
        assert_eq!(player.vel_y, JUMP_VELOCITY);
        player.vel_y = -100.0;
        assert!(!player.jump());
        assert_eq!(player.vel_y, -100.0);
    }

    #[test]
    fn test_dash_keeps_faster_upward_speed() {
        let mut player = Player::default();
        player.vel_y = JUMP_VELOCITY;
        assert!(player.dash());
        assert_eq!(player.vel_y, JUMP_VELOCITY);
        assert_eq!(player.dash_timer, DASH_DURATION);

        let mut falling = Player::default();
        falling.vel_y = 400.0;
        falling.dash();
        assert_eq!(falling.vel_y, DASH_LIFT_VELOCITY);
    }

    #[test]
    fn test_dash_not_restarted_while_dashing() {
        let mut player = Player::default();
        player.dash();
        player.dash_timer = 0.1;
        assert!(!player.dash());
        assert_eq!(player.dash_timer, 0.1);
    }

    #[test]
    fn test_effects_overwrite_and_expire() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerupKind::Shield);
        effects.tick(4.0);
        assert!(effects.shield_active());
        effects.activate(PowerupKind::Shield);
        assert_eq!(effects.shield, POWERUP_DURATION);
        effects.tick(10.0);
        assert!(!effects.shield_active());
        assert_eq!(effects.shield, 0.0);
        assert!(!effects.magnet_active());
    }

    #[test]
    fn test_new_state_is_prestart() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::PreStart);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.speed, state.level().base_speed);
        assert!(state.obstacles.is_empty());
    }
}
