//! Banana Dash - a side-scrolling jump and dash arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (levels, spawning, physics, collisions, game state)
//! - `game`: Session controller (fixed timestep, best score bookkeeping)
//! - `hud`: Plain HUD values derived from the simulation
//! - `input`: Key mapping and tap gesture detection
//! - `storage`: Best score persistence
//! - `render`: Canvas 2D renderer (wasm only)

pub mod game;
pub mod hud;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;
pub mod storage;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// Rates are per second; tuning was done at a nominal 60 frames per second.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, spawn rates are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 540.0;
    /// Height of the floor strip below the ground line
    pub const FLOOR_HEIGHT: f32 = 60.0;
    /// Y coordinate of the ground line (y grows downward)
    pub const GROUND_Y: f32 = FIELD_HEIGHT - FLOOR_HEIGHT;

    /// Player defaults
    pub const PLAYER_X: f32 = 90.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Player top edge starts this far above the ground line
    pub const PLAYER_START_ALTITUDE: f32 = 90.0;
    pub const START_LIVES: u8 = 3;

    /// Gravity (pixels/s²)
    pub const GRAVITY: f32 = 2160.0;
    /// Jump impulse (pixels/s, negative is up)
    pub const JUMP_VELOCITY: f32 = -780.0;
    /// Dash holds the player at least this fast upward when it starts
    pub const DASH_LIFT_VELOCITY: f32 = -300.0;
    /// Dash duration (seconds)
    pub const DASH_DURATION: f32 = 0.25;

    /// Obstacle shapes
    pub const BOX_SIZE: f32 = 50.0;
    pub const DROID_SIZE: f32 = 28.0;
    pub const DROID_SPEED_FACTOR: f32 = 1.2;
    pub const LASER_WIDTH: f32 = 120.0;
    pub const LASER_HEIGHT: f32 = 18.0;
    pub const LASER_SPEED_FACTOR: f32 = 1.1;
    /// Laser pulse animation rate (radians/s)
    pub const LASER_PULSE_RATE: f32 = 12.0;

    /// Collectibles
    pub const BANANA_RADIUS: f32 = 10.0;
    pub const BANANA_PICKUP_RADIUS: f32 = 14.0;
    pub const BANANA_MIN_ALTITUDE: f32 = 80.0;
    pub const BANANA_MAX_ALTITUDE: f32 = 240.0;
    pub const POWERUP_RADIUS: f32 = 12.0;
    pub const POWERUP_PICKUP_RADIUS: f32 = 16.0;
    pub const POWERUP_MIN_ALTITUDE: f32 = 90.0;
    pub const POWERUP_MAX_ALTITUDE: f32 = 220.0;
    /// Per-tick powerup spawn probability (all levels)
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.004;
    /// Shield and magnet duration (seconds)
    pub const POWERUP_DURATION: f32 = 6.0;

    /// Magnet pull strength (pull = strength / (distance + 1), pixels/s)
    pub const MAGNET_STRENGTH: f32 = 8400.0;
    /// Magnet pull cap (pixels/s)
    pub const MAGNET_MAX_PULL: f32 = 210.0;

    /// Entities are dropped once past these left-edge limits
    pub const OBSTACLE_DESPAWN_X: f32 = -10.0;
    pub const BANANA_DESPAWN_X: f32 = -20.0;
    pub const POWERUP_DESPAWN_X: f32 = -30.0;

    /// Speed increase every `SPEEDUP_EVERY` bananas (pixels/s)
    pub const SPEEDUP_INCREMENT: f32 = 24.0;
    pub const SPEEDUP_EVERY: u64 = 5;
    /// Speed shown as "x1.0" on the HUD
    pub const SPEED_DISPLAY_UNIT: f32 = 300.0;
}
