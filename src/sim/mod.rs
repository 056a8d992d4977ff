//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rect_circle_overlap, rect_rect_overlap};
pub use level::{LEVELS, Level, Silhouettes, Theme};
pub use state::{
    ActiveEffects, Banana, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player,
    Powerup, PowerupKind,
};
pub use tick::{TickInput, continue_level, restart, start, tick};
