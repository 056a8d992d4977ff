//! Collision detection and resolution
//!
//! Two primitives (box vs box, box vs circle) plus the per-kind outcomes of
//! touching obstacles, bananas and power-ups.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, ObstacleKind};
use crate::consts::*;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Strict overlap: rectangles that only share an edge do not collide
pub fn rect_rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Clamp the circle center onto the rectangle and compare squared distances.
/// A circle exactly touching the rectangle counts as a hit.
pub fn rect_circle_overlap(rect: &Rect, center: Vec2, radius: f32) -> bool {
    let closest = center.clamp(rect.min(), rect.max());
    (center - closest).length_squared() <= radius * radius
}

/// Resolve player vs obstacle contacts.
///
/// Every touched obstacle is removed. Returns `false` as soon as the last
/// life is lost; obstacles not yet examined are left untouched.
pub fn resolve_obstacles(state: &mut GameState) -> bool {
    let player = state.player.bounds();
    let dashing = state.player.dashing;
    let mut out_of_lives = false;

    let mut obstacles = std::mem::take(&mut state.obstacles);
    obstacles.retain(|obstacle| {
        if out_of_lives {
            return true;
        }

        let hit = match obstacle.kind {
            ObstacleKind::Droid => {
                let (center, radius) = obstacle.circle();
                rect_circle_overlap(&player, center, radius)
            }
            ObstacleKind::Box | ObstacleKind::Laser { .. } => {
                rect_rect_overlap(&player, &obstacle.bounds())
            }
        };
        if !hit {
            return true;
        }

        if dashing {
            state.events.push(GameEvent::ObstacleSmashed);
        } else if state.effects.shield_active() {
            state.effects.shield = 0.0;
            log::debug!("Shield absorbed {:?}", obstacle.kind);
            state.events.push(GameEvent::ShieldBroken);
        } else {
            state.lives = state.lives.saturating_sub(1);
            log::debug!("Hit by {:?}, {} lives left", obstacle.kind, state.lives);
            state.events.push(GameEvent::LifeLost { lives: state.lives });
            out_of_lives = state.lives == 0;
        }
        false
    });
    state.obstacles = obstacles;

    !out_of_lives
}

/// Pick up touched bananas; every `SPEEDUP_EVERY` points speeds the run up
pub fn collect_bananas(state: &mut GameState) {
    let player = state.player.bounds();

    let mut bananas = std::mem::take(&mut state.bananas);
    bananas.retain(|banana| {
        if !rect_circle_overlap(&player, banana.pos, BANANA_PICKUP_RADIUS) {
            return true;
        }
        state.score += 1;
        state.events.push(GameEvent::BananaCollected { score: state.score });
        if state.score.is_multiple_of(SPEEDUP_EVERY) {
            state.speed += SPEEDUP_INCREMENT;
            state.events.push(GameEvent::SpeedUp { speed: state.speed });
        }
        false
    });
    state.bananas = bananas;
}

/// Pick up touched power-ups, (re)starting their timers
pub fn collect_powerups(state: &mut GameState) {
    let player = state.player.bounds();

    let mut powerups = std::mem::take(&mut state.powerups);
    powerups.retain(|powerup| {
        if !rect_circle_overlap(&player, powerup.pos, POWERUP_PICKUP_RADIUS) {
            return true;
        }
        state.effects.activate(powerup.kind);
        state.events.push(GameEvent::PowerupCollected { kind: powerup.kind });
        false
    });
    state.powerups = powerups;
}
