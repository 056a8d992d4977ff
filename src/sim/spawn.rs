//! Probabilistic entity spawning
//!
//! Each tick rolls one independent trial per category. Several entities can
//! appear in the same tick and most ticks spawn nothing.

use glam::Vec2;
use rand::Rng;

use super::state::{Banana, GameState, Obstacle, ObstacleKind, Powerup, PowerupKind};
use crate::consts::*;

/// Roll this tick's spawns for the current level and append them
pub fn spawn_entities(state: &mut GameState) {
    let rates = state.level().spawn;
    let speed = state.speed;
    let rng = &mut state.rng;

    if rng.random_bool(rates.obstacle) {
        let obstacle = if rng.random_bool(0.5) {
            Obstacle {
                kind: ObstacleKind::Box,
                pos: Vec2::new(FIELD_WIDTH, GROUND_Y - BOX_SIZE),
                size: Vec2::splat(BOX_SIZE),
                vel_x: speed,
            }
        } else {
            Obstacle {
                kind: ObstacleKind::Droid,
                pos: Vec2::new(FIELD_WIDTH, GROUND_Y - DROID_SIZE),
                size: Vec2::splat(DROID_SIZE),
                vel_x: speed * DROID_SPEED_FACTOR,
            }
        };
        state.obstacles.push(obstacle);
    }

    if rng.random_bool(rates.laser) {
        let from_top = rng.random_bool(0.5);
        let y = if from_top { 0.0 } else { GROUND_Y - LASER_HEIGHT };
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Laser { phase: 0.0 },
            pos: Vec2::new(FIELD_WIDTH, y),
            size: Vec2::new(LASER_WIDTH, LASER_HEIGHT),
            vel_x: speed * LASER_SPEED_FACTOR,
        });
    }

    if rng.random_bool(rates.banana) {
        let altitude = rng.random_range(BANANA_MIN_ALTITUDE..BANANA_MAX_ALTITUDE);
        state.bananas.push(Banana {
            pos: Vec2::new(FIELD_WIDTH, GROUND_Y - altitude),
            radius: BANANA_RADIUS,
        });
    }

    if rng.random_bool(POWERUP_SPAWN_CHANCE) {
        let kind = if rng.random_bool(0.5) {
            PowerupKind::Shield
        } else {
            PowerupKind::Magnet
        };
        let altitude = rng.random_range(POWERUP_MIN_ALTITUDE..POWERUP_MAX_ALTITUDE);
        state.powerups.push(Powerup {
            kind,
            pos: Vec2::new(FIELD_WIDTH, GROUND_Y - altitude),
            radius: POWERUP_RADIUS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_at_right_edge() {
        let mut state = GameState::new(42);
        for _ in 0..2000 {
            spawn_entities(&mut state);
        }

        assert!(!state.obstacles.is_empty());
        assert!(!state.bananas.is_empty());
        assert!(state.obstacles.iter().all(|o| o.pos.x == FIELD_WIDTH));
        assert!(state.bananas.iter().all(|b| {
            b.pos.x == FIELD_WIDTH
                && b.pos.y <= GROUND_Y - BANANA_MIN_ALTITUDE
                && b.pos.y > GROUND_Y - BANANA_MAX_ALTITUDE
        }));
    }

    #[test]
    fn test_obstacle_shapes_follow_kind() {
        let mut state = GameState::new(9);
        for _ in 0..5000 {
            spawn_entities(&mut state);
        }

        for obstacle in &state.obstacles {
            match obstacle.kind {
                ObstacleKind::Box => {
                    assert_eq!(obstacle.size, Vec2::splat(BOX_SIZE));
                    assert_eq!(obstacle.pos.y + obstacle.size.y, GROUND_Y);
                    assert_eq!(obstacle.vel_x, state.speed);
                }
                ObstacleKind::Droid => {
                    assert_eq!(obstacle.pos.y + obstacle.size.y, GROUND_Y);
                    assert_eq!(obstacle.vel_x, state.speed * DROID_SPEED_FACTOR);
                }
                ObstacleKind::Laser { phase } => {
                    assert_eq!(phase, 0.0);
                    assert!(obstacle.pos.y == 0.0 || obstacle.pos.y + LASER_HEIGHT == GROUND_Y);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..600 {
            spawn_entities(&mut a);
            spawn_entities(&mut b);
        }
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.bananas.len(), b.bananas.len());
        assert_eq!(a.powerups.len(), b.powerups.len());
    }
}
