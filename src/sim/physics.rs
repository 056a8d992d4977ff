//! Player motion and entity scrolling

use glam::Vec2;

use super::state::{GameState, ObstacleKind, Player};
use crate::consts::*;

/// Advance the player: integrate, apply gravity unless dashing, land, count
/// down the dash.
pub fn step_player(player: &mut Player, dt: f32) {
    player.pos.y += player.vel_y * dt;
    if !player.dashing {
        player.vel_y += GRAVITY * dt;
    }

    let ground = player.ground_y();
    if player.pos.y >= ground {
        player.pos.y = ground;
        player.jumping = false;
        player.vel_y = player.vel_y.min(0.0);
    }

    if player.dashing {
        player.dash_timer -= dt;
        if player.dash_timer <= 0.0 {
            player.dash_timer = 0.0;
            player.dashing = false;
        }
    }
}

/// Offset that pulls a banana at `pos` toward `target` this tick.
/// Stronger when closer, capped at `MAGNET_MAX_PULL`.
pub fn magnet_pull(pos: Vec2, target: Vec2, dt: f32) -> Vec2 {
    let to_target = target - pos;
    let dist = to_target.length();
    if dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let pull = (MAGNET_STRENGTH / (dist + 1.0)).clamp(0.0, MAGNET_MAX_PULL);
    to_target / dist * pull * dt
}

/// Scroll every entity left and drop the ones that left the field
pub fn move_entities(state: &mut GameState, dt: f32) {
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= obstacle.vel_x * dt;
        if let ObstacleKind::Laser { ref mut phase } = obstacle.kind {
            *phase += LASER_PULSE_RATE * dt;
        }
    }
    state
        .obstacles
        .retain(|o| o.pos.x + o.size.x > OBSTACLE_DESPAWN_X);

    let magnet = state.effects.magnet_active();
    let target = state.player.center();
    for banana in &mut state.bananas {
        if magnet {
            banana.pos += magnet_pull(banana.pos, target, dt);
        }
        banana.pos.x -= state.speed * dt;
    }
    state.bananas.retain(|b| b.pos.x > BANANA_DESPAWN_X);

    for powerup in &mut state.powerups {
        powerup.pos.x -= state.speed * dt;
    }
    state.powerups.retain(|p| p.pos.x > POWERUP_DESPAWN_X);
}
