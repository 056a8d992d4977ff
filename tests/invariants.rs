//! Property tests for whole-session invariants

use banana_dash::consts::*;
use banana_dash::sim::{
    self, GamePhase, GameState, Obstacle, ObstacleKind, PowerupKind, Rect, TickInput,
    rect_circle_overlap,
};
use glam::Vec2;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<(bool, bool)>> {
    proptest::collection::vec((any::<bool>(), any::<bool>()), 1..1500)
}

fn obstacle_kind() -> impl Strategy<Value = ObstacleKind> {
    prop_oneof![
        Just(ObstacleKind::Box),
        Just(ObstacleKind::Droid),
        (0.0f32..10.0).prop_map(|phase| ObstacleKind::Laser { phase }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn session_invariants_hold(seed: u64, inputs in inputs()) {
        let mut state = GameState::new(seed);
        sim::start(&mut state);

        let mut last_score = state.score;
        let mut last_speed = state.speed;
        let mut last_level = state.level_index;

        for (jump, dash) in inputs {
            let input = TickInput { jump, dash };
            sim::tick(&mut state, &input, SIM_DT);

            prop_assert!(state.lives <= START_LIVES);
            prop_assert!(state.score >= last_score);
            if state.level_index == last_level {
                prop_assert!(state.speed >= last_speed);
            }
            prop_assert!(state.obstacles.iter().all(|o| o.pos.x + o.size.x > OBSTACLE_DESPAWN_X));
            prop_assert!(state.bananas.iter().all(|b| b.pos.x > BANANA_DESPAWN_X));
            prop_assert!(state.powerups.iter().all(|p| p.pos.x > POWERUP_DESPAWN_X));
            prop_assert!(state.player.pos.y <= state.player.ground_y());
            if state.lives == 0 {
                prop_assert_eq!(state.phase, GamePhase::GameOver);
            }

            match state.phase {
                GamePhase::LevelGate => sim::continue_level(&mut state),
                GamePhase::GameOver => break,
                _ => {}
            }
            last_score = state.score;
            last_speed = state.speed;
            last_level = state.level_index;
        }
    }

    #[test]
    fn dash_never_costs_lives(
        kinds in proptest::collection::vec(obstacle_kind(), 1..6),
        shield: bool,
    ) {
        let mut state = GameState::new(0);
        sim::start(&mut state);
        state.player.dash();
        if shield {
            state.effects.activate(PowerupKind::Shield);
        }
        for kind in kinds {
            let size = match kind {
                ObstacleKind::Droid => Vec2::splat(DROID_SIZE),
                ObstacleKind::Box => Vec2::splat(BOX_SIZE),
                ObstacleKind::Laser { .. } => Vec2::new(LASER_WIDTH, LASER_HEIGHT),
            };
            state.obstacles.push(Obstacle {
                kind,
                pos: state.player.center() - size * 0.5,
                size,
                vel_x: 0.0,
            });
        }

        sim::tick(&mut state, &TickInput::default(), SIM_DT);

        prop_assert_eq!(state.lives, START_LIVES);
        prop_assert!(state.obstacles.iter().all(|o| o.vel_x > 0.0));
        prop_assert_eq!(state.effects.shield_active(), shield);
    }

    #[test]
    fn circle_beyond_corner_never_hits(
        w in 1.0f32..200.0,
        h in 1.0f32..200.0,
        radius in 1.0f32..50.0,
        angle in 0.01f32..std::f32::consts::FRAC_PI_2 - 0.01,
        slack in 0.01f32..1.0,
    ) {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(w, h));
        let dir = Vec2::new(angle.cos(), angle.sin());
        let outside = rect.max() + dir * (radius + slack);
        let inside = rect.max() + dir * (radius - slack).max(0.0);

        prop_assert!(!rect_circle_overlap(&rect, outside, radius));
        prop_assert!(rect_circle_overlap(&rect, inside, radius));
    }
}

#[test]
fn circle_touching_corner_hits() {
    let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0));
    // 6-8-10 triangle from the bottom-right corner (40, 30)
    assert!(rect_circle_overlap(&rect, Vec2::new(46.0, 38.0), 10.0));
    assert!(!rect_circle_overlap(&rect, Vec2::new(46.0, 38.0), 9.999));
}

#[test]
fn two_hits_with_shield_cost_one_life() {
    let mut state = GameState::new(0);
    sim::start(&mut state);
    state.effects.activate(PowerupKind::Shield);

    for _ in 0..2 {
        let size = Vec2::splat(BOX_SIZE);
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Box,
            pos: state.player.center() - size * 0.5,
            size,
            vel_x: 0.0,
        });
        sim::tick(&mut state, &TickInput::default(), SIM_DT);
    }

    assert_eq!(state.lives, START_LIVES - 1);
    assert!(!state.effects.shield_active());
}
