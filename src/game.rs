//! Session controller
//!
//! Owns the simulation state, turns variable frame times into fixed ticks,
//! buffers player requests and keeps the best score up to date.

use crate::consts::*;
use crate::sim::{self, GameEvent, GamePhase, GameState, TickInput};
use crate::storage::{BEST_SCORE_KEY, ScoreStore};

/// Game instance holding all session state
#[derive(Debug)]
pub struct Game<S: ScoreStore> {
    pub state: GameState,
    store: S,
    best_score: u64,
    accumulator: f32,
    input: TickInput,
}

impl<S: ScoreStore> Game<S> {
    /// Create a session on the start screen, loading the previous best score
    pub fn new(seed: u64, store: S) -> Self {
        let best_score = store.get(BEST_SCORE_KEY);
        log::info!("Game initialized with seed {} (best {})", seed, best_score);
        Self {
            state: GameState::new(seed),
            store,
            best_score,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Request a jump on the next tick
    pub fn jump(&mut self) {
        self.input.jump = true;
    }

    /// Request a dash on the next tick
    pub fn dash(&mut self) {
        self.input.dash = true;
    }

    pub fn start(&mut self) {
        sim::start(&mut self.state);
        self.accumulator = 0.0;
    }

    pub fn continue_level(&mut self) {
        sim::continue_level(&mut self.state);
        self.accumulator = 0.0;
    }

    pub fn restart(&mut self) {
        sim::restart(&mut self.state);
        self.accumulator = 0.0;
    }

    /// Run simulation ticks for `dt` seconds of wall time and return what
    /// happened, including events raised by the phase actions since the
    /// last call.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        if self.state.phase == GamePhase::Playing {
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                sim::tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input = TickInput::default();

                if self.state.phase != GamePhase::Playing {
                    break;
                }
            }
        }

        // Requests made while frozen have no effect
        if self.state.phase != GamePhase::Playing {
            self.accumulator = 0.0;
            self.input = TickInput::default();
        }

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::GameOver { score } = event {
                self.record_score(*score);
            }
        }
        events
    }

    fn record_score(&mut self, score: u64) {
        let previous = self.store.get(BEST_SCORE_KEY);
        let best = previous.max(score);
        self.store.set(BEST_SCORE_KEY, best);
        self.best_score = best;
        if score > previous {
            log::info!("New best score: {}", score);
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, ObstacleKind};
    use crate::storage::MemoryStore;
    use glam::Vec2;

    fn droid_on_player(state: &GameState) -> Obstacle {
        let size = Vec2::splat(DROID_SIZE);
        Obstacle {
            kind: ObstacleKind::Droid,
            pos: state.player.center() - size * 0.5,
            size,
            vel_x: 0.0,
        }
    }

    #[test]
    fn test_loads_previous_best() {
        let store = MemoryStore::new().with_raw(BEST_SCORE_KEY, "17");
        let game = Game::new(1, store);
        assert_eq!(game.best_score(), 17);
        assert_eq!(game.phase(), GamePhase::PreStart);
    }

    #[test]
    fn test_frozen_before_start() {
        let mut game = Game::new(1, MemoryStore::new());
        game.jump();
        let events = game.update(1.0);
        assert!(events.is_empty());
        assert_eq!(game.state.time_ticks, 0);

        game.start();
        let events = game.update(SIM_DT * 1.5);
        assert_eq!(events.first(), Some(&GameEvent::RunStarted));
        assert_eq!(game.state.time_ticks, 1);
        // The jump requested on the start screen was dropped
        assert!(!game.state.player.jumping);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game = Game::new(1, MemoryStore::new());
        game.start();
        game.update(5.0);
        let first = game.state.time_ticks;
        assert!((5..=6).contains(&first));
        game.update(1.0);
        assert!(game.state.time_ticks <= first + 7);
    }

    #[test]
    fn test_game_over_records_best() {
        let store = MemoryStore::new().with_raw(BEST_SCORE_KEY, "3");
        let mut game = Game::new(1, store);
        game.start();
        game.update(0.0);

        game.state.lives = 1;
        game.state.score = 8;
        let droid = droid_on_player(&game.state);
        game.state.obstacles.push(droid);

        let events = game.update(SIM_DT);
        assert!(events.contains(&GameEvent::GameOver { score: 8 }));
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.best_score(), 8);
        assert_eq!(game.store().get(BEST_SCORE_KEY), 8);
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let store = MemoryStore::new().with_raw(BEST_SCORE_KEY, "30");
        let mut game = Game::new(1, store);
        game.start();
        game.state.lives = 1;
        game.state.score = 2;
        let droid = droid_on_player(&game.state);
        game.state.obstacles.push(droid);

        game.update(SIM_DT);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.best_score(), 30);
        assert_eq!(game.store().get(BEST_SCORE_KEY), 30);

        game.restart();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state.score, 0);
    }

    #[test]
    fn test_level_gate_round_trip() {
        let mut game = Game::new(1, MemoryStore::new());
        game.start();
        game.state.level_time = 1000.0;
        let events = game.update(SIM_DT);
        assert!(events.contains(&GameEvent::LevelComplete { next_level: 1 }));

        let ticks = game.state.time_ticks;
        game.update(1.0);
        assert_eq!(game.state.time_ticks, ticks);

        game.continue_level();
        let events = game.update(SIM_DT);
        assert!(events.contains(&GameEvent::LevelStarted { level: 1 }));
        assert_eq!(game.state.time_ticks, ticks + 1);
    }
}
