//! HUD values
//!
//! Plain strings for the DOM overlay, derived from the simulation each frame.

use crate::consts::SPEED_DISPLAY_UNIT;
use crate::sim::GameState;

/// Everything the HUD shows
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub lives: u8,
    pub score: u64,
    /// Current speed relative to the first level's base speed
    pub speed_multiplier: f32,
    pub level_name: &'static str,
    pub shield: bool,
    pub magnet: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            lives: state.lives,
            score: state.score,
            speed_multiplier: state.speed / SPEED_DISPLAY_UNIT,
            level_name: state.level().name,
            shield: state.effects.shield_active(),
            magnet: state.effects.magnet_active(),
        }
    }

    /// One heart per remaining life
    pub fn lives_text(&self) -> String {
        "❤".repeat(self.lives as usize)
    }

    pub fn score_text(&self) -> String {
        format!("🍌 {}", self.score)
    }

    pub fn speed_text(&self) -> String {
        format!("Speed x{:.1}", self.speed_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPEEDUP_INCREMENT;

    #[test]
    fn test_fresh_hud() {
        let state = GameState::new(1);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.lives_text(), "❤❤❤");
        assert_eq!(hud.score_text(), "🍌 0");
        assert_eq!(hud.speed_text(), "Speed x1.0");
        assert_eq!(hud.level_name, "Stage 1: Laboratory");
    }

    #[test]
    fn test_speed_text_after_speedups() {
        let mut state = GameState::new(1);
        state.speed += 5.0 * SPEEDUP_INCREMENT;
        state.lives = 0;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.speed_text(), "Speed x1.4");
        assert_eq!(hud.lives_text(), "");
    }
}
