//! Input mapping
//!
//! Keys and on-screen buttons map straight to actions. Touch uses a single
//! tap for jump and a quick second tap for dash.

/// A player action request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Dash,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<Action> {
    match code {
        "Space" | "ArrowUp" => Some(Action::Jump),
        "ShiftLeft" | "ShiftRight" => Some(Action::Dash),
        _ => None,
    }
}

/// Tells single taps from double taps
#[derive(Debug, Clone)]
pub struct TapDetector {
    window_ms: f64,
    last_tap_ms: Option<f64>,
}

impl TapDetector {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_tap_ms: None,
        }
    }

    /// Register a tap at `now_ms`. Every tap restarts the window, so a fast
    /// triple tap reads as jump, dash, dash.
    pub fn tap(&mut self, now_ms: f64) -> Action {
        let action = match self.last_tap_ms {
            Some(last) if now_ms - last < self.window_ms => Action::Dash,
            _ => Action::Jump,
        };
        self.last_tap_ms = Some(now_ms);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key("Space"), Some(Action::Jump));
        assert_eq!(action_for_key("ShiftRight"), Some(Action::Dash));
        assert_eq!(action_for_key("KeyQ"), None);
    }

    #[test]
    fn test_double_tap_is_dash() {
        let mut taps = TapDetector::new(300.0);
        assert_eq!(taps.tap(1000.0), Action::Jump);
        assert_eq!(taps.tap(1200.0), Action::Dash);
        assert_eq!(taps.tap(1450.0), Action::Dash);
        assert_eq!(taps.tap(1750.0), Action::Jump);
    }

    #[test]
    fn test_first_tap_is_jump() {
        let mut taps = TapDetector::new(300.0);
        assert_eq!(taps.tap(0.0), Action::Jump);
    }
}
