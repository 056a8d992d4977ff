//! Level table
//!
//! Levels are static data selected by index. After the last level the run
//! wraps back to the first one.

use serde::Serialize;

/// Background silhouette style drawn behind the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Silhouettes {
    Lab,
    City,
    Beach,
}

/// Colors and scenery for a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    /// Sky gradient, top then bottom
    pub sky: (&'static str, &'static str),
    /// Primary accent (player highlights)
    pub accent_a: &'static str,
    /// Secondary accent (shield, dash trail)
    pub accent_b: &'static str,
    pub laser: &'static str,
    pub silhouettes: Silhouettes,
}

/// Per-tick spawn probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpawnRates {
    pub obstacle: f64,
    pub banana: f64,
    pub laser: f64,
}

/// A level definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level {
    pub name: &'static str,
    pub description: &'static str,
    /// Seconds until the level gate opens
    pub duration: f32,
    /// Scroll speed at level start (pixels/s)
    pub base_speed: f32,
    pub spawn: SpawnRates,
    pub theme: Theme,
}

pub static LEVELS: [Level; 3] = [
    Level {
        name: "Stage 1: Laboratory",
        description: "Conveyor belts, pipes and blinking lasers.",
        duration: 35.0,
        base_speed: 300.0,
        spawn: SpawnRates {
            obstacle: 0.020,
            banana: 0.018,
            laser: 0.004,
        },
        theme: Theme {
            sky: ("#1a2147", "#0b0f2e"),
            accent_a: "#ffd84d",
            accent_b: "#5bb1ff",
            laser: "#ff6b6b",
            silhouettes: Silhouettes::Lab,
        },
    },
    Level {
        name: "Stage 2: Villain City",
        description: "Neon towers, rolling droids and heavier traffic!",
        duration: 45.0,
        base_speed: 390.0,
        spawn: SpawnRates {
            obstacle: 0.026,
            banana: 0.020,
            laser: 0.006,
        },
        theme: Theme {
            sky: ("#1c114a", "#0a0823"),
            accent_a: "#ffd84d",
            accent_b: "#64c0ff",
            laser: "#ff5aa6",
            silhouettes: Silhouettes::City,
        },
    },
    Level {
        name: "Stage 3: Tropical Beach",
        description: "Waves, palm trees, high ledges and bananas everywhere.",
        duration: 60.0,
        base_speed: 450.0,
        spawn: SpawnRates {
            obstacle: 0.030,
            banana: 0.024,
            laser: 0.007,
        },
        theme: Theme {
            sky: ("#162b58", "#0a1736"),
            accent_a: "#ffd84d",
            accent_b: "#7de3ff",
            laser: "#ffa95a",
            silhouettes: Silhouettes::Beach,
        },
    },
];

/// Look up a level, wrapping out-of-range indices
pub fn level(index: usize) -> &'static Level {
    &LEVELS[index % LEVELS.len()]
}

/// Index of the level after `index`
pub fn next_level_index(index: usize) -> usize {
    (index + 1) % LEVELS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_level_wraps() {
        assert_eq!(next_level_index(0), 1);
        assert_eq!(next_level_index(1), 2);
        assert_eq!(next_level_index(2), 0);
    }

    #[test]
    fn test_levels_get_harder() {
        for pair in LEVELS.windows(2) {
            assert!(pair[1].base_speed > pair[0].base_speed);
            assert!(pair[1].duration > pair[0].duration);
            assert!(pair[1].spawn.obstacle > pair[0].spawn.obstacle);
        }
    }

    #[test]
    fn test_first_level_duration() {
        assert_eq!(level(0).duration, 35.0);
        assert_eq!(level(3).name, level(0).name);
    }
}
