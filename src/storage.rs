//! Best score persistence
//!
//! The game only ever stores one number. Values are kept as decimal strings
//! so the key stays readable in the browser's storage inspector.

use std::collections::HashMap;

/// LocalStorage key for the best score
pub const BEST_SCORE_KEY: &str = "banana_dash_best";

/// Key/value store for scores
pub trait ScoreStore {
    /// Stored value, 0 when absent or unreadable
    fn get(&self, key: &str) -> u64;
    fn set(&mut self, key: &str, value: u64);
}

/// Parse a stored score, treating anything malformed as 0
pub fn parse_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, as if written by an older build
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.values.insert(key.to_string(), raw.to_string());
        self
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> u64 {
        parse_score(self.values.get(key).map(String::as_str))
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// `window.localStorage` backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> u64 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score starts at 0");
            return 0;
        };
        let raw = storage.get_item(key).ok().flatten();
        parse_score(raw.as_deref())
    }

    fn set(&mut self, key: &str, value: u64) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, &value.to_string()).is_err() {
                    log::warn!("Failed to save best score");
                } else {
                    log::info!("Best score saved ({})", value);
                }
            }
            None => log::warn!("LocalStorage unavailable, best score not saved"),
        }
    }
}
