//! High score persistence
//!
//! A single integer, stored in LocalStorage as a decimal string.

/// Where the best score survives between sessions
pub trait HighScoreStore {
    /// Stored high score, 0 when absent or unreadable
    fn load(&self) -> u64;
    /// Persist a new high score. Best effort.
    fn save(&mut self, score: u64);
}

/// Parse a stored value, treating anything malformed as no score
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Number of writes performed
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a raw stored value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        parse_high_score(self.value.as_deref())
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score.to_string());
        self.saves += 1;
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{HighScoreStore, parse_high_score};

    /// LocalStorage-backed store
    #[derive(Debug, Clone, Default)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        /// LocalStorage key
        const STORAGE_KEY: &'static str = "stickerCatcher_highScore";

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
        }
    }

    impl HighScoreStore for LocalStorageStore {
        fn load(&self) -> u64 {
            let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
            let score = parse_high_score(raw.as_deref());
            log::info!("Loaded high score: {}", score);
            score
        }

        fn save(&mut self, score: u64) {
            if let Some(storage) = Self::storage() {
                if storage
                    .set_item(Self::STORAGE_KEY, &score.to_string())
                    .is_ok()
                {
                    log::info!("High score saved ({})", score);
                } else {
                    log::warn!("Failed to save high score");
                }
            }
        }
    }
}
