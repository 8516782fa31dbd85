//! High score tracking
//!
//! A single best score, read once at startup and written back only when a
//! finished run beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StoreError};

/// Store key for the best score
pub const HIGH_SCORE_KEY: &str = "dinoHighScore";

/// Best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Check if a score beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's score; true when it became the new best
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Load from a store; missing or unreadable values count as zero
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(HIGH_SCORE_KEY) {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self::new(best)
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(HIGH_SCORE_KEY, self.best)?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}

/// Format the HUD line: `HI 00120  00042`
pub fn format_hud(high_score: u64, score: u64) -> String {
    format!("HI {:05}  {:05}", high_score, score)
}
