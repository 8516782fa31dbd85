//! Input sampling
//!
//! Key and touch events arrive whenever the host delivers them; the sampler
//! folds them into held-key state plus one-shot edges and hands the frame a
//! single immutable `TickInput`.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    held: HashSet<Key>,
    touching: bool,
    start_pending: bool,
    restart_pending: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if key == Key::Other {
            return;
        }
        self.held.insert(key);
        if matches!(key, Key::Space | Key::ArrowUp) {
            self.start_pending = true;
        }
        if key == Key::Space {
            self.restart_pending = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Touch acts as a held jump and starts the first run
    pub fn touch_start(&mut self) {
        self.touching = true;
        self.start_pending = true;
    }

    /// Lifting the finger releases the jump and requests a restart
    pub fn touch_end(&mut self) {
        self.touching = false;
        self.restart_pending = true;
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
        self.touching = false;
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Build this frame's input and clear the one-shot edges
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            jump: self.touching || self.is_held(Key::Space) || self.is_held(Key::ArrowUp),
            duck: self.is_held(Key::ArrowDown),
            start: self.start_pending,
            restart: self.restart_pending,
        };
        self.start_pending = false;
        self.restart_pending = false;
        input
    }
}
