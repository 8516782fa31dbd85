//! Key-value persistence for scalar values
//!
//! Stores:
//! - `MemoryStore`: in-process map (tests, headless runs without a file)
//! - `FileStore`: JSON map on disk with atomic replace (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::HashMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Errors raised when writing to a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store of numeric values
///
/// Reads never fail: a missing or unreadable value is `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

/// In-memory store; counts writes so callers can verify write frequency
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with(key: &str, value: u64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

/// Parse a stored textual score
///
/// Accepts integers and non-negative decimals (truncated); anything else is `None`.
pub fn parse_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u64>() {
        return Some(v);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", 12).unwrap();
        assert_eq!(store.get("k"), Some(12));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("123"), Some(123));
        assert_eq!(parse_score(" 45 \n"), Some(45));
        assert_eq!(parse_score("88.9"), Some(88));
        assert_eq!(parse_score("-3"), None);
        assert_eq!(parse_score("NaN"), None);
        assert_eq!(parse_score("garbage"), None);
        assert_eq!(parse_score(""), None);
    }
}
