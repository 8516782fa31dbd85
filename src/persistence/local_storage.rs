//! Browser LocalStorage backed store (wasm32 only)

use super::{KeyValueStore, StoreError, parse_score};

/// Values stored as decimal strings under their key
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<u64> {
        let raw = Self::storage()?.get_item(key).ok().flatten()?;
        parse_score(&raw)
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        let storage =
            Self::storage().ok_or_else(|| StoreError::Unavailable("no LocalStorage".into()))?;
        storage
            .set_item(key, &value.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
