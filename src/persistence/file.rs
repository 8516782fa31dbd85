//! JSON-file backed store (native only)

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{KeyValueStore, StoreError, parse_score};

/// Keys and values kept in one JSON object on disk
///
/// The whole file is rewritten on every `set` (tmp file + rename).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
    /// Set when the file exists but couldn't be read; writes are refused
    read_error: Option<String>,
}

impl FileStore {
    /// Open the store at `path`; a missing or malformed file starts empty
    ///
    /// Any other read failure (permissions, a directory in the way) leaves
    /// the store empty and read-only.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut read_error = None;
        let entries = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<BTreeMap<String, Value>>(&json) {
                Ok(entries) => {
                    log::info!("Loaded {} stored values from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    log::warn!("Ignoring malformed store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Can't read store {}: {}", path.display(), e);
                read_error = Some(format!("{}: {}", path.display(), e));
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries,
            read_error,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), StoreError> {
        if let Some(reason) = &self.read_error {
            return Err(StoreError::Unavailable(reason.clone()));
        }
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<u64> {
        match self.entries.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v.floor() as u64)),
            Value::String(s) => parse_score(s),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), Value::from(value));
        self.write()
    }
}
