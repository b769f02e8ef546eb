//! Durable storage for the chosen language.
//!
//! A thin key-value wrapper: one string entry under [`PREFERENCE_KEY`], last
//! write wins.

use crate::i18n::PreferenceError;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage key for the active language code.
pub const PREFERENCE_KEY: &str = "clubtify_lang";

pub trait PreferenceStore {
    /// The stored code, if any. Unreadable storage counts as absent.
    fn load(&self) -> Option<String>;

    fn save(&self, code: &str) -> Result<(), PreferenceError>;
}

/// Session-only store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(code.into())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}

/// File-backed store.
///
/// The file holds a JSON object of string entries, like browser local
/// storage; entries other than [`PREFERENCE_KEY`] are preserved on save.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, PreferenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => entries
                .get(PREFERENCE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                warn!("Ignoring stored language preference: {}", e);
                None
            }
        }
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(PREFERENCE_KEY.to_string(), Value::String(code.to_string()));

        let body = serde_json::to_string_pretty(&entries).map_err(|source| {
            PreferenceError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        std::fs::write(&self.path, body).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
