//! Light/dark theme preference
//!
//! The preference is one string key (`"theme"`) holding `"dark"` or `"light"`.
//! Anything else, including a missing key, means dark.

use anyhow::Result;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const THEME_KEY: &str = "theme";
const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Small string key-value store for UI preferences
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// Best effort; failures are logged, never surfaced
    fn set(&self, key: &str, value: &str);
}

/// Preferences kept in a JSON object on disk
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store; a missing or unreadable file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(values)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&values) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save preferences");
        }
    }
}

/// Process-local store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}

/// Whatever carries the document-level dark style flag
pub trait StyleRoot {
    fn set_dark(&mut self, dark: bool);
}

pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    dark: bool,
}

impl ThemeController {
    /// Dark unless the store holds exactly "light"
    pub fn initial_preference(store: &dyn PreferenceStore) -> bool {
        store.get(THEME_KEY).as_deref() != Some(LIGHT)
    }

    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let dark = Self::initial_preference(store.as_ref());
        Self { store, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Push the current preference to the root and back into storage
    pub fn apply(&self, root: &mut dyn StyleRoot) {
        root.set_dark(self.dark);
        self.store
            .set(THEME_KEY, if self.dark { DARK } else { LIGHT });
    }

    pub fn set_preference(&mut self, dark: bool, root: &mut dyn StyleRoot) {
        self.dark = dark;
        self.apply(root);
    }

    pub fn toggle(&mut self, root: &mut dyn StyleRoot) {
        self.set_preference(!self.dark, root);
    }
}
