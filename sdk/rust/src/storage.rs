//! Storage adapters for the Vitrine SDK
//!
//! Hold what a browser keeps in local storage: the bearer token, the
//! logged-in user and the language preference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Storage keys
pub mod keys {
    pub const TOKEN: &str = "vitrine:token";
    pub const USER: &str = "vitrine:user";
    pub const LANGUAGE: &str = "vitrine:language";
}

/// Storage adapter trait for custom storage implementations
pub trait StorageAdapter: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// In-memory storage adapter. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    store: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.store.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut store) = self.store.write() {
            store.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut store) = self.store.write() {
            store.remove(key);
        }
    }
}

/// JSON-file storage adapter. Every write flushes the whole map.
pub struct FileStorage {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Storage backed by `path`. A missing or unreadable file starts empty.
    pub fn at(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Storage in the per-user data directory for `app_name`:
    ///
    /// - Linux: `~/.local/share/{app_name}/vitrine.json`
    /// - macOS: `~/Library/Application Support/{app_name}/vitrine.json`
    /// - Windows: `C:\Users\{User}\AppData\Roaming\{app_name}\vitrine.json`
    #[cfg(feature = "native-storage")]
    pub fn new(app_name: &str) -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", app_name)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir).ok()?;
        Some(Self::at(data_dir.join("vitrine.json")))
    }

    fn save(&self) {
        let Ok(cache) = self.cache.read() else {
            return;
        };
        match serde_json::to_string_pretty(&*cache) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&self.path, contents) {
                    tracing::warn!("Failed to write {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode storage: {}", e),
        }
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.to_string(), value.to_string());
        }
        self.save();
    }

    fn remove(&self, key: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(key);
        }
        self.save();
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("path", &self.path)
            .finish()
    }
}
