//! Cross-platform persistent key-value storage.
//!
//! Backends share the `localStorage` shape (string keys, string values):
//! - Web: `window.localStorage`
//! - Desktop: one file per key in the platform-appropriate config directory:
//!   - Linux: `~/.config/redsocial/`
//!   - macOS: `~/Library/Application Support/redsocial/`
//!   - Windows: `%APPDATA%\redsocial\`
//! - Anywhere: an in-memory map, for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;

/// Durable string key-value store.
pub trait Storage: Send + Sync {
    /// Read a key. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Pick the persistent backend for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Arc<dyn Storage> {
    Arc::new(LocalStorage)
}

/// Pick the persistent backend for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Arc<dyn Storage> {
    match FileStorage::in_config_dir() {
        Some(files) => Arc::new(files),
        None => {
            crate::log_warn!("no config directory found; session will not survive a restart");
            Arc::new(MemoryStorage::default())
        }
    }
}

// =========================================
// In-memory implementation
// =========================================

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::Storage;
    use crate::error::StorageError;

    const APP_DIR: &str = "redsocial";

    /// Stores each key as a file in one directory.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `<config dir>/redsocial`, if the platform has a config directory.
        pub fn in_config_dir() -> Option<Self> {
            dirs::config_dir().map(|config| Self::new(config.join(APP_DIR)))
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            // Sanitize key to be a valid filename
            let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
            self.dir.join(safe_key)
        }
    }

    impl Storage for FileStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            match std::fs::read_to_string(self.path_for(key)) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.path_for(key), value)?;
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            match std::fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}
