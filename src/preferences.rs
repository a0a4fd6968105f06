//! Persisted theme preference.
//!
//! Native builds keep the marker (`dark` / `light`) in a small file under the
//! user config directory; the web build keeps it in `localStorage`. When
//! neither is usable the preference lives only in memory for the session.

use crate::types::ThemeMode;
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use std::fs;

const PREFERENCE_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to write preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser storage unavailable: {0}")]
    Storage(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Backend {
    File(PathBuf),
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    LocalStorage,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    backend: Backend,
}

impl ThemePreference {
    /// The natural backend for the current target.
    pub fn platform_default() -> Self {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Self {
                backend: Backend::LocalStorage,
            }
        }
        #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
        {
            Self::in_memory()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_file(default_preference_path())
        }
    }

    pub fn in_file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(path.into()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory,
        }
    }

    /// Read the stored mode once; anything but the exact dark marker is light.
    pub fn initialize(&self) -> ThemeMode {
        self.read_marker()
            .map(|marker| ThemeMode::from_marker(&marker))
            .unwrap_or_default()
    }

    pub fn persist(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        match &self.backend {
            Backend::File(path) => write_marker(path, mode.marker()),
            #[cfg(all(target_arch = "wasm32", feature = "web"))]
            Backend::LocalStorage => web_storage::write(mode.marker()),
            Backend::Memory => Ok(()),
        }
    }

    /// Flip the mode and persist it. A failed write is logged and the new
    /// mode is still returned for the session.
    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        if let Err(err) = self.persist(next) {
            tracing::warn!(error = %err, "theme preference not saved");
        }
        next
    }

    fn read_marker(&self) -> Option<String> {
        match &self.backend {
            Backend::File(path) => read_marker(path),
            #[cfg(all(target_arch = "wasm32", feature = "web"))]
            Backend::LocalStorage => web_storage::read(),
            Backend::Memory => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_preference_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("jbpotato").join(PREFERENCE_KEY);
    }

    PathBuf::from("cache").join(PREFERENCE_KEY)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_marker(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_marker(_path: &Path) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_marker(path: &Path, marker: &str) -> Result<(), PreferenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, marker)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn write_marker(_path: &Path, _marker: &str) -> Result<(), PreferenceError> {
    Err(PreferenceError::Storage("no filesystem".to_string()))
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage {
    use super::{PREFERENCE_KEY, PreferenceError};

    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| PreferenceError::Storage("localStorage missing".to_string()))
    }

    pub fn read() -> Option<String> {
        storage().ok()?.get_item(PREFERENCE_KEY).ok().flatten()
    }

    pub fn write(marker: &str) -> Result<(), PreferenceError> {
        storage()?
            .set_item(PREFERENCE_KEY, marker)
            .map_err(|err| PreferenceError::Storage(format!("{err:?}")))
    }
}
