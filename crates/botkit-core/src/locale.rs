//! Locale loading and normalization.
//!
//! The core owns two small jobs here: canonicalizing raw locale strings
//! (`es_MX.UTF-8` becomes `es-MX.UTF-8`) and feeding resource paths to the
//! external [`LocaleEngine`]. Path loading is a direct passthrough; the
//! engine receives every append, duplicates included.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use botkit_protocols::i18n::LocaleEngine;

/// Canonicalize a raw locale string.
///
/// Underscore separators become hyphens; everything else, including any
/// `.ENCODING` suffix, passes through unchanged. Malformed locales are the
/// engine's problem, not ours.
pub fn normalize_locale(raw: &str) -> String {
    raw.replace('_', "-")
}

/// Scalar-or-sequence argument for locale path loading.
///
/// A single path wraps into a one-element sequence, so callers can hand
/// over one file or a whole list through the same entry point.
pub struct LocalePaths(Vec<PathBuf>);

impl LocalePaths {
    /// The wrapped sequence.
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl From<&str> for LocalePaths {
    fn from(path: &str) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<String> for LocalePaths {
    fn from(path: String) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for LocalePaths {
    fn from(path: &Path) -> Self {
        Self(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for LocalePaths {
    fn from(path: PathBuf) -> Self {
        Self(vec![path])
    }
}

impl From<Vec<PathBuf>> for LocalePaths {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }
}

impl From<Vec<String>> for LocalePaths {
    fn from(paths: Vec<String>) -> Self {
        Self(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl From<Vec<&str>> for LocalePaths {
    fn from(paths: Vec<&str>) -> Self {
        Self(paths.into_iter().map(PathBuf::from).collect())
    }
}

/// In-process locale engine used when no external engine is injected.
///
/// Keeps the search path and active locale observable; catalog contents
/// belong to real engines behind the same trait.
pub struct MemoryCatalog {
    load_path: RwLock<Vec<PathBuf>>,
    locale: RwLock<String>,
    reloads: RwLock<usize>,
}

impl MemoryCatalog {
    /// Create an engine with an empty search path and `en` active.
    pub fn new() -> Self {
        Self {
            load_path: RwLock::new(Vec::new()),
            locale: RwLock::new("en".to_string()),
            reloads: RwLock::new(0),
        }
    }

    /// Snapshot of the search path.
    pub fn load_path(&self) -> Vec<PathBuf> {
        self.load_path.read().clone()
    }

    /// The active locale.
    pub fn locale(&self) -> String {
        self.locale.read().clone()
    }

    /// How many times `reload` has been requested.
    pub fn reload_count(&self) -> usize {
        *self.reloads.read()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleEngine for MemoryCatalog {
    fn extend_load_path(&self, paths: Vec<PathBuf>) {
        self.load_path.write().extend(paths);
    }

    fn reload(&self) {
        *self.reloads.write() += 1;
        debug!("Locale catalogs reloaded");
    }

    fn set_locale(&self, locale: &str) {
        *self.locale.write() = locale.to_string();
    }
}
