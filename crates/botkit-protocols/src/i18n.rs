//! Localization engine interface.
//!
//! The catalog engine is an external collaborator. The core only appends
//! resource paths to its search path, asks it to reload, and forwards the
//! normalized active locale; parsing and storing translations is the
//! engine's business.

use std::path::PathBuf;

/// External localization engine.
pub trait LocaleEngine: Send + Sync {
    /// Append resource paths to the engine's search path.
    ///
    /// This is a direct passthrough: calling twice with the same paths
    /// appends twice.
    fn extend_load_path(&self, paths: Vec<PathBuf>);

    /// Re-read all catalogs on the current search path.
    fn reload(&self);

    /// Switch the active locale. The string arrives already normalized
    /// (hyphenated, e.g. `es-MX.UTF-8`); any further validation is the
    /// engine's own.
    fn set_locale(&self, locale: &str);
}
