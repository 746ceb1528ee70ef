//! The process-wide runtime context.
//!
//! [`Runtime`] is the single coordination point of the botkit process: it
//! owns the configuration singleton, the three registries, the locale
//! engine handle, and the memoized store handle, and it orchestrates
//! startup of the robot. Collaborators receive a reference to one
//! `Runtime` instead of reaching for ambient globals, which keeps tests
//! free to build a fresh context per case.
//!
//! Registration is a setup-phase activity: the registries take no internal
//! ordering guarantees against concurrent registration, and `reset` is a
//! destructive reinitialization primitive meant for single-threaded test
//! and restart scenarios. Only the memoized singletons (`config`, `store`)
//! guard their first-call-wins initialization with locks, because those
//! can race with `reset` from other components.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde_json::json;
use tracing::info;

use botkit_config::{Config, ConfigLoader};
use botkit_protocols::adapter::AdapterBuilder;
use botkit_protocols::error::RegistryError;
use botkit_protocols::handler::HandlerBuilder;
use botkit_protocols::hook::HookListener;
use botkit_protocols::i18n::LocaleEngine;
use botkit_protocols::store::{Namespaced, StoreClient};

use crate::error::CoreError;
use crate::locale::{normalize_locale, LocalePaths, MemoryCatalog};
use crate::registry::{AdapterRegistry, HandlerRegistry, HookRegistry};
use crate::robot::Robot;

/// Event fired by [`Runtime::run`] before the robot starts.
pub const BEFORE_RUN: &str = "before_run";

/// The process-wide registry and lifecycle context.
pub struct Runtime {
    config: RwLock<Option<Arc<RwLock<Config>>>>,
    adapters: AdapterRegistry,
    handlers: HandlerRegistry,
    hooks: HookRegistry,
    locale: Arc<dyn LocaleEngine>,
    store: OnceCell<Arc<Namespaced>>,
}

impl Runtime {
    /// Create a runtime with the in-process locale engine.
    pub fn new() -> Self {
        Self::with_locale_engine(Arc::new(MemoryCatalog::new()))
    }

    /// Create a runtime around an external locale engine.
    pub fn with_locale_engine(locale: Arc<dyn LocaleEngine>) -> Self {
        Self {
            config: RwLock::new(None),
            adapters: AdapterRegistry::new(),
            handlers: HandlerRegistry::new(),
            hooks: HookRegistry::new(),
            locale,
            store: OnceCell::new(),
        }
    }

    /// The configuration singleton, constructed on first access.
    ///
    /// Repeated calls return the identical instance until [`Runtime::reset`]
    /// discards it. First-call initialization holds the outer lock, so a
    /// concurrent `reset` cannot split the singleton.
    pub fn config(&self) -> Arc<RwLock<Config>> {
        let mut slot = self.config.write();
        slot.get_or_insert_with(|| Arc::new(RwLock::new(Config::default())))
            .clone()
    }

    /// Mutate the configuration in place.
    ///
    /// The callback runs synchronously under the config write lock; panics
    /// inside it propagate to the caller.
    pub fn configure(&self, f: impl FnOnce(&mut Config)) {
        let config = self.config();
        let mut guard = config.write();
        f(&mut guard);
    }

    /// The adapter registry.
    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    /// Register a transport adapter under a name.
    ///
    /// # Errors
    ///
    /// Key normalization failure only; duplicate names overwrite silently.
    pub fn register_adapter(
        &self,
        name: &str,
        builder: Arc<dyn AdapterBuilder>,
    ) -> Result<(), RegistryError> {
        self.adapters.register(name, builder)
    }

    /// The handler registry.
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Append a handler to the ordered sequence.
    pub fn register_handler(&self, builder: Arc<dyn HandlerBuilder>) {
        self.handlers.register(builder);
    }

    /// The hook registry.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Subscribe a listener to a lifecycle event.
    ///
    /// # Errors
    ///
    /// Key normalization failure only; re-registering the identical
    /// listener is a no-op.
    pub fn register_hook(
        &self,
        event: &str,
        listener: Arc<dyn HookListener>,
    ) -> Result<(), RegistryError> {
        self.hooks.register(event, listener)
    }

    /// Dispatch a lifecycle event to its listeners.
    ///
    /// # Errors
    ///
    /// Event-name normalization failure, or the first listener error.
    pub fn trigger(&self, event: &str, payload: &serde_json::Value) -> Result<(), CoreError> {
        self.hooks.trigger(event, payload)
    }

    /// Append locale resource paths to the engine's search path and reload.
    ///
    /// Accepts one path or a sequence; a scalar is wrapped before the
    /// engine sees it. Straight passthrough, so repeated calls append
    /// repeatedly.
    pub fn load_locales(&self, paths: impl Into<LocalePaths>) {
        self.locale.extend_load_path(paths.into().into_vec());
        self.locale.reload();
    }

    /// Normalize a raw locale and make it active.
    pub fn set_locale(&self, raw: &str) {
        self.locale.set_locale(&normalize_locale(raw));
    }

    /// The locale engine handle.
    pub fn locale_engine(&self) -> &Arc<dyn LocaleEngine> {
        &self.locale
    }

    /// The memoized, namespaced store handle.
    ///
    /// Built on first call from the current `redis` configuration. Never
    /// invalidated: `reset` clears registries and config, not this handle.
    pub fn store(&self) -> Arc<Namespaced> {
        self.store
            .get_or_init(|| {
                let config = self.config();
                let redis = config.read().redis.clone();
                let client = StoreClient::new(redis.host, redis.port, redis.db);
                Arc::new(Namespaced::new(client, redis.namespace))
            })
            .clone()
    }

    /// Discard the configuration singleton and clear every registry.
    ///
    /// The next `config()` call produces a fresh default tree. The store
    /// handle and the locale search path are deliberately untouched.
    pub fn reset(&self) {
        *self.config.write() = None;
        self.adapters.clear();
        self.handlers.clear();
        self.hooks.clear();
        info!("Runtime reset: config and registries cleared");
    }

    /// Fire `before_run` hooks, load the user configuration, and start the
    /// robot (blocking).
    ///
    /// The config path reaches the hook payload verbatim, not through key
    /// normalization. Re-entrant calls while a robot is running are the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// A failing listener aborts startup before the robot is constructed;
    /// config loading and adapter errors surface unchanged.
    pub fn run(&self, config_path: Option<&str>) -> Result<(), CoreError> {
        self.trigger(BEFORE_RUN, &json!({ "config_path": config_path }))?;

        if let Some(path) = config_path {
            let expanded = ConfigLoader::expand_path(path);
            let user = ConfigLoader::load(Path::new(&expanded))?;
            self.configure(|config| config.merge(user));
            info!(path, "User configuration loaded");
        }

        let mut robot = Robot::new(self)?;
        robot.run()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
