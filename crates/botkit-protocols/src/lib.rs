//! # botkit Protocols
//!
//! Trait contracts for the botkit chat-automation runtime.
//!
//! The runtime core coordinates pluggable pieces through the narrow
//! interfaces defined here:
//!
//! - [`Adapter`] / [`AdapterBuilder`] - transport adapters connecting the
//!   robot to a chat service
//! - [`Handler`] / [`HandlerBuilder`] - message-processing plugins
//! - [`HookListener`] - lifecycle event subscribers
//! - [`LocaleEngine`] - the external localization engine
//! - [`Namespaced`] - the shared backing-store handle
//!
//! Transport behavior, message routing, catalog contents, and storage
//! engines all live behind these seams; the core never reaches past them.

pub mod adapter;
pub mod error;
pub mod handler;
pub mod hook;
pub mod i18n;
pub mod robot;
pub mod store;

pub use adapter::{Adapter, AdapterBuilder};
pub use error::{AdapterError, HookError, RegistryError};
pub use handler::{Handler, HandlerBuilder};
pub use hook::HookListener;
pub use i18n::LocaleEngine;
pub use robot::RobotHandle;
pub use store::{Namespaced, StoreClient};
