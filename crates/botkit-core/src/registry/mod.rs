//! Registries for adapters, handlers, and hook listeners.
//!
//! Three containers with three deliberate duplicate policies:
//!
//! - adapters: name-keyed, silent last-write-wins overwrite
//! - handlers: keyless ordered sequence, duplicates kept
//! - hooks: name-keyed identity sets, re-registration is a no-op

mod adapter;
mod handler;
mod hook;

pub use adapter::AdapterRegistry;
pub use handler::HandlerRegistry;
pub use hook::{dispatch, HookRegistry};
