//! Error types for the runtime's protocol surfaces.

mod adapter;
mod hook;
mod registry;

pub use adapter::AdapterError;
pub use hook::HookError;
pub use registry::RegistryError;
