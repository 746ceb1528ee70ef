//! Shared backing-store handle.
//!
//! The runtime hands every component one process-wide, namespaced handle to
//! the shared key/value store. The storage engine itself is external; this
//! module carries the connection parameters and the key-namespacing wrapper.

use serde::{Deserialize, Serialize};

/// Connection descriptor for the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreClient {
    host: String,
    port: u16,
    db: u32,
}

impl StoreClient {
    /// Create a descriptor from connection parameters.
    pub fn new(host: impl Into<String>, port: u16, db: u32) -> Self {
        Self {
            host: host.into(),
            port,
            db,
        }
    }

    /// Host the store listens on.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port the store listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Logical database index.
    pub fn db(&self) -> u32 {
        self.db
    }

    /// Connection URL in `redis://host:port/db` form.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

/// Namespace wrapper over a base client.
///
/// Every key that passes through this handle is prefixed with the
/// namespace, keeping the runtime's data apart from anything else living
/// in the same store.
#[derive(Debug, Clone)]
pub struct Namespaced {
    client: StoreClient,
    namespace: String,
}

impl Namespaced {
    /// Wrap a base client under a namespace.
    pub fn new(client: StoreClient, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    /// The wrapped base client.
    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    /// The namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified form of a raw key.
    pub fn key(&self, raw: &str) -> String {
        format!("{}:{}", self.namespace, raw)
    }
}
