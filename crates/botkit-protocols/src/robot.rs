//! The robot handle passed to adapter and handler constructors.

use std::collections::HashMap;

use serde_json::Value;

/// Narrow view of the owning robot.
///
/// Adapter and handler builders receive this instead of the robot itself:
/// it carries the identity fields and a snapshot of the per-plugin
/// configuration sections, nothing more.
#[derive(Debug, Clone, Default)]
pub struct RobotHandle {
    /// Display name the robot answers to.
    pub name: String,

    /// Optional short alias (e.g. a leading `!`).
    pub alias: Option<String>,

    /// Per-plugin configuration sections, keyed by plugin name.
    extensions: HashMap<String, Value>,
}

impl RobotHandle {
    /// Create a handle.
    pub fn new(
        name: impl Into<String>,
        alias: Option<String>,
        extensions: HashMap<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            alias,
            extensions,
        }
    }

    /// Configuration section for one plugin, if the user provided one.
    pub fn extension_config(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }
}
