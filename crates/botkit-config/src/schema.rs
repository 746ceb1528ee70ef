//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub robot: RobotConfig,

    #[serde(default)]
    pub redis: RedisConfig,

    /// Adapter- and handler-specific settings, keyed by plugin name.
    /// The core never interprets these; they are handed through to the
    /// plugin that owns the key.
    #[serde(default)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Overlay another configuration on top of this one.
    ///
    /// Used when a user config file is loaded over the defaults: the
    /// incoming tree wins wholesale for the known tables, and extension
    /// sections merge key-by-key.
    pub fn merge(&mut self, other: Config) {
        self.robot = other.robot;
        self.redis = other.redis;
        self.extensions.extend(other.extensions);
    }
}

/// Robot identity and runtime selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Display name the robot answers to.
    #[serde(default = "default_name")]
    pub name: String,

    /// Optional short alias the robot also answers to.
    #[serde(default)]
    pub alias: Option<String>,

    /// Registry name of the transport adapter to start.
    #[serde(default = "default_adapter")]
    pub adapter: String,

    /// Active locale, if the deployment overrides the engine default.
    #[serde(default)]
    pub locale: Option<String>,

    /// Log level for the runtime's tracing output.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// User identifiers with administrative privileges.
    #[serde(default)]
    pub admins: Vec<String>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            alias: None,
            adapter: default_adapter(),
            locale: None,
            log_level: default_log_level(),
            admins: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Lita".to_string()
}

fn default_adapter() -> String {
    "shell".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Shared backing-store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_host")]
    pub host: String,

    #[serde(default = "default_redis_port")]
    pub port: u16,

    #[serde(default)]
    pub db: u32,

    /// Key prefix isolating the runtime's data within the store.
    #[serde(default = "default_redis_namespace")]
    pub namespace: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: default_redis_host(),
            port: default_redis_port(),
            db: 0,
            namespace: default_redis_namespace(),
        }
    }
}

fn default_redis_host() -> String {
    "127.0.0.1".to_string()
}

fn default_redis_port() -> u16 {
    6379
}

fn default_redis_namespace() -> String {
    "botkit".to_string()
}
