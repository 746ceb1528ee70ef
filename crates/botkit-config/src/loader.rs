//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let expanded = Self::expand_env_vars(&content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.botkit.toml`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.robot.name, "Lita");
        assert_eq!(config.redis.port, 6379);
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [robot]
            name = "Marvin"
            adapter = "irc"

            [redis]
            namespace = "marvin"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.robot.name, "Marvin");
        assert_eq!(config.robot.adapter, "irc");
        assert_eq!(config.redis.namespace, "marvin");
    }

    #[test]
    fn test_load_extension_sections() {
        let content = r#"
            [extensions.irc]
            server = "irc.example.com"
            port = 6667
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        let irc = config.extensions.get("irc").unwrap();
        assert_eq!(irc["server"], "irc.example.com");
        assert_eq!(irc["port"], 6667);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[robot]\nname = \"FileBot\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.robot.name, "FileBot");
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/botkit.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        unsafe { std::env::set_var("BOTKIT_TEST_NAME", "EnvBot") };
        let config = ConfigLoader::load_str("[robot]\nname = \"${BOTKIT_TEST_NAME}\"").unwrap();
        assert_eq!(config.robot.name, "EnvBot");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let result = ConfigLoader::load_str("[robot]\nname = \"${BOTKIT_TEST_UNSET_VAR}\"");
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.botkit.toml");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_parse_error() {
        let result = ConfigLoader::load_str("[robot\nname =");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
