use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-semver.
///
/// Controls the default starting version and output behavior. Everything has
/// a sensible default so the tool works with no config file at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_base_version() -> String {
    "0.0.0".to_string()
}

/// Defaults applied when the corresponding CLI flag is absent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    /// Starting version used when --base is not given
    #[serde(default = "default_base_version")]
    pub base_version: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            base_version: default_base_version(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Output behavior configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Master color switch; --no-color and CI detection still win
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in the current directory
/// 3. `gitsemver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitsemver.toml").exists() {
        fs::read_to_string("./gitsemver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitsemver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("cannot parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.base_version, "0.0.0");
        assert!(config.output.color);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
[defaults]
base_version = "1.0.0"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.base_version, "1.0.0");
        // unspecified sections fall back to defaults
        assert!(config.output.color);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[defaults]
base_version = "2.3.4"

[output]
color = false
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.base_version, "2.3.4");
        assert!(!config.output.color);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
