use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-config.
///
/// Contains the main branch name, remote and branch naming settings, the
/// tag format template, and the plugin pipeline handed to the release
/// orchestrator. Every field has a default reproducing the stock release
/// setup, so an absent or empty configuration file is fully usable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,
}

/// Returns the branch every release setup publishes from.
fn default_main_branch() -> String {
    "main".to_string()
}

/// Returns the remote whose branches are scanned for maintenance lines.
fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the naming prefix marking a branch as a maintenance line.
fn default_branch_prefix() -> String {
    "release/".to_string()
}

/// Returns the tag naming template (bare version number, no "v" prefix).
fn default_tag_format() -> String {
    "{version}".to_string()
}

/// Returns the default plugin pipeline, in execution order.
///
/// The identifiers are lookup keys resolved by the release orchestrator:
/// commit analysis, release-note generation, and publishing.
fn default_plugins() -> Vec<String> {
    vec![
        "commit-analyzer".to_string(),
        "release-notes-generator".to_string(),
        "github".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_branch: default_main_branch(),
            remote: default_remote(),
            branch_prefix: default_branch_prefix(),
            tag_format: default_tag_format(),
            plugins: default_plugins(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaseconf.toml` in current directory
/// 3. `.releaseconf.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releaseconf.toml").exists() {
        fs::read_to_string("./releaseconf.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releaseconf.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
