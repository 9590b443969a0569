//! Configuration module for the prompting engine.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `PROMPTER_` and use double
//! underscores to separate nested levels:
//! - `PROMPTER_PROMPTS__RETRY_NOTICE="Try again"` sets `prompts.retry_notice`
//! - `PROMPTER_PROMPTS__SHOW_LIST_HINT=false` sets `prompts.show_list_hint`
//! - `PROMPTER_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the settings file, searched from the current directory up.
pub const CONFIG_DIR: &str = ".prompter";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "PROMPTER_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Text shown around prompts
    #[serde(default)]
    pub prompts: PromptConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PromptConfig {
    /// Printed before the reason when an answer is rejected
    #[serde(default = "default_retry_notice")]
    pub retry_notice: String,

    /// Yes/no question asked before a list or structural prompt
    #[serde(default = "default_skip_question")]
    pub skip_question: String,

    /// Explains how to end a list
    #[serde(default = "default_list_hint")]
    pub list_hint: String,

    #[serde(default = "default_true")]
    pub show_list_hint: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level for every module: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `prompter::registry = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 { 1 }
fn default_true() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }
fn default_retry_notice() -> String { "Please try again, answer is invalid".to_string() }
fn default_skip_question() -> String { "Try to skip aggregate? y/n: ".to_string() }
fn default_list_hint() -> String {
    "To stop input, press Enter with an empty element field.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            prompts: PromptConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            retry_notice: default_retry_notice(),
            skip_question: default_skip_question(),
            list_hint: default_list_hint(),
            show_list_hint: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref().to_path_buf())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore
            // stays within field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    /// Find `.prompter/settings.toml` from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
        }

        None
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Write a default settings file under `root`
    pub fn init_config_file(
        root: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use force to overwrite".into());
        }

        Settings::default().save(&config_path)?;
        tracing::info!("[config] wrote default settings to {}", config_path.display());

        Ok(config_path)
    }
}
