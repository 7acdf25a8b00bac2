//! Configuration management

use crate::domain::tags::SortMode;
use crate::error::{Result, TagsearchError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional config file looked up in the search root
pub const CONFIG_FILE: &str = ".tagsearch.toml";

/// What to show when no keywords are given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQueryAction {
    /// List every tag
    #[default]
    List,
    /// List every file
    Files,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortSetting {
    #[default]
    Alpha,
    Frequency,
}

impl From<SortSetting> for SortMode {
    fn from(setting: SortSetting) -> Self {
        match setting {
            SortSetting::Alpha => SortMode::Alpha,
            SortSetting::Frequency => SortMode::Frequency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extensions to scan, without the leading dot
    pub extensions: Vec<String>,
    pub empty_query: EmptyQueryAction,
    pub sort: SortSetting,
    /// Print the untagged-file count before an implicit tag listing
    pub untagged_hint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: vec!["md".to_string(), "txt".to_string(), "org".to_string()],
            empty_query: EmptyQueryAction::List,
            sort: SortSetting::Alpha,
            untagged_hint: true,
        }
    }
}

impl Config {
    /// Load .tagsearch.toml from the given directory, or defaults if absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Ok(Config::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Load an explicitly named config file, which must exist
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| {
            TagsearchError::Config(format!(
                "Failed to read {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Self::parse(&contents).map_err(|e| {
            TagsearchError::Config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.extensions = config
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Ok(config)
    }
}
