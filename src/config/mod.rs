//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the screen flow, restart and reaction policies, the tip pool,
//! quick-add amounts, and theme preferences.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::hydration::{default_tips, ReactionPolicy};
use crate::state::{RestartPolicy, ScreenFlow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/sip-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub flow: ScreenFlow,
    pub restart: RestartPolicy,
    pub reaction: ReactionPolicy,
    pub theme: String,
    pub tips: Vec<String>,
    pub quick_amounts: Vec<u32>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub flow: ScreenFlow,
    #[serde(default)]
    pub restart: RestartPolicy,
    #[serde(default)]
    pub reaction: ReactionPolicy,
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default = "default_tips")]
    pub tips: Vec<String>,
    #[serde(default = "default_quick_amounts")]
    pub quick_amounts: Vec<u32>,
}

fn default_theme_name() -> String {
    "deep-sea".to_string()
}

/// Quick-add amounts offered on the intake screen, in millilitres.
///
pub fn default_quick_amounts() -> Vec<u32> {
    vec![250, 330, 500, 750]
}

impl Config {
    /// Return a new instance holding the built-in defaults.
    ///
    pub fn new() -> Config {
        Config {
            flow: ScreenFlow::default(),
            restart: RestartPolicy::default(),
            reaction: ReactionPolicy::default(),
            theme: default_theme_name(),
            tips: default_tips(),
            quick_amounts: default_quick_amounts(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; it is
    /// created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.flow = data.flow;
            self.restart = data.restart;
            self.reaction = data.reaction;
            self.theme = data.theme;
            self.tips = data.tips;
            self.quick_amounts = data.quick_amounts;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            flow: self.flow,
            restart: self.restart,
            reaction: self.reaction,
            theme: self.theme.clone(),
            tips: self.tips.clone(),
            quick_amounts: self.quick_amounts.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_spec_fills_missing_fields_with_defaults() {
        let data: FileSpec = serde_yaml::from_str("theme: arctic\n").unwrap();
        assert_eq!(data.flow, ScreenFlow::Full);
        assert_eq!(data.restart, RestartPolicy::KeepGoal);
        assert_eq!(data.reaction, ReactionPolicy::Classic);
        assert_eq!(data.theme, "arctic");
        assert_eq!(data.quick_amounts, vec![250, 330, 500, 750]);
        assert!(!data.tips.is_empty());
    }

    #[test]
    fn test_file_spec_parses_all_fields() {
        let contents = "\
flow: compact
restart: clear-all
reaction: motivation
theme: deep-sea
tips:
  - Keep a bottle nearby.
quick_amounts:
  - 200
  - 400
";
        let data: FileSpec = serde_yaml::from_str(contents).unwrap();
        assert_eq!(data.flow, ScreenFlow::Compact);
        assert_eq!(data.restart, RestartPolicy::ClearAll);
        assert_eq!(data.reaction, ReactionPolicy::Motivation);
        assert_eq!(data.tips, vec!["Keep a bottle nearby.".to_string()]);
        assert_eq!(data.quick_amounts, vec![200, 400]);
    }

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.flow, ScreenFlow::Full);
        assert_eq!(config.theme, "deep-sea");
        assert_eq!(config.quick_amounts.len(), 4);
    }
}
