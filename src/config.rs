use crate::error::{Result, TransformError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

fn default_input_files() -> Vec<String> {
    vec![
        "data/cleaned_data/cleaned_data_1.csv".to_string(),
        "data/cleaned_data/cleaned_data_2.csv".to_string(),
    ]
}

fn default_output_directory() -> String {
    "data/data_outputs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cleaned incident CSV files, concatenated in order into one table.
    #[serde(default = "default_input_files")]
    pub input_files: Vec<String>,
    /// Base path the five output tables are written under.
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: default_input_files(),
            output_directory: default_output_directory(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to the
    /// fixed default paths when no config file is present.
    pub fn load() -> Result<Self> {
        if !Path::new(CONFIG_PATH).exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(CONFIG_PATH).map_err(|e| {
            TransformError::Config(format!(
                "Failed to read config file '{}': {}",
                CONFIG_PATH, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
