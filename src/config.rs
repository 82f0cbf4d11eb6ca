//! CLI Configuration

use record_forms::{FormsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| FormsError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FormsError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "api_url" => self.api_url = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .map_err(|_| FormsError::Config(format!("timeout_secs must be a number: {}", value)))?;
                self.timeout_secs = Some(secs);
            }
            "log_level" => self.log_level = Some(value),
            "default_format" => self.default_format = Some(value),
            _ => return Err(FormsError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "api_url" => self.api_url.clone(),
            "timeout_secs" => self.timeout_secs.map(|s| s.to_string()),
            "log_level" => self.log_level.clone(),
            "default_format" => self.default_format.clone(),
            _ => return Err(FormsError::Config(format!("Unknown config key: {}", key))),
        };
        Ok(value)
    }

    pub const KEYS: [&'static str; 4] = ["api_url", "timeout_secs", "log_level", "default_format"];

    fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FormsError::Config("Cannot find home directory".into()))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".record-forms").join(filename))
    }
}
