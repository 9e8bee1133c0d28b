//! Configuration for the Slack token and destination channel
//!
//! Loads conf.json from the directory named by LAX_HOME.
//! Environment variables take precedence over file values.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name inside $LAX_HOME
pub const CONFIG_FILE: &str = "conf.json";

/// On-disk config format (field names kept from the original conf.json)
#[derive(Debug, Default, Deserialize)]
struct ConfFile {
    #[serde(rename = "SlackToken", default)]
    slack_token: Option<String>,
    #[serde(rename = "ChannelId", default)]
    channel_id: Option<String>,
}

/// Main configuration struct
///
/// Constructed once at startup and passed down; never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub slack_token: String,
    pub channel_id: String,
}

impl Config {
    /// Load configuration from $LAX_HOME/conf.json and the environment.
    ///
    /// SLACK_TOKEN and SLACK_CHANNEL_ID override file values; with both set
    /// the file may be absent entirely. A present but unparsable file is an
    /// error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        Self::load_dotenv();

        let file = match Self::config_path() {
            Some(path) if path.exists() => Self::read_conf_file(&path)?,
            _ => ConfFile::default(),
        };

        Self::resolve(file)
    }

    /// Load configuration from a specific conf.json file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_dotenv();
        let file = Self::read_conf_file(path.as_ref())?;
        Self::resolve(file)
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    fn config_path() -> Option<PathBuf> {
        std::env::var_os("LAX_HOME").map(|home| Path::new(&home).join(CONFIG_FILE))
    }

    fn read_conf_file(path: &Path) -> Result<ConfFile> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Resolve a value: env var wins over the config file
    fn resolve_env(value: Option<String>, env_key: &str) -> String {
        if let Ok(env_val) = std::env::var(env_key) {
            if !env_val.is_empty() {
                return env_val;
            }
        }
        value.unwrap_or_default()
    }

    fn resolve(file: ConfFile) -> Result<Self> {
        let slack_token = Self::resolve_env(file.slack_token, "SLACK_TOKEN");
        let channel_id = Self::resolve_env(file.channel_id, "SLACK_CHANNEL_ID");

        if slack_token.is_empty() {
            return Err(Error::Config(
                "SlackToken is not set (conf.json or SLACK_TOKEN)".to_string(),
            ));
        }
        if channel_id.is_empty() {
            return Err(Error::Config(
                "ChannelId is not set (conf.json or SLACK_CHANNEL_ID)".to_string(),
            ));
        }

        Ok(Self {
            slack_token,
            channel_id,
        })
    }
}
