//! Configuration management.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the
//! platform data directory resolved by [`DataStorage`]. A missing file
//! means defaults: local storage without a quota.
//!
//! ## Structure
//!
//! - **backend**: which task backend to compose at start-up (`local` or `remote`)
//! - **local**: options for the local key-value storage
//! - **remote**: connection settings for the remote record store
//!
//! Remote settings may also come from `DOLIST_REMOTE_URL` /
//! `DOLIST_REMOTE_KEY`; environment values win over the file.
//!
//! ```rust,no_run
//! use dolist::libs::config::{BackendKind, Config};
//!
//! let mut config = Config::read()?;
//! config.backend = BackendKind::Local;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::remote::RemoteConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used for routing in the wizard
    pub key: String,
    /// Display name shown to users
    pub name: String,
}

/// Task backend selected at composition time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Local,
    Remote,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Local => f.write_str("local"),
            BackendKind::Remote => f.write_str("remote"),
        }
    }
}

/// Local key-value storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LocalConfig {
    /// Largest value in bytes a single key may hold. `None` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

impl LocalConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "local".to_string(),
            name: "Local storage".to_string(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, or returns defaults when no
    /// file exists yet. A file that exists but does not parse is an error.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Storage quota for the local backend, if any.
    pub fn quota_bytes(&self) -> Option<usize> {
        self.local.as_ref().and_then(|local| local.quota_bytes)
    }

    /// Remote settings with environment overrides applied.
    pub fn remote_settings(&self) -> Option<RemoteConfig> {
        match &self.remote {
            Some(remote) => Some(remote.clone().with_env()),
            None => RemoteConfig::from_env(),
        }
    }

    /// Runs the interactive setup wizard, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![LocalConfig::module(), RemoteConfig::module()];
        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "local" => {
                    let default = config.local.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLocal);
                    let quota: usize = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptQuotaBytes.to_string())
                        .default(default.quota_bytes.unwrap_or(0))
                        .interact_text()?;
                    config.local = Some(LocalConfig {
                        quota_bytes: (quota > 0).then_some(quota),
                    });
                }
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                _ => {}
            }
        }

        let backends = [BackendKind::Local, BackendKind::Remote];
        let current = backends.iter().position(|b| *b == config.backend).unwrap_or(0);
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBackend.to_string())
            .items(&backends)
            .default(current)
            .interact()?;
        config.backend = backends[choice];

        Ok(config)
    }
}
