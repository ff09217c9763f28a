use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::field_kind::FieldKindRules,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub field_kinds: FieldKindRules,
}

impl Default for Config {
    /// The embedded defaults. An unreadable embedded file leaves every
    /// section empty except the built-in kind rules.
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("{e}");
            Self {
                config: AppConfig::default(),
                keybindings: keybindings::KeyBindings::default(),
                styles: styles::Styles::default(),
                field_kinds: FieldKindRules::default(),
            }
        })
    }
}

impl Config {
    /// Load the user configuration from the config directory and fill the
    /// gaps with the embedded defaults. No user file is required.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(&utils::get_config_dir())
    }

    /// The embedded defaults alone
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.field_kinds.is_empty() {
            cfg.field_kinds = default_config.field_kinds;
        }

        Ok(cfg)
    }
}
