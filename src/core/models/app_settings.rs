use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::global_constants;

static CURRENT_SETTINGS: OnceLock<AppSettings> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub image_hosting_api_url: String,
    pub image_hosting_api_key: String,
    #[serde(default)]
    pub image_expiration_seconds: Option<u64>,
    #[serde(default)]
    pub image_store_directory: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            image_hosting_api_url: global_constants::IMGBB_API_URL.to_string(),
            image_hosting_api_key: String::new(),
            image_expiration_seconds: None,
            image_store_directory: None,
        }
    }
}

impl AppSettings {
    /// Loads settings on first call; later calls return the same value.
    pub fn initialize() -> anyhow::Result<&'static AppSettings> {
        if let Some(settings) = Self::current() {
            return Ok(settings);
        }

        let loaded = Self::load()?;
        Ok(CURRENT_SETTINGS.get_or_init(|| loaded))
    }

    pub fn current() -> Option<&'static AppSettings> {
        CURRENT_SETTINGS.get()
    }

    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        let api_key_override = std::env::var(global_constants::ENV_API_KEY).ok();

        Self::load_from(&settings_path, api_key_override)
    }

    fn load_from(settings_path: &Path, api_key_override: Option<String>) -> anyhow::Result<Self> {
        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(settings_path)?;
            let settings: AppSettings = serde_json::from_str(&contents)?;
            log::info!(
                "{} Loaded settings from {:?}",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            settings
        } else {
            log::info!(
                "{} No settings file found, using defaults",
                global_constants::LOG_TAG_SETTINGS
            );
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            default_settings
        };

        if let Some(api_key) = api_key_override.filter(|key| !key.trim().is_empty()) {
            log::debug!(
                "{} Using API key from {}",
                global_constants::LOG_TAG_SETTINGS,
                global_constants::ENV_API_KEY
            );
            settings.image_hosting_api_key = api_key;
        }

        if settings.image_hosting_api_key.is_empty() {
            log::warn!(
                "{} No image hosting API key configured; uploads will be rejected",
                global_constants::LOG_TAG_SETTINGS
            );
        }

        log::debug!(
            "{} Image hosting URL: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.image_hosting_api_url
        );

        Ok(settings)
    }

    fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
