use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PLUGIN_URL: &str = "plugin://service.subtitles.addic7ed/";
pub const DEFAULT_SITE_URL: &str = "https://www.addic7ed.com";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    use_filename: Option<bool>,
    plugin_url: Option<String>,
    site_url: Option<String>,
    profile_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Parse the filename even when library metadata is available.
    pub use_filename: bool,
    pub plugin_url: String,
    pub site_url: String,
    pub profile_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();
        let file = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?
        } else {
            ConfigFile::default()
        };

        let mut settings = Self::from_file(file, get_config_dir_path());
        settings.apply_env(|key| env::var(key).ok());
        Ok(settings)
    }

    fn from_file(file: ConfigFile, default_profile: PathBuf) -> Self {
        Self {
            use_filename: file.use_filename.unwrap_or(false),
            plugin_url: file
                .plugin_url
                .unwrap_or_else(|| DEFAULT_PLUGIN_URL.to_string()),
            site_url: file.site_url.unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            profile_dir: file.profile_dir.unwrap_or(default_profile),
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(value) = var("ADDIC7ED_USE_FILENAME") {
            self.use_filename = matches!(value.trim(), "1" | "true" | "yes");
        }
        if let Some(value) = var("ADDIC7ED_SITE_URL") {
            self.site_url = value;
        }
    }

    /// Where downloads are staged before the host picks them up.
    pub fn temp_dir(&self) -> PathBuf {
        self.profile_dir.join("temp")
    }
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("addic7ed-subs"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

pub fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
