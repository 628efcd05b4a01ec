use std::fs;
use std::path::{Path, PathBuf};

use directories::UserDirs;

use super::Config;
use crate::error::ConfigError;

impl Config {
    /// `~/.reportreel/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        Ok(home.join(".reportreel").join("config.toml"))
    }

    /// Loads the default config file, writing one with defaults on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        Self::load_or_init_at(&Self::default_path()?)
    }

    /// Like [`Config::load_or_init`] but at an explicit location. Environment
    /// overrides are applied and the result is validated.
    pub fn load_or_init_at(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            let mut config: Config =
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
            config.config_path = path.to_path_buf();
            tracing::debug!(path = %path.display(), "loaded config");
            config
        } else {
            let config = Self {
                config_path: path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %path.display(), "wrote default config");
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let toml_str =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(&self.config_path, toml_str)?;
        Ok(())
    }
}
