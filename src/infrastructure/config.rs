use crate::domain::{
    config::{ConfigLayer, DemoConfig},
    error::{DemoError, DemoResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        Self {
            global_config_path: Self::get_global_config_path(),
            project_config_path: std::env::current_dir()
                .ok()
                .and_then(|dir| Self::find_project_config_path(&dir)),
        }
    }

    /// Manager reading from explicit locations
    pub fn with_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            global_config_path: global,
            project_config_path: project,
        }
    }

    /// Load configuration, project file over global file over defaults
    pub fn load_config(&self) -> DemoResult<DemoConfig> {
        let mut config = DemoConfig::default();

        for path in [&self.global_config_path, &self.project_config_path]
            .into_iter()
            .flatten()
        {
            if path.exists() {
                config.merge(Self::read_layer(path)?);
            }
        }

        Ok(config)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> DemoResult<DemoConfig> {
        let mut config = DemoConfig::default();
        config.merge(Self::read_layer(path)?);
        Ok(config)
    }

    fn read_layer(path: &Path) -> DemoResult<ConfigLayer> {
        let content = fs::read_to_string(path).map_err(|e| DemoError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| DemoError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("argdemo").join("config.toml"))
    }

    /// Find project configuration path by walking up from `start`
    pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(".argdemo").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
