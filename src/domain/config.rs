use crate::cli::args::OutputFormat;
use serde::{Deserialize, Serialize};

/// argdemo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Output format used when `--output` is not given
    #[serde(default)]
    pub default_output: Option<OutputFormat>,
}

/// One configuration file; unset keys fall through to the layer below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigLayer {
    pub log_level: Option<String>,
    pub default_output: Option<OutputFormat>,
}

impl DemoConfig {
    /// Apply the keys set in `layer` on top of this configuration
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(log_level) = layer.log_level {
            self.log_level = log_level;
        }
        if layer.default_output.is_some() {
            self.default_output = layer.default_output;
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_output: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_output, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DemoConfig = toml::from_str("default_output = \"json\"").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_only_set_keys() {
        let mut config = DemoConfig {
            log_level: "warn".to_string(),
            default_output: Some(OutputFormat::Table),
        };
        config.merge(ConfigLayer {
            log_level: Some("debug".to_string()),
            default_output: None,
        });

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_output, Some(OutputFormat::Table));
    }
}
