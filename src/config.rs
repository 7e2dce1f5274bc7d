use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// Completion service settings. Built once at startup (file + environment)
/// and handed to the client constructor; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            model: default_model(),
            api_key: String::new(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse TOML config: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }

    /// Load from an optional config file (TOML tried first, then YAML), then
    /// apply environment overrides. With no file: defaults + environment.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file: {}", e))?;
                if let Ok(config) = Self::from_toml(&content) {
                    config
                } else if let Ok(config) = Self::from_yaml(&content) {
                    config
                } else {
                    return Err("Failed to parse config file as TOML or YAML".to_string());
                }
            }
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("CHARTSMITH_BASE_URL") {
            if !value.is_empty() {
                self.base_url = value;
            }
        }
        if let Ok(value) = std::env::var("CHARTSMITH_MODEL") {
            if !value.is_empty() {
                self.model = value;
            }
        }
        let key = std::env::var("CHARTSMITH_API_KEY").or_else(|_| std::env::var("GROQ_API_KEY"));
        if let Ok(value) = key {
            if !value.is_empty() {
                self.api_key = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_point_at_groq() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert!(!config.model.is_empty());
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = Config::from_toml("api_key = \"secret\"").expect("parses");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, Config::default().base_url);
        assert_eq!(config.model, Config::default().model);
    }

    #[test]
    fn full_toml_round_trips() {
        let config = Config::from_toml(
            "base_url = \"http://localhost:11434/v1\"\nmodel = \"llama3\"\napi_key = \"k\"",
        )
        .expect("parses");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn yaml_is_accepted_too() {
        let config = Config::from_yaml("model: mixtral\napi_key: k2").expect("parses");
        assert_eq!(config.model, "mixtral");
        assert_eq!(config.api_key, "k2");
    }

    #[test]
    fn garbage_is_rejected_by_both_parsers() {
        assert!(Config::from_toml(":: not toml ::").is_err());
        assert!(Config::from_yaml("{ not: [valid").is_err());
    }
}
