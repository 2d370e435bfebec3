//! Counter configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                    | Default                                     |
//! |-----------------------------|---------------------------------------------|
//! | `API_KEY`                   | unset (assistant answers "not configured")  |
//! | `GEMINI_API_KEY`            | fallback for `API_KEY`                      |
//! | `OFFICINE_MODEL`            | `gemini-2.5-flash`                          |
//! | `OFFICINE_API_BASE`         | `https://generativelanguage.googleapis.com` |
//! | `OFFICINE_DELIVERY_TICK_MS` | `100`                                       |

use std::env;
use std::time::Duration;

use officine_assistant::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use officine_assistant::GeminiConfig;

/// Counter configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini credential (optional)
    pub api_key: Option<String>,

    /// Model name for generateContent
    pub model: String,

    /// API base URL (overridable for local testing)
    pub api_base: String,

    /// Delivery animation step interval
    pub delivery_tick: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let delivery_tick_ms: u64 = non_blank("OFFICINE_DELIVERY_TICK_MS")
            .unwrap_or_else(|| "100".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("OFFICINE_DELIVERY_TICK_MS".to_string()))?;

        if delivery_tick_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "OFFICINE_DELIVERY_TICK_MS".to_string(),
            ));
        }

        Ok(AppConfig {
            api_key: non_blank("API_KEY").or_else(|| non_blank("GEMINI_API_KEY")),
            model: non_blank("OFFICINE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_blank("OFFICINE_API_BASE")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            delivery_tick: Duration::from_millis(delivery_tick_ms),
        })
    }

    /// Connection settings for the report assistant.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig::new(self.api_key.clone())
            .with_base_url(self.api_base.clone())
            .with_model(self.model.clone())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_BASE_URL);
        assert_eq!(config.delivery_tick, Duration::from_millis(100));
    }

    #[test]
    fn test_api_key_fallback() {
        let config = load(&[("GEMINI_API_KEY", "g-key")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("g-key"));

        let config = load(&[("API_KEY", "a-key"), ("GEMINI_API_KEY", "g-key")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("a-key"));

        let config = load(&[("API_KEY", "  ")]).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_tick() {
        assert!(matches!(
            load(&[("OFFICINE_DELIVERY_TICK_MS", "fast")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(load(&[("OFFICINE_DELIVERY_TICK_MS", "0")]).is_err());
        assert_eq!(
            load(&[("OFFICINE_DELIVERY_TICK_MS", "250")])
                .unwrap()
                .delivery_tick,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_gemini_config() {
        let config = load(&[("API_KEY", "k"), ("OFFICINE_MODEL", "gemini-pro")]).unwrap();
        let gemini = config.gemini_config();
        assert_eq!(gemini.api_key.as_deref(), Some("k"));
        assert_eq!(gemini.model, "gemini-pro");
    }
}
