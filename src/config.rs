//! Relay Configuration
//!
//! Loaded once at startup and shared read-only across requests. The only
//! required value is the upstream credential, and even that may be missing:
//! the server still starts and `/solve_ode` reports the problem per request.

use serde::Serialize;

/// Credential environment variable
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize)]
pub struct RelayConfig {
    /// Bearer credential for the upstream API. `None` when unset or empty.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Full chat-completion endpoint URL
    pub api_url: String,
    pub model: String,
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl RelayConfig {
    /// Read `DEEPSEEK_API_KEY`, `DEEPSEEK_API_URL`, `DEEPSEEK_MODEL`,
    /// `RELAY_HOST` and `RELAY_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: normalize_api_key(std::env::var(API_KEY_ENV).ok()),
            api_url: std::env::var("DEEPSEEK_API_URL").unwrap_or(defaults.api_url),
            model: std::env::var("DEEPSEEK_MODEL").unwrap_or(defaults.model),
            host: std::env::var("RELAY_HOST").unwrap_or(defaults.host),
            port: std::env::var("RELAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = normalize_api_key(api_key);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Empty or whitespace-only keys count as absent.
fn normalize_api_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        API_KEY_ENV,
        "DEEPSEEK_API_URL",
        "DEEPSEEK_MODEL",
        "RELAY_HOST",
        "RELAY_PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_with_api_key_normalizes() {
        assert!(!RelayConfig::default().with_api_key(None).has_api_key());
        assert!(!RelayConfig::default()
            .with_api_key(Some("   ".to_string()))
            .has_api_key());

        let config = RelayConfig::default().with_api_key(Some(" sk-123 ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("sk-123"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = RelayConfig::default().with_api_key(Some("sk-secret".to_string()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("deepseek-chat"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = RelayConfig::from_env();
        assert!(!config.has_api_key());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "sk-env");
        std::env::set_var("DEEPSEEK_API_URL", "http://localhost:9000/chat");
        std::env::set_var("DEEPSEEK_MODEL", "deepseek-reasoner");
        std::env::set_var("RELAY_PORT", "5000");

        let config = RelayConfig::from_env();
        clear_env();

        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.api_url, "http://localhost:9000/chat");
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_and_bad_port() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "");
        std::env::set_var("RELAY_PORT", "not-a-port");

        let config = RelayConfig::from_env();
        clear_env();

        assert!(!config.has_api_key());
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
