use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TOKEN_COOKIE_NAME: &str = "atkn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub token_cookie_name: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_cookie_name: DEFAULT_TOKEN_COOKIE_NAME.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("TOKEN_COOKIE_NAME"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        token_cookie_name: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            token_cookie_name: token_cookie_name
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_cookie_name),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Builds an absolute API URL from a path such as `/auth`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Level passed to wasm-logger; `Off` when logging is disabled
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.token_cookie_name, "atkn");
    }

    #[test]
    fn api_url_trailing_slash_is_dropped() {
        let config = AppConfig::from_values(Some("https://api.example.org/"), None, None, None);
        assert_eq!(config.endpoint("/auth"), "https://api.example.org/auth");
        assert_eq!(config.endpoint("search"), "https://api.example.org/search");
    }

    #[test]
    fn unparsable_flags_use_defaults() {
        let config = AppConfig::from_values(None, Some(""), Some("maybe"), Some("DEBUG"));
        assert_eq!(config.token_cookie_name, "atkn");
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
