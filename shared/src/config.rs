pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Runtime settings for the tracker front end
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub currency_code: String,
    pub currency_locale: String,
    pub currency_symbol: String,
    pub enable_debug_logging: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
            currency_code: "INR".to_string(),
            currency_locale: "en-IN".to_string(),
            currency_symbol: "₹".to_string(),
            enable_debug_logging: cfg!(debug_assertions),
        }
    }
}

impl TrackerConfig {
    /// Default config pointed at another backend. Blank values keep the default URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let mut config = Self::default();
        if !trimmed.is_empty() {
            config.api_base_url = trimmed.to_string();
        }
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.enable_debug_logging {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.currency_code, "INR");
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = TrackerConfig::with_base_url("https://api.example.com/v1/ ");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_with_blank_base_url_keeps_default() {
        let config = TrackerConfig::with_base_url("   ");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_log_level() {
        let mut config = TrackerConfig::default();
        config.enable_debug_logging = false;
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.enable_debug_logging = true;
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
