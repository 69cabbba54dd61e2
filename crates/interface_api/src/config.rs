//! API configuration

use serde::Deserialize;

use core_kernel::Timezone;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Artificial delay before a demo submission is answered
    pub demo_latency_ms: u64,
    /// Probability in `[0, 1]` that a demo submission fails
    pub demo_failure_rate: f64,
    /// Timezone used to render timestamps
    pub display_timezone: Timezone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            demo_latency_ms: 2000,
            demo_failure_rate: 0.0,
            display_timezone: Timezone::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their [`Default`] value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("demo_latency_ms", defaults.demo_latency_ms)?
            .set_default("demo_failure_rate", defaults.demo_failure_rate)?
            .set_default("display_timezone", defaults.display_timezone.0.name())?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.demo_latency_ms, 2000);
        assert_eq!(config.display_timezone.0.name(), "Asia/Kathmandu");
    }
}
