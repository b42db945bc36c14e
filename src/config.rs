//! Application configuration loaded from environment variables.

use serde::{Deserialize, Deserializer};

/// HTTP port used when `PORT` is unset or not a valid integer.
const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Google Credentials ===
    /// Google API credential for the publishing integration.
    /// Nothing consumes it yet.
    #[serde(default)]
    pub google_api_key: String,

    /// Google Cloud project identifier. Also unused until the publishing
    /// integration lands.
    #[serde(default)]
    pub project_id: String,

    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A `PORT` value that does not parse as an integer resolves to the default
/// port instead of failing startup.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(DEFAULT_PORT))
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn port_defaults_to_3000() {
        let config = from_vars(&[]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn port_reads_env_value() {
        let config = from_vars(&[("PORT", "4000")]);
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = from_vars(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn credential_fields_default_to_empty() {
        let config = from_vars(&[]);
        assert!(config.google_api_key.is_empty());
        assert!(config.project_id.is_empty());
    }

    #[test]
    fn credential_fields_read_from_env() {
        let config = from_vars(&[("GOOGLE_API_KEY", "x"), ("PROJECT_ID", "y")]);
        assert_eq!(config.google_api_key, "x");
        assert_eq!(config.project_id, "y");
    }

    #[test]
    fn log_level_defaults_to_info() {
        let config = from_vars(&[]);
        assert_eq!(config.rust_log, "info");
    }
}
