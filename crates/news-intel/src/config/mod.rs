use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime settings for the report service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Reads the process environment after applying any `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let dataset_path = lookup("NEWS_DATASET_PATH")
            .map(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Err(ConfigError::EmptyDatasetPath)
                } else {
                    Ok(PathBuf::from(trimmed))
                }
            })
            .transpose()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            intelligence: IntelligenceConfig { dataset_path },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` resolves to the IPv4 loopback; anything else must be a literal address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Article sources available to the report builder.
///
/// The scenario source is always present; the dataset source is only wired
/// when a dataset path is configured.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceConfig {
    pub dataset_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    EmptyDatasetPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "APP_PORT '{value}' is not a port number")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "APP_HOST '{value}' is not an IP address or localhost")
            }
            ConfigError::EmptyDatasetPath => write!(f, "NEWS_DATASET_PATH is set but empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidPort { .. } | ConfigError::EmptyDatasetPath => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.intelligence.dataset_path.is_none());
    }

    #[test]
    fn localhost_binds_loopback() {
        let config = config_from(&[("APP_HOST", "LocalHost"), ("APP_PORT", "8080")])
            .expect("config");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn hostnames_other_than_localhost_are_rejected() {
        let config = config_from(&[("APP_HOST", "news.internal")]).expect("config");
        let error = config.server.socket_addr().expect_err("not an address");
        assert_eq!(
            error.to_string(),
            "APP_HOST 'news.internal' is not an IP address or localhost"
        );
    }

    #[test]
    fn rejects_non_numeric_port() {
        let error = config_from(&[("APP_PORT", "eighty")]).expect_err("port must be numeric");
        assert!(matches!(error, ConfigError::InvalidPort { ref value } if value == "eighty"));
    }

    #[test]
    fn dataset_path_is_trimmed() {
        let config = config_from(&[("APP_ENV", "ci"), ("NEWS_DATASET_PATH", " data/news.csv ")])
            .expect("config");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.intelligence.dataset_path,
            Some(PathBuf::from("data/news.csv"))
        );
    }

    #[test]
    fn blank_dataset_path_is_rejected() {
        let error = config_from(&[("NEWS_DATASET_PATH", "   ")]).expect_err("blank path");
        assert!(matches!(error, ConfigError::EmptyDatasetPath));
    }
}
