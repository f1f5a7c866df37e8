use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::ranking::RankingConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub ranking: RankingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            ranking: load_ranking()?,
        })
    }
}

fn load_ranking() -> Result<RankingConfig, ConfigError> {
    let defaults = RankingConfig::default();

    let min_compatibility_score =
        env_setting("RANKING_MIN_COMPATIBILITY", defaults.min_compatibility_score)?;
    if min_compatibility_score > 100 {
        return Err(ConfigError::InvalidRankingSetting {
            key: "RANKING_MIN_COMPATIBILITY",
            value: min_compatibility_score.to_string(),
        });
    }

    let max_recommendations =
        env_setting("RANKING_MAX_RECOMMENDATIONS", defaults.max_recommendations)?;

    let budget_flexibility =
        env_setting("RANKING_BUDGET_FLEXIBILITY", defaults.budget_flexibility)?;
    if !(budget_flexibility.is_finite() && budget_flexibility > 0.0) {
        return Err(ConfigError::InvalidRankingSetting {
            key: "RANKING_BUDGET_FLEXIBILITY",
            value: budget_flexibility.to_string(),
        });
    }

    Ok(RankingConfig {
        min_compatibility_score,
        max_recommendations,
        budget_flexibility,
        ..defaults
    })
}

fn env_setting<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidRankingSetting { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRankingSetting { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRankingSetting { key, value } => {
                write!(f, "{key} has an unusable value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidRankingSetting { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "RANKING_MIN_COMPATIBILITY",
            "RANKING_MAX_RECOMMENDATIONS",
            "RANKING_BUDGET_FLEXIBILITY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.ranking, RankingConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn ranking_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKING_MIN_COMPATIBILITY", "75");
        env::set_var("RANKING_MAX_RECOMMENDATIONS", "5");
        env::set_var("RANKING_BUDGET_FLEXIBILITY", "0.85");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.ranking.min_compatibility_score, 75);
        assert_eq!(config.ranking.max_recommendations, 5);
        assert!((config.ranking.budget_flexibility - 0.85).abs() < f64::EPSILON);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_compatibility_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKING_MIN_COMPATIBILITY", "140");
        let err = AppConfig::load().expect_err("threshold above 100 rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidRankingSetting {
                key: "RANKING_MIN_COMPATIBILITY",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_flexibility() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKING_BUDGET_FLEXIBILITY", "lots");
        let err = AppConfig::load().expect_err("non-numeric flexibility rejected");
        assert!(err.to_string().contains("RANKING_BUDGET_FLEXIBILITY"));
        reset_env();
    }
}
