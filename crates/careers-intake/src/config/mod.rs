use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::workflows::careers::applications::{
    AttachmentLimit, OutcomePolicy, DEFAULT_MAX_ATTACHMENT_BYTES,
};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the site.
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

/// Top-level configuration for the careers site and its intake boundary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
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
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) if environment == AppEnvironment::Production => LogFormat::Json,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            intake: IntakeConfig::from_env()?,
        })
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
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(raw.to_string())),
        }
    }
}

/// Network boundary and form behavior for application intake.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub api_base_url: Url,
    pub submit_timeout: Duration,
    pub outcome_policy: OutcomePolicy,
    pub attachment_limit: AttachmentLimit,
    pub job_catalog_path: Option<PathBuf>,
}

impl IntakeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_base =
            env::var("APP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(&raw_base)?;

        let submit_timeout = match env::var("APP_SUBMIT_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout),
            },
            Err(_) => Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
        };

        let surface_failures = parse_flag("APP_SURFACE_SUBMISSION_FAILURES")?;
        let enforce_limit = parse_flag("APP_ENFORCE_ATTACHMENT_LIMIT")?;
        let max_bytes = match env::var("APP_MAX_ATTACHMENT_BYTES") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => return Err(ConfigError::InvalidAttachmentLimit),
            },
            Err(_) => DEFAULT_MAX_ATTACHMENT_BYTES,
        };

        let job_catalog_path = env::var("APP_JOB_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base_url,
            submit_timeout,
            outcome_policy: OutcomePolicy::from_flag(surface_failures),
            attachment_limit: AttachmentLimit {
                max_bytes,
                enforced: enforce_limit,
            },
            job_catalog_path,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_flag(name: &'static str) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { name }),
        },
        Err(_) => Ok(false),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidLogFormat(String),
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedScheme(String),
    InvalidTimeout,
    InvalidAttachmentLimit,
    InvalidFlag {
        name: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (found '{value}')")
            }
            ConfigError::InvalidBaseUrl { value, .. } => {
                write!(f, "APP_API_BASE_URL '{value}' is not an absolute URL")
            }
            ConfigError::UnsupportedScheme(scheme) => {
                write!(f, "APP_API_BASE_URL must use http or https (found '{scheme}')")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "APP_SUBMIT_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::InvalidAttachmentLimit => {
                write!(f, "APP_MAX_ATTACHMENT_BYTES must be a positive byte count")
            }
            ConfigError::InvalidFlag { name } => write!(f, "{name} must be true or false"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidBaseUrl { source, .. } => Some(source),
            _ => None,
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
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_FORMAT",
            "APP_API_BASE_URL",
            "APP_SUBMIT_TIMEOUT_SECS",
            "APP_SURFACE_SUBMISSION_FAILURES",
            "APP_ENFORCE_ATTACHMENT_LIMIT",
            "APP_MAX_ATTACHMENT_BYTES",
            "APP_JOB_CATALOG_PATH",
        ] {
            env::remove_var(name);
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
        assert_eq!(config.telemetry.format, LogFormat::Compact);
        assert_eq!(config.intake.api_base_url.as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(config.intake.submit_timeout, Duration::from_secs(30));
        assert_eq!(config.intake.outcome_policy, OutcomePolicy::AlwaysAcknowledge);
        assert!(!config.intake.attachment_limit.enforced);
        assert_eq!(config.intake.attachment_limit.max_bytes, 5 * 1024 * 1024);
        assert!(config.intake.job_catalog_path.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn production_defaults_to_json_logs() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn intake_overrides_are_applied() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_API_BASE_URL", "https://careers.example.com/api/");
        env::set_var("APP_SUBMIT_TIMEOUT_SECS", "5");
        env::set_var("APP_SURFACE_SUBMISSION_FAILURES", "true");
        env::set_var("APP_ENFORCE_ATTACHMENT_LIMIT", "yes");
        env::set_var("APP_MAX_ATTACHMENT_BYTES", "1024");
        env::set_var("APP_JOB_CATALOG_PATH", "/etc/wmsols/jobs.json");

        let config = AppConfig::load().expect("config loads");
        let intake = config.intake;
        assert_eq!(intake.api_base_url.host_str(), Some("careers.example.com"));
        assert_eq!(intake.submit_timeout, Duration::from_secs(5));
        assert_eq!(intake.outcome_policy, OutcomePolicy::SurfaceFailures);
        assert_eq!(
            intake.attachment_limit,
            AttachmentLimit {
                max_bytes: 1024,
                enforced: true
            }
        );
        assert_eq!(
            intake.job_catalog_path,
            Some(PathBuf::from("/etc/wmsols/jobs.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_invalid_intake_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        env::set_var("APP_API_BASE_URL", "not a url");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));

        env::set_var("APP_API_BASE_URL", "ftp://files.example.com");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
        env::remove_var("APP_API_BASE_URL");

        env::set_var("APP_SUBMIT_TIMEOUT_SECS", "0");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidTimeout)));
        env::remove_var("APP_SUBMIT_TIMEOUT_SECS");

        env::set_var("APP_SURFACE_SUBMISSION_FAILURES", "maybe");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidFlag {
                name: "APP_SURFACE_SUBMISSION_FAILURES"
            })
        ));
        reset_env();
    }
}
