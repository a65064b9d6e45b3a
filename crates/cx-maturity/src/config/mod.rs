use reqwest::Url;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

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
    pub submission: SubmissionConfig,
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
            submission: SubmissionConfig::from_env()?,
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
}

/// Where completed quiz payloads are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// POST straight to the webhook.
    Direct,
    /// POST to the same-origin relay, which re-issues the call.
    Proxied,
}

impl DeliveryMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "proxied" | "proxy" | "relay" => Ok(Self::Proxied),
            other => Err(ConfigError::InvalidDeliveryMode(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMode::Direct => "direct",
            DeliveryMode::Proxied => "proxied",
        }
    }
}

/// Webhook endpoint and delivery settings.
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    pub webhook_url: Url,
    pub mode: DeliveryMode,
    pub relay_url: Option<Url>,
    pub timeout: Option<Duration>,
}

impl SubmissionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = env::var("CX_WEBHOOK_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingWebhookUrl)?;
        let webhook_url = parse_url("CX_WEBHOOK_URL", &webhook_url)?;

        let mode = match env::var("CX_SUBMISSION_MODE") {
            Ok(value) => DeliveryMode::parse(&value)?,
            Err(_) => DeliveryMode::Direct,
        };

        let relay_url = env::var("CX_RELAY_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_url("CX_RELAY_URL", &value))
            .transpose()?;
        if mode == DeliveryMode::Proxied && relay_url.is_none() {
            return Err(ConfigError::MissingRelayUrl);
        }

        let timeout = env::var("CX_WEBHOOK_TIMEOUT_SECS")
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or(ConfigError::InvalidTimeout(raw))
            })
            .transpose()?;

        Ok(Self {
            webhook_url,
            mode,
            relay_url,
            timeout,
        })
    }

    /// The URL the client-side forwarder posts to for the configured mode.
    pub fn target_url(&self) -> &Url {
        match (self.mode, &self.relay_url) {
            (DeliveryMode::Proxied, Some(relay)) => relay,
            _ => &self.webhook_url,
        }
    }
}

fn parse_url(variable: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidUrl {
        variable,
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidUrl {
            variable,
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingWebhookUrl,
    InvalidUrl {
        variable: &'static str,
        reason: String,
    },
    InvalidDeliveryMode(String),
    MissingRelayUrl,
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingWebhookUrl => write!(f, "CX_WEBHOOK_URL must be set"),
            ConfigError::InvalidUrl { variable, reason } => {
                write!(f, "{variable} is not a usable http(s) URL: {reason}")
            }
            ConfigError::InvalidDeliveryMode(value) => {
                write!(f, "CX_SUBMISSION_MODE must be 'direct' or 'proxied', got '{value}'")
            }
            ConfigError::MissingRelayUrl => {
                write!(f, "CX_RELAY_URL must be set when CX_SUBMISSION_MODE=proxied")
            }
            ConfigError::InvalidTimeout(value) => write!(
                f,
                "CX_WEBHOOK_TIMEOUT_SECS must be a positive number of seconds, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
