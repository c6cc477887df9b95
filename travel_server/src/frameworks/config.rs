use crate::interface_adapters::clients::AmadeusCredentials;
use crate::use_cases::FALLBACK_TOKEN_TTL_SECONDS;
use std::{env, fmt, time::Duration};
use url::Url;

// Runtime/server configuration read from the environment.

const DEFAULT_AMADEUS_BASE_URL: &str = "https://test.api.amadeus.com";

pub fn http_port() -> u16 {
    env::var("TRAVEL_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn amadeus_base_url() -> Result<String, ConfigError> {
    let raw = env::var("AMADEUS_BASE_URL").unwrap_or_else(|_| DEFAULT_AMADEUS_BASE_URL.to_string());
    parse_base_url("AMADEUS_BASE_URL", &raw)
}

pub fn amadeus_credentials() -> Result<AmadeusCredentials, ConfigError> {
    Ok(AmadeusCredentials {
        client_id: required_var("AMADEUS_CLIENT_ID")?,
        client_secret: required_var("AMADEUS_CLIENT_SECRET")?,
    })
}

pub fn amadeus_timeout() -> Duration {
    let millis = env::var("AMADEUS_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

// LOG_FORMAT=json switches the subscriber to structured output.
pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

pub fn token_fallback_ttl_seconds() -> u64 {
    env::var("AMADEUS_TOKEN_FALLBACK_TTL_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(FALLBACK_TOKEN_TTL_SECONDS)
}

// Everything needed to build the application state.
#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub amadeus_base_url: String,
    pub amadeus_credentials: AmadeusCredentials,
    pub amadeus_timeout: Duration,
    pub token_fallback_ttl_seconds: u64,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            amadeus_base_url: amadeus_base_url()?,
            amadeus_credentials: amadeus_credentials()?,
            amadeus_timeout: amadeus_timeout(),
            token_fallback_ttl_seconds: token_fallback_ttl_seconds(),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    InvalidUrl { var: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{var} must be set"),
            ConfigError::InvalidUrl { var, reason } => {
                write!(f, "{var} is not a valid url: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

// Accept only absolute http(s) urls; the trailing slash is dropped so paths can be appended.
pub fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        var,
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            var,
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
