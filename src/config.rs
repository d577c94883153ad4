#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// How the stand-in `/chatbot` endpoint answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StubMode {
    /// Repeat the user's message back.
    #[default]
    Echo,
    /// Always answer with the fixed advice text.
    Fallback,
    /// Always answer `500` with an error body.
    Fail,
}

impl StubMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StubMode::Echo => "echo",
            StubMode::Fallback => "fallback",
            StubMode::Fail => "fail",
        }
    }
}

impl std::fmt::Display for StubMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StubMode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "echo" => Ok(StubMode::Echo),
            "fallback" => Ok(StubMode::Fallback),
            "fail" => Ok(StubMode::Fail),
            other => Err(ConfigError::UnknownStubMode { value: other.to_string() }),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST '{value}' is not an IP address")]
    InvalidHost { value: String },

    #[error("PORT '{value}' is not a valid port number")]
    InvalidPort { value: String },

    #[error("CHATBOT_STUB_MODE '{value}' is not one of echo, fallback, fail")]
    UnknownStubMode { value: String },
}

/// Settings of the development host, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub stub_mode: StubMode,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            stub_mode: StubMode::default(),
        }
    }
}

impl HostConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `CHATBOT_STUB_MODE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?;
        }
        if let Some(value) = get("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }
        if let Some(value) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(value.trim());
        }
        if let Some(value) = get("CHATBOT_STUB_MODE") {
            config.stub_mode = value.parse()?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
