//! Environment-driven server settings.
//!
//! `.env` is loaded by `main` before [`SiteConfig::from_env`] runs, so values
//! there behave exactly like exported variables. Leptos reads its own
//! `LEPTOS_*` variables separately.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },
    #[error("{key} must be a port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be a boolean (1/0, true/false, yes/no, on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Gzip responses.
    pub compression: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, compression: true }
    }
}

impl SiteConfig {
    /// Read `HOST`, `PORT` and `HTTP_COMPRESSION` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed. Unset or
    /// blank variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = match non_blank(lookup("HOST")) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidHost { key: "HOST", value: raw })?,
            None => defaults.host,
        };
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { key: "PORT", value: raw })?,
            None => defaults.port,
        };
        let compression = match non_blank(lookup("HTTP_COMPRESSION")) {
            Some(raw) => parse_bool(&raw)
                .ok_or(ConfigError::InvalidBool { key: "HTTP_COMPRESSION", value: raw })?,
            None => defaults.compression,
        };
        Ok(Self { host, port, compression })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
