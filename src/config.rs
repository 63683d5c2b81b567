//! Process configuration read from environment variables.
//!
//! | Variable | Default   | Meaning                                  |
//! |----------|-----------|------------------------------------------|
//! | `HOST`   | `0.0.0.0` | Interface to listen on                   |
//! | `PORT`   | `5000`    | TCP port                                 |
//! | `CORS`   | `true`    | Allow cross-origin requests from any site |
//! | `DEBUG`  | `true`    | Development mode: verbose logging        |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Result, ServerError};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: bool,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors: true,
            debug: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or blank keys keep
    /// their defaults; anything else must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_var(&lookup, "HOST", defaults.host, |v| v.parse().ok())?,
            port: parse_var(&lookup, "PORT", defaults.port, |v| v.parse().ok())?,
            cors: parse_var(&lookup, "CORS", defaults.cors, parse_bool)?,
            debug: parse_var(&lookup, "DEBUG", defaults.debug, parse_bool)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T, P>(lookup: &F, key: &str, default: T, parse: P) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            parse(raw.trim()).ok_or_else(|| ServerError::Config {
                key: key.to_string(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
