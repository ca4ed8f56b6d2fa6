//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to listen on (default: 0.0.0.0)
    pub bind_address: IpAddr,

    /// TCP port to listen on (default: 3000)
    pub port: u16,

    /// Directory of static assets (default: "public")
    pub static_dir: PathBuf,

    /// Start with the sample contacts (default: true)
    pub seed_sample_contacts: bool,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACTS_BIND_ADDRESS`: IP address to bind (default: 0.0.0.0)
    /// - `CONTACTS_PORT`: Port to listen on (default: 3000)
    /// - `CONTACTS_STATIC_DIR`: Static asset directory (default: public)
    /// - `CONTACTS_SEED_SAMPLE`: Seed sample contacts (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let bind_address = match env::var("CONTACTS_BIND_ADDRESS") {
            Ok(val) => val.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CONTACTS_BIND_ADDRESS".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.bind_address,
        };

        let port = Self::parse_env_u16("CONTACTS_PORT", defaults.port)?;
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_PORT".to_string(),
                reason: "Must be between 1 and 65535".to_string(),
            });
        }

        let static_dir = env::var("CONTACTS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let seed_sample_contacts =
            Self::parse_env_bool("CONTACTS_SEED_SAMPLE", defaults.seed_sample_contacts)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            bind_address,
            port,
            static_dir,
            seed_sample_contacts,
            log_level,
        })
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 1-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("public"),
            seed_sample_contacts: true,
            log_level: "info".to_string(),
        }
    }
}
