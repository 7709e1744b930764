//! Server configuration: where the HTTP/WebSocket listener binds.
//!
//! Values come from the process environment. `from_lookup` takes the lookup as a closure
//! so tests can feed their own variables without touching the real environment.

use thiserror::Error;

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the bind address.
pub const HOST_ENV: &str = "HOST";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Bind address used when `HOST` is unset or empty. Listens on every interface.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while reading the server configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value {0:?}: expected a port number between 0 and 65535")]
    InvalidPort(String),
}

/// Listening address of the relay server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_blank(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let host = non_blank(HOST_ENV)
            .map(|raw| raw.trim().to_string())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self { host, port })
    }

    /// `ws://host:port` form used in the startup banner.
    pub fn ws_url(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_port_from_env() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "9001")])).unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_blank_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));

        // Out of range for a TCP port.
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("70000".to_string()));
    }

    #[test]
    fn test_host_from_env() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")])).unwrap();
        assert_eq!(config.ws_url(), "ws://127.0.0.1:3000");
    }
}
