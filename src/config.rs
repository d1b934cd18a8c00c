use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_MONGODB_HOST: &str = "cluster0.dajck5y.mongodb.net";
const DEFAULT_MONGODB_USER: &str = "lkalinin";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub password: String,
    pub mongodb_uri: Option<String>,
    pub mongodb_host: String,
    pub mongodb_user: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());
        let bind_port = non_empty("PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);

        // The password is taken verbatim; surrounding whitespace may be part of it.
        let password = lookup("PASSWORD").unwrap_or_default();

        let config = Self {
            bind_addr,
            bind_port,
            password,
            mongodb_uri: non_empty("MONGODB_URI"),
            mongodb_host: non_empty("MONGODB_HOST")
                .unwrap_or_else(|| DEFAULT_MONGODB_HOST.to_string()),
            mongodb_user: non_empty("MONGODB_USER")
                .unwrap_or_else(|| DEFAULT_MONGODB_USER.to_string()),
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }

    /// True when the connection target is assembled here and no password
    /// was supplied for it.
    pub fn password_missing(&self) -> bool {
        self.mongodb_uri.is_none() && self.password.is_empty()
    }

    /// Connection target for the document database. An explicit `MONGODB_URI`
    /// is used as-is; otherwise one is assembled from host, user and password.
    pub fn connection_uri(&self) -> String {
        match &self.mongodb_uri {
            Some(uri) => uri.clone(),
            None => format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                self.mongodb_user, self.password, self.mongodb_host
            ),
        }
    }
}
