//! Server configuration from the environment

use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_url: "postgres://localhost/userapi".to_string(),
            cors_permissive: false,
        }
    }
}

impl ServerConfig {
    /// Build a config from `HOST`, `PORT` and `DATABASE_URL`.
    ///
    /// Unset variables fall back to the defaults; a malformed `PORT`
    /// or `HOST` is an error rather than a silent fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or_else(|_| defaults.bind_addr.ip().to_string());
        let port = match std::env::var("PORT") {
            Ok(p) => p.parse::<u16>()?,
            Err(_) => defaults.bind_addr.port(),
        };
        let bind_addr: SocketAddr = format!("{}:{}", host, port).parse()?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| defaults.database_url.clone());

        Ok(Self {
            bind_addr,
            database_url,
            cors_permissive: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.cors_permissive);
    }
}
