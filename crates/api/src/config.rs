use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3004`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation configuration (shared secret).
    pub jwt: JwtConfig,
    /// Pokédex catalog service connection settings.
    pub pokedex: PokedexConfig,
}

/// Connection settings for the external Pokédex catalog service.
#[derive(Debug, Clone)]
pub struct PokedexConfig {
    /// Base URL of the catalog service.
    pub base_url: String,
    /// Per-lookup timeout in seconds.
    pub lookup_timeout_secs: u64,
}

impl PokedexConfig {
    /// Per-lookup timeout as a [`Duration`].
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3004`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `POKEDEX_URL`          | `http://localhost:3003`    |
    /// | `POKEDEX_TIMEOUT_SECS` | `5`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3004".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let pokedex_base_url =
            std::env::var("POKEDEX_URL").unwrap_or_else(|_| "http://localhost:3003".into());

        let pokedex_timeout_secs: u64 = std::env::var("POKEDEX_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("POKEDEX_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            pokedex: PokedexConfig {
                base_url: pokedex_base_url,
                lookup_timeout_secs: pokedex_timeout_secs,
            },
        }
    }
}
