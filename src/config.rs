use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub pool: PoolConfig,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: HeaderValue,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Where the datastore lives: a full connection string, or the discrete `DB_*` fields.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    Url(String),
    Discrete {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => {
                let required = |key: &str| {
                    get(key).ok_or_else(|| {
                        format!("Missing required environment variable: {key} (or set DATABASE_URL)")
                    })
                };
                DatabaseConfig::Discrete {
                    host: required("DB_HOST")?,
                    port: or("DB_PORT", "5432")
                        .parse()
                        .map_err(|e| format!("Invalid DB_PORT: {e}"))?,
                    user: required("DB_USER")?,
                    password: or("DB_PASSWORD", ""),
                    name: required("DB_NAME")?,
                }
            }
        };

        let pool = PoolConfig {
            max_connections: or("LABDESK_DB_MAX_CONNECTIONS", "10")
                .parse()
                .map_err(|e| format!("Invalid LABDESK_DB_MAX_CONNECTIONS: {e}"))?,
            min_connections: or("LABDESK_DB_MIN_CONNECTIONS", "5")
                .parse()
                .map_err(|e| format!("Invalid LABDESK_DB_MIN_CONNECTIONS: {e}"))?,
            max_lifetime: Duration::from_secs(
                or("LABDESK_DB_MAX_LIFETIME_SECS", "300")
                    .parse()
                    .map_err(|e| format!("Invalid LABDESK_DB_MAX_LIFETIME_SECS: {e}"))?,
            ),
        };
        if pool.min_connections > pool.max_connections {
            return Err(format!(
                "LABDESK_DB_MIN_CONNECTIONS ({}) exceeds LABDESK_DB_MAX_CONNECTIONS ({})",
                pool.min_connections, pool.max_connections
            ));
        }

        let host: IpAddr = or("LABDESK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LABDESK_HOST: {e}"))?;

        let port: u16 = get("LABDESK_PORT")
            .or_else(|| get("SERVER_PORT"))
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|e| format!("Invalid LABDESK_PORT: {e}"))?;

        let cors_origin = HeaderValue::from_str(&or("LABDESK_CORS_ORIGIN", "*"))
            .map_err(|e| format!("Invalid LABDESK_CORS_ORIGIN: {e}"))?;

        let max_body_size: usize = or("LABDESK_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LABDESK_MAX_BODY_SIZE: {e}"))?;

        let log_level = or("LABDESK_LOG_LEVEL", "info");

        Ok(Config {
            database,
            pool,
            host,
            port,
            cors_origin,
            max_body_size,
            log_level,
        })
    }
}
