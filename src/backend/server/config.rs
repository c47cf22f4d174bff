/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * creation of the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary before this runs), with defaults for local development
 * where a safe one exists. `JWT_SECRET` has no default.
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | `sqlite://inkpost.db?mode=rwc` |
 * | `JWT_SECRET` | required |
 * | `SERVER_PORT` | `3000` |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `TOKEN_TTL_SECS` | 30 days |
 */

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default database location for local development
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpost.db?mode=rwc";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default token lifetime: 30 days
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Connections kept by a file-backed pool
const MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = get("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            let secs: u64 = parse_value("TOKEN_TTL_SECS", &ttl)?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }

        builder.build()
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
    token_ttl: Option<Duration>,
}

impl ServerConfigBuilder {
    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let token_ttl = self
            .token_ttl
            .unwrap_or(Duration::from_secs(DEFAULT_TOKEN_TTL_SECS));
        if token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost,
            token_ttl,
        })
    }
}

/// Whether a connection string names an in-memory database
fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the SQLite connection pool and run migrations
///
/// In-memory databases live only as long as their connection, so they get
/// a single connection that is never recycled.
///
/// # Errors
///
/// Fails if the URL cannot be parsed, the database cannot be opened, or a
/// migration fails.
///
/// # Example
///
/// ```rust,no_run
/// use inkpost::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);

    let pool_options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
