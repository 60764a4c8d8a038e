//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `handyhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use handyhub_adapter_http_axum::state::{AccessGate, DEFAULT_ROLE_COOKIE};
use handyhub_app::access_policy::{
    AccessPolicy, DEFAULT_ELEVATED_ROLE, DEFAULT_FALLBACK_TIER, DEFAULT_GUEST_ROLE,
    DEFAULT_USER_ROLE,
};
use handyhub_domain::access::AccessTier;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Role cookie and tier mapping.
    pub access: AccessConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Access tier configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Cookie holding the caller's role.
    pub cookie_name: String,
    /// Roles denied all access.
    pub guest_roles: Vec<String>,
    /// Roles granted read-only access.
    pub user_roles: Vec<String>,
    /// Roles granted full access.
    pub elevated_roles: Vec<String>,
    /// Tier for roles listed nowhere (`guest`, `user` or `elevated`).
    pub default_tier: AccessTier,
}

impl Config {
    /// Load configuration from `handyhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("handyhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HANDYHUB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HANDYHUB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HANDYHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HANDYHUB_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("HANDYHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("HANDYHUB_ROLE_COOKIE") {
            self.access.cookie_name = val;
        }
        if let Ok(val) = std::env::var("HANDYHUB_ELEVATED_ROLES") {
            self.access.elevated_roles = split_roles(&val);
        }
        if let Ok(val) = std::env::var("HANDYHUB_DEFAULT_TIER") {
            if let Some(tier) = parse_tier(&val) {
                self.access.default_tier = tier;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.access.cookie_name.is_empty() {
            return Err(ConfigError::Validation(
                "access.cookie_name must not be empty".to_string(),
            ));
        }
        if self.access.elevated_roles.iter().all(String::is_empty) {
            return Err(ConfigError::Validation(
                "access.elevated_roles must name at least one role".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Build the role cookie resolver for the HTTP adapter.
    #[must_use]
    pub fn access_gate(&self) -> AccessGate {
        AccessGate {
            cookie_name: self.access.cookie_name.clone(),
            policy: AccessPolicy::new(
                self.access.user_roles.iter().cloned(),
                self.access.elevated_roles.iter().cloned(),
            )
            .with_guest_roles(self.access.guest_roles.iter().cloned())
            .with_fallback(self.access.default_tier),
        }
    }
}

fn split_roles(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_tier(value: &str) -> Option<AccessTier> {
    match value.trim().to_ascii_lowercase().as_str() {
        "guest" => Some(AccessTier::Guest),
        "user" => Some(AccessTier::User),
        "elevated" => Some(AccessTier::Elevated),
        _ => None,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:handyhub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "handyhubd=info,handyhub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_ROLE_COOKIE.to_string(),
            guest_roles: vec![DEFAULT_GUEST_ROLE.to_string()],
            user_roles: vec![DEFAULT_USER_ROLE.to_string()],
            elevated_roles: vec![DEFAULT_ELEVATED_ROLE.to_string()],
            default_tier: DEFAULT_FALLBACK_TIER,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
