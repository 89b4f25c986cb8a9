use std::env;
use std::time::Duration;

use crate::shared::errors::AppResult;

/// Connection pool settings, resolved once at startup and passed into
/// [`Database::new`](super::database::Database::new). Read-only afterwards.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_size: u32,
    pub min_idle: u32,
    pub connection_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self {
            url,
            max_size: 20,
            min_idle: 3,
            connection_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    /// Build a config from the environment, with `.env` fallback.
    ///
    /// `DATABASE_URL` is required; pool knobs have defaults and can be
    /// overridden via `DB_POOL_MAX_SIZE` / `DB_POOL_MIN_IDLE`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(env::var("DATABASE_URL")?);

        if let Some(max_size) = read_env_u32("DB_POOL_MAX_SIZE") {
            config.max_size = max_size;
        }
        if let Some(min_idle) = read_env_u32("DB_POOL_MIN_IDLE") {
            config.min_idle = min_idle;
        }

        Ok(config)
    }
}

fn read_env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pool_tuning() {
        let config = DatabaseConfig::new("postgres://localhost/rolodex".into());
        assert_eq!(config.max_size, 20);
        assert_eq!(config.min_idle, 3);
        assert_eq!(config.connection_timeout, Duration::from_secs(10));
    }
}
