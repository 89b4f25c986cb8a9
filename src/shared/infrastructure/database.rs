use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};

use crate::log_info;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::config::DatabaseConfig;
use crate::shared::utils::logger::LogContext;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Shared connection pool. One instance per process; every request checks a
/// connection out for the duration of a single repository call.
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> AppResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.url);

        let pool = r2d2::Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(config.min_idle))
            .connection_timeout(config.connection_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .max_lifetime(Some(config.max_lifetime))
            // Discards connections left broken by a failed request
            .test_on_check_out(true)
            .build(manager)?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            config.max_size,
            config.min_idle
        );

        Ok(Self { pool })
    }

    /// Wrap an externally built pool (test harnesses).
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to acquire database connection from pool");
                Err(e.into())
            }
        }
    }

    /// Pool statistics for monitoring.
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}
