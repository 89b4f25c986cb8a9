/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own database that is automatically dropped when the test completes
///
/// This uses TEST_DATABASE_URL from the environment to connect to the test database server.
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

use rolodex::Database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub type TestPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Isolated test database that automatically cleans up on drop.
pub struct TestDb {
    default_db_url: String,
    name: String,
    pool: TestPool,
}

impl TestDb {
    /// Creates a new isolated test database with a unique name and runs
    /// the migrations on it.
    ///
    /// Database name format: rolodex_test_{process_id}_{counter}, so
    /// multiple test processes can run in parallel.
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "rolodex_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|_| panic!("Failed to create test database: {}", name));

        // Point the URL at the isolated database (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", test_db_url),
        };

        let manager = ConnectionManager::<PgConnection>::new(isolated_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        let mut migration_conn = pool.get().expect("Unable to connect to the test database");
        migration_conn
            .run_pending_migrations(MIGRATIONS)
            .expect("Unable to migrate the test database");

        Self {
            default_db_url: test_db_url,
            name,
            pool,
        }
    }

    /// Pool for direct diesel access.
    pub fn pool(&self) -> TestPool {
        self.pool.clone()
    }

    /// The crate's `Database` wrapper over this pool, for repositories.
    pub fn database(&self) -> Database {
        Database::from_pool(self.pool.clone())
    }
}

impl Drop for TestDb {
    /// Drops the isolated database. If the thread is panicking the database
    /// is left behind for debugging.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = PgConnection::establish(&self.default_db_url)
            .expect("Failed to connect to test database server for cleanup");

        let _ = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        if let Err(e) =
            sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn)
        {
            eprintln!("Failed to drop test database '{}': {}", self.name, e);
        }
    }
}
