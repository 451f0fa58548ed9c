//! SQLite connection pool shared by every request handler.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Per-connection pragmas applied when the pool opens a connection.
///
/// Concurrent writers wait on the busy timeout instead of failing with
/// `SQLITE_BUSY`.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a pool with [`DEFAULT_POOL_SIZE`] connections.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_connection_pool_with_size(database_url, DEFAULT_POOL_SIZE)
}

/// Build a pool, eagerly opening connections so an unreachable store fails here.
pub fn establish_connection_pool_with_size(
    database_url: &str,
    max_size: u32,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

#[cfg(feature = "server")]
pub use migrations::{MIGRATIONS, run_pending_migrations};

#[cfg(feature = "server")]
mod migrations {
    use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

    use super::DbPool;

    pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

    /// Apply any migrations not yet recorded in the store, returning how many ran.
    pub fn run_pending_migrations(
        pool: &DbPool,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut conn = pool.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        Ok(applied.len())
    }
}
