/// SQLite catalog handle
///
/// Owns the pool, creates the catalog file on first use and applies the
/// schema shipped in `database/schema.sql`.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const POOL_SIZE: u32 = 5;

/// How long a writer waits on a locked catalog before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = include_str!("../../database/schema.sql");

/// Pooled connection to the catalog database
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    location: PathBuf,
}

impl Database {
    /// Open (or create) the catalog at `db_path`
    ///
    /// Missing parent directories are created.
    ///
    /// ```no_run
    /// use cinelist_lib::db::Database;
    ///
    /// # async fn open() -> cinelist_lib::Result<()> {
    /// let db = Database::new("/tmp/cinelist/catalog.db").await?;
    /// println!("{} titles", db.stats().await?.total_entries);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let location = db_path.as_ref().to_path_buf();

        if let Some(dir) = location.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&location)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(POOL_SIZE)
            .connect_with(options)
            .await?;

        Self::with_pool(pool, location).await
    }

    /// Fresh in-memory catalog
    ///
    /// Each connection to `:memory:` gets its own database, hence the
    /// single-connection pool.
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::with_pool(pool, PathBuf::from(":memory:")).await
    }

    async fn with_pool(pool: SqlitePool, location: PathBuf) -> Result<Self> {
        let db = Self {
            pool: Arc::new(pool),
            location,
        };
        db.apply_schema().await?;

        Ok(db)
    }

    // sqlx runs one statement per query, so the script is fed piecewise
    async fn apply_schema(&self) -> Result<()> {
        for chunk in SCHEMA.split(';') {
            let statement = strip_sql_comments(chunk);
            if statement.is_empty() {
                continue;
            }
            sqlx::query(&statement).execute(self.pool()).await?;
        }

        Ok(())
    }

    /// Pool used by the query methods
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Where the catalog lives (`:memory:` in tests)
    pub fn path(&self) -> &Path {
        &self.location
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Entry counts per status plus pool usage
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let counts: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM catalog GROUP BY status")
                .fetch_all(self.pool())
                .await?;

        let mut stats = DatabaseStats {
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            ..DatabaseStats::default()
        };

        for (status, count) in counts {
            match status.as_str() {
                "wanted" => stats.wanted = count,
                "seen" => stats.seen = count,
                "disliked" => stats.disliked = count,
                _ => continue,
            }
            stats.total_entries += count;
        }

        Ok(stats)
    }
}

// Comment-only chunks (the file header) come back empty
fn strip_sql_comments(chunk: &str) -> String {
    chunk
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Catalog size and pool usage
#[derive(Debug, Clone, Default)]
pub struct DatabaseStats {
    pub total_entries: i64,
    pub wanted: i64,
    pub seen: i64,
    pub disliked: i64,
    pub pool_size: u32,
    pub idle_connections: usize,
}
