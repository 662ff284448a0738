//! Connection pool, schema initialization and units-of-work

use super::schema::{apply_pragmas, recreate_schema};
use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Transaction};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Where the store lives and how many connections to pool.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub location: PathBuf,
    pub pool_size: u32,
}

impl StoreConfig {
    pub fn new<P: Into<PathBuf>>(location: P) -> Self {
        Self {
            location: location.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }
}

/// Handle to the relational store.
///
/// Construct once at startup and pass it to the loader and query functions.
/// Cloning is cheap and shares the underlying pool.
#[derive(Clone)]
pub struct Store {
    pool: Pool<SqliteConnectionManager>,
    location: PathBuf,
}

impl Store {
    /// Open (creating if needed) the store at the configured location.
    ///
    /// Does not touch the schema; call [`Store::initialize`] before loading.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        if let Some(parent) = config.location.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("creating store directory {}", parent.display())
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(&config.location);
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(Duration::from_secs(10))
            .connection_customizer(Box::new(StoreConnectionCustomizer))
            .build(manager)
            .with_context(|| format!("opening store at {}", config.location.display()))?;

        tracing::debug!(
            location = %config.location.display(),
            pool_size = config.pool_size,
            "Store opened"
        );

        Ok(Self {
            pool,
            location: config.location.clone(),
        })
    }

    /// Drop every table if present, then recreate the schema.
    ///
    /// Destroys all stored rows. Must not run while other units-of-work are
    /// in flight against the same store.
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .context("store unavailable for initialization")?;
        recreate_schema(&mut conn)?;
        tracing::info!(location = %self.location.display(), "Schema initialized");
        Ok(())
    }

    /// Check out a fresh unit-of-work bound to the shared pool.
    pub fn open_unit_of_work(&self) -> Result<UnitOfWork> {
        let conn = self.pool.get()?;
        Ok(UnitOfWork { conn })
    }

    /// Location this store was opened with.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Current pool state, for diagnostics.
    pub fn pool_state(&self) -> r2d2::State {
        self.pool.state()
    }
}

/// One coherent sequence of reads and writes against the store.
///
/// Reads can go straight through the connection. Writes that must land
/// atomically go through [`UnitOfWork::transaction`]; a transaction dropped
/// without `commit()` is rolled back. The connection returns to the pool
/// when the unit-of-work is dropped.
pub struct UnitOfWork {
    conn: PooledConnection<SqliteConnectionManager>,
}

impl UnitOfWork {
    /// Begin a transaction on this unit-of-work's connection.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }
}

impl Deref for UnitOfWork {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

/// Applies the store pragmas to every connection the pool hands out.
#[derive(Debug)]
struct StoreConnectionCustomizer;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for StoreConnectionCustomizer {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        apply_pragmas(conn)
    }
}
