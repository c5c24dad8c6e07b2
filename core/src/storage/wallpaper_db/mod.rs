//! Wallpaper blob store backed by redb.
//!
//! Holds at most one record: the current wallpaper media as a data URL
//! under a fixed key, overwritten wholesale and never versioned. All
//! operations are fallible and failures propagate to the caller; a
//! wallpaper apply has to know whether the write actually landed.

use crate::types::Config;
use error::BlobError;
use redb::{ReadableDatabase, ReadableTable, TableDefinition};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum BlobError {
        #[error("Database error: {0}")]
        Database(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        Table(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        Storage(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        Transaction(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        Commit(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Wallpaper table: fixed key → data URL payload.
const WALLPAPERS: TableDefinition<&str, &str> = TableDefinition::new("wallpapers");

/// The single key the current wallpaper lives under.
const WALLPAPER_KEY: &str = "wallpaper";

pub struct WallpaperDb {
    db: redb::Database,
}

impl WallpaperDb {
    /// Creates or opens the blob database. Opening is idempotent; the
    /// wallpapers table is lazily created on first open.
    pub fn open(config: &Config) -> Result<Self, BlobError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(WALLPAPERS)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Stores the wallpaper payload, replacing any previous one.
    pub fn put(&mut self, data: &str) -> Result<(), BlobError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(WALLPAPERS)?;
            table.insert(WALLPAPER_KEY, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Retrieves the stored wallpaper payload, if any.
    pub fn get(&self) -> Result<Option<String>, BlobError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(WALLPAPERS)?;

        match table.get(WALLPAPER_KEY)? {
            None => Ok(None),
            Some(guard) => Ok(Some(guard.value().to_string())),
        }
    }

    /// Deletes the stored wallpaper. Deleting when nothing is stored is a
    /// no-op.
    pub fn delete(&mut self) -> Result<(), BlobError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(WALLPAPERS)?;
            table.remove(WALLPAPER_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
