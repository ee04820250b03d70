//! SQLite-backed persistence.
//!
//! Provides:
//! - A key-value store holding the serialized score state under a single key
//! - A `standups` history table, one row per counted stand-up, feeding the
//!   per-day statistics

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::score::Participant;

use super::data_dir;

/// Per-participant stand-up totals over some period.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub brice: u64,
    pub cecile: u64,
}

impl Stats {
    pub fn total(&self) -> u64 {
        self.brice + self.cecile
    }
}

/// SQLite database for score persistence and stand-up history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/defi-bureau/defi-bureau.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("defi-bureau.db");
        let conn = Connection::open(path).map_err(CoreError::Database)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(CoreError::Database)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS standups (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                participant TEXT NOT NULL,
                counted_at  TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_standups_counted_at ON standups(counted_at);
            CREATE INDEX IF NOT EXISTS idx_standups_participant ON standups(participant);",
        )?;
        Ok(())
    }

    /// Record one counted stand-up to the history table.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_standup(
        &self,
        participant: Participant,
        counted_at: DateTime<Utc>,
    ) -> Result<i64, rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO standups (participant, counted_at) VALUES (?1, ?2)",
            params![participant.as_str(), counted_at.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn stats_today(&self) -> Result<Stats, rusqlite::Error> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        self.stats_since(Some(format!("{today}T00:00:00+00:00")))
    }

    pub fn stats_all(&self) -> Result<Stats, rusqlite::Error> {
        self.stats_since(None)
    }

    fn stats_since(&self, floor: Option<String>) -> Result<Stats, rusqlite::Error> {
        let (sql, bind): (&str, Vec<String>) = match floor {
            Some(ts) => (
                "SELECT participant, COUNT(*) FROM standups
                 WHERE counted_at >= ?1 GROUP BY participant",
                vec![ts],
            ),
            None => (
                "SELECT participant, COUNT(*) FROM standups GROUP BY participant",
                vec![],
            ),
        };

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(bind.iter()), |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
        })?;

        let mut stats = Stats::default();
        for row in rows {
            let (participant, count) = row?;
            match participant.as_str() {
                "brice" => stats.brice += count,
                "cecile" => stats.cecile += count,
                _ => {}
            }
        }
        Ok(stats)
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
