//! Database module - SQLite storage for the active profile and program history

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::profile::SportProfile;
use crate::program::WeeklyProgram;

/// Storage format version; profiles stored under another version are ignored
const PROFILE_VERSION: &str = "1.0";
/// A stored profile older than this is considered stale and cleared
const PROFILE_MAX_AGE_DAYS: i64 = 30;

/// Saved program summary row
#[derive(Debug, Clone)]
pub struct SavedProgram {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub total_duration: u32,
    pub days_per_week: u32,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, for tests
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                version TEXT NOT NULL,
                json TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )",
            [],
        )?;
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS programs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                json TEXT NOT NULL,
                total_duration INTEGER NOT NULL,
                days_per_week INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Save the active profile, replacing any previous one
    pub fn save_profile(&self, profile: &SportProfile) -> Result<()> {
        self.save_profile_at(profile, Utc::now())
    }

    fn save_profile_at(&self, profile: &SportProfile, saved_at: DateTime<Utc>) -> Result<()> {
        let json = serde_json::to_string(profile).context("sérialisation du profil")?;
        self.conn.execute(
            "INSERT INTO profile (id, version, json, saved_at) VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET version = ?1, json = ?2, saved_at = ?3",
            params![PROFILE_VERSION, json, saved_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load the active profile. Returns None when there is none, when the
    /// stored version differs, or when it is older than 30 days (stale
    /// profiles are cleared).
    pub fn load_profile(&self) -> Result<Option<SportProfile>> {
        let row: Option<(String, String, String)> = self
            .conn
            .query_row(
                "SELECT version, json, saved_at FROM profile WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((version, json, saved_at)) = row else {
            return Ok(None);
        };

        if version != PROFILE_VERSION {
            return Ok(None);
        }

        let saved_at = DateTime::parse_from_rfc3339(&saved_at)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        if Utc::now() - saved_at > Duration::days(PROFILE_MAX_AGE_DAYS) {
            self.clear_profile()?;
            return Ok(None);
        }

        let profile = serde_json::from_str(&json).context("profil enregistré illisible")?;
        Ok(Some(profile))
    }

    pub fn clear_profile(&self) -> Result<()> {
        self.conn.execute("DELETE FROM profile WHERE id = 1", [])?;
        Ok(())
    }

    /// Record a generated program in the history
    pub fn save_program(&self, program: &WeeklyProgram) -> Result<i64> {
        let json = serde_json::to_string(program).context("sérialisation du programme")?;
        self.conn.execute(
            "INSERT INTO programs (json, total_duration, days_per_week, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![json, program.total_duration, program.days_per_week, Utc::now().to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent first
    pub fn list_programs(&self) -> Result<Vec<SavedProgram>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, created_at, total_duration, days_per_week
             FROM programs ORDER BY created_at DESC",
        )?;
        let programs = stmt
            .query_map([], |row| {
                let created_at: String = row.get(1)?;
                Ok(SavedProgram {
                    id: row.get(0)?,
                    created_at: DateTime::parse_from_rfc3339(&created_at)
                        .map(|d| d.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                    total_duration: row.get(2)?,
                    days_per_week: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(programs)
    }

    /// Load a saved program by id
    pub fn load_program(&self, id: i64) -> Result<Option<WeeklyProgram>> {
        let json: Option<String> = self
            .conn
            .query_row("SELECT json FROM programs WHERE id = ?1", params![id], |row| row.get(0))
            .optional()?;
        match json {
            Some(json) => {
                let program = serde_json::from_str(&json).context("programme enregistré illisible")?;
                Ok(Some(program))
            }
            None => Ok(None),
        }
    }
}
