//! Persistent storage using SQLite (rusqlite)
//!
//! One database holds:
//! - the roster table the resolver and casual spins query
//! - the casual leaderboard (best score per player)
//! - the daily leaderboard (best score per player per Eastern day)
//! - a meta table with schema version and the remembered player handle
//!
//! Lives in an OS-standard data directory (via the `directories` crate).

use directories::ProjectDirs;
use rusqlite::{params, Connection, Result as SqlResult};
use std::path::PathBuf;

use crate::game::daily::DateKey;
use crate::game::DAILY_TEAMS;
use crate::roster::{position_codes, Candidate, LookupError, RosterLookup};

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: meta, players, leaderboard, daily_leaderboard
const SCHEMA_VERSION: u32 = 1;

/// Player names on leaderboards are clamped to this many characters.
const MAX_NAME_LEN: usize = 100;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Database error from SQLite
    Database(rusqlite::Error),
    /// Could not determine data directory
    NoDataDirectory,
    /// Schema version mismatch (future version)
    FutureSchemaVersion { found: u32, supported: u32 },
    /// Failed to create data directory
    CreateDirFailed(std::io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Database(e) => write!(f, "database error: {}", e),
            StorageError::NoDataDirectory => write!(f, "could not determine data directory"),
            StorageError::FutureSchemaVersion { found, supported } => {
                write!(
                    f,
                    "database schema version {} is newer than supported version {}",
                    found, supported
                )
            }
            StorageError::CreateDirFailed(e) => write!(f, "failed to create data directory: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e)
    }
}

/// A casual leaderboard row: one entry per player, their best game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasualScore {
    pub player_name: String,
    pub score: u32,
    pub rounds_played: u32,
    pub created_at: i64,
}

/// A daily leaderboard row for one Eastern day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyScore {
    pub player_name: String,
    pub score: u32,
    pub created_at: i64,
}

/// The main storage handle.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open or create the database in the OS-standard data directory:
    /// - Linux: `$XDG_DATA_HOME/pigskin/` or `~/.local/share/pigskin/`
    /// - macOS: `~/Library/Application Support/pigskin/`
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir).map_err(StorageError::CreateDirFailed)?;
        let conn = Connection::open(data_dir.join("pigskin.db"))?;
        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let storage = Storage {
            conn: Connection::open_in_memory()?,
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// OS-standard data directory for pigskin.
    pub fn data_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("", "", "pigskin")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDirectory)
    }

    fn initialize_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS meta (
                schema_version INTEGER NOT NULL,
                handle TEXT
            );
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                team TEXT NOT NULL,
                position TEXT NOT NULL,
                year INTEGER NOT NULL,
                depth_rank INTEGER,
                espn_id TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_players_round
                ON players (team, year, position);
            CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL,
                score INTEGER NOT NULL,
                total_rounds INTEGER NOT NULL,
                rounds_played INTEGER NOT NULL,
                difficulty TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS daily_leaderboard (
                play_date TEXT NOT NULL,
                player_name TEXT NOT NULL,
                score INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                UNIQUE (play_date, player_name)
            );",
        )?;

        let version: Option<u32> = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| {
                row.get(0)
            })
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                _ => Err(e),
            })?;

        match version {
            None => {
                self.conn.execute(
                    "INSERT INTO meta (schema_version) VALUES (?1)",
                    params![SCHEMA_VERSION],
                )?;
            }
            Some(v) if v > SCHEMA_VERSION => {
                return Err(StorageError::FutureSchemaVersion {
                    found: v,
                    supported: SCHEMA_VERSION,
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Get the remembered player handle.
    pub fn handle(&self) -> SqlResult<Option<String>> {
        self.conn
            .query_row("SELECT handle FROM meta LIMIT 1", [], |row| {
                row.get::<_, Option<String>>(0)
            })
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                _ => Err(e),
            })
    }

    /// Remember the player handle for next launch.
    pub fn set_handle(&self, handle: &str) -> SqlResult<()> {
        self.conn
            .execute("UPDATE meta SET handle = ?1", params![handle])?;
        Ok(())
    }

    /// Insert one roster row (used by the import tooling and tests).
    pub fn insert_player(
        &self,
        name: &str,
        team: &str,
        position: &str,
        year: u16,
        depth_rank: Option<u32>,
        espn_id: Option<&str>,
    ) -> SqlResult<()> {
        self.conn.execute(
            "INSERT INTO players (name, team, position, year, depth_rank, espn_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![name, team, position, year, depth_rank, espn_id],
        )?;
        Ok(())
    }

    /// Team abbreviations for the casual wheel, from the roster table,
    /// falling back to the fixed 32-team list when the table has no data.
    pub fn team_catalog(&self) -> Vec<String> {
        let teams = self
            .conn
            .prepare("SELECT DISTINCT team FROM players ORDER BY team")
            .and_then(|mut stmt| {
                stmt.query_map([], |row| row.get::<_, String>(0))?
                    .collect::<SqlResult<Vec<String>>>()
            })
            .unwrap_or_default();
        if teams.is_empty() {
            DAILY_TEAMS.iter().map(|t| t.to_string()).collect()
        } else {
            teams
        }
    }

    /// Record a finished single-player casual game.
    pub fn save_casual_score(
        &self,
        player_name: &str,
        score: u32,
        total_rounds: u32,
        rounds_played: u32,
        difficulty: &str,
    ) -> Result<(), StorageError> {
        self.save_casual_score_at(
            player_name,
            score,
            total_rounds,
            rounds_played,
            difficulty,
            now_millis(),
        )
    }

    fn save_casual_score_at(
        &self,
        player_name: &str,
        score: u32,
        total_rounds: u32,
        rounds_played: u32,
        difficulty: &str,
        created_at: i64,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO leaderboard
                 (player_name, score, total_rounds, rounds_played, difficulty, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                clamp_name(player_name),
                score,
                total_rounds,
                rounds_played,
                difficulty,
                created_at
            ],
        )?;
        Ok(())
    }

    /// Casual leaderboard: each player's best game, ordered by score
    /// descending, then fewer total games played, then earlier submission.
    pub fn top_casual_scores(
        &self,
        limit: u32,
        difficulty: &str,
    ) -> Result<Vec<CasualScore>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT l.player_name, l.score, l.rounds_played, l.created_at,
                    (SELECT COUNT(*) FROM leaderboard t
                      WHERE t.player_name = l.player_name AND t.difficulty = l.difficulty) AS tries
             FROM leaderboard l
             WHERE l.difficulty = ?1
               AND NOT EXISTS (
                   SELECT 1 FROM leaderboard b
                   WHERE b.player_name = l.player_name
                     AND b.difficulty = l.difficulty
                     AND (b.score > l.score
                          OR (b.score = l.score AND b.created_at < l.created_at))
               )
             ORDER BY l.score DESC, tries ASC, l.created_at ASC
             LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![difficulty, limit], |row| {
            Ok(CasualScore {
                player_name: row.get(0)?,
                score: row.get(1)?,
                rounds_played: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<SqlResult<Vec<_>>>()?)
    }

    /// Submit a daily score. Keeps the best score per (day, player);
    /// a re-submission only wins by strictly beating the stored score,
    /// so ties go to the earlier submission.
    pub fn submit_daily_score(
        &self,
        date: &DateKey,
        player_name: &str,
        score: u32,
    ) -> Result<(), StorageError> {
        self.submit_daily_score_at(date, player_name, score, now_millis())
    }

    fn submit_daily_score_at(
        &self,
        date: &DateKey,
        player_name: &str,
        score: u32,
        created_at: i64,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO daily_leaderboard (play_date, player_name, score, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (play_date, player_name) DO UPDATE
             SET score = excluded.score, created_at = excluded.created_at
             WHERE excluded.score > daily_leaderboard.score",
            params![date.as_str(), clamp_name(player_name), score, created_at],
        )?;
        Ok(())
    }

    /// That day's leaderboard: score descending, earlier submission first.
    pub fn daily_top(
        &self,
        date: &DateKey,
        limit: u32,
    ) -> Result<Vec<DailyScore>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, score, created_at
             FROM daily_leaderboard
             WHERE play_date = ?1
             ORDER BY score DESC, created_at ASC
             LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![date.as_str(), limit], |row| {
            Ok(DailyScore {
                player_name: row.get(0)?,
                score: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<SqlResult<Vec<_>>>()?)
    }

    /// Days that have at least one daily score, newest first. Rows that do
    /// not parse as canonical date keys are skipped.
    pub fn daily_dates(&self) -> Result<Vec<DateKey>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT play_date FROM daily_leaderboard ORDER BY play_date DESC",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let dates = rows
            .collect::<SqlResult<Vec<String>>>()?
            .iter()
            .filter_map(|s| DateKey::parse(s))
            .collect();
        Ok(dates)
    }

    /// Whether this name already played on that day. Case-insensitive so
    /// "pat m" cannot replay as "Pat M".
    pub fn has_played_daily(&self, date: &DateKey, player_name: &str) -> Result<bool, StorageError> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM daily_leaderboard
             WHERE play_date = ?1 AND LOWER(TRIM(player_name)) = LOWER(TRIM(?2))",
            params![date.as_str(), clamp_name(player_name)],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl RosterLookup for Storage {
    /// All players for (team, expanded position group, year), ordered by
    /// depth rank with unranked players last. Empty means no data.
    fn players_for_round(
        &self,
        team: &str,
        position_group: &str,
        year: u16,
    ) -> Result<Vec<Candidate>, LookupError> {
        let codes = position_codes(position_group);
        let placeholders = (0..codes.len())
            .map(|i| format!("?{}", i + 3))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT name, depth_rank, espn_id FROM players
             WHERE team = ?1 AND year = ?2 AND position IN ({})
             ORDER BY depth_rank IS NULL, depth_rank ASC
             LIMIT 500",
            placeholders
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| LookupError(e.to_string()))?;

        let mut values: Vec<&dyn rusqlite::ToSql> = vec![&team, &year];
        for code in &codes {
            values.push(code);
        }
        let rows = stmt
            .query_map(&values[..], |row| {
                Ok(Candidate {
                    name: row.get(0)?,
                    depth_rank: row.get(1)?,
                    espn_id: row.get(2)?,
                })
            })
            .map_err(|e| LookupError(e.to_string()))?;
        rows.collect::<SqlResult<Vec<_>>>()
            .map_err(|e| LookupError(e.to_string()))
    }
}

fn clamp_name(name: &str) -> String {
    name.trim().chars().take(MAX_NAME_LEN).collect()
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
