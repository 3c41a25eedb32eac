//! SQLite persistence adapters
//!
//! Each record is stored as a JSON document keyed by its id, with a few
//! indexed columns for lookups. Tables are created on startup.

mod character_repository;
mod combat_repository;
mod game_session_repository;
mod status_check_repository;

pub use character_repository::SqliteCharacterRepository;
pub use combat_repository::SqliteCombatRepository;
pub use game_session_repository::SqliteGameSessionRepository;
pub use status_check_repository::SqliteStatusCheckRepository;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::application::ports::outbound::RepositoryError;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS game_sessions (
        id TEXT PRIMARY KEY,
        player_id TEXT NOT NULL,
        document TEXT NOT NULL,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id TEXT PRIMARY KEY,
        document TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS combat_encounters (
        id TEXT PRIMARY KEY,
        game_session_id TEXT NOT NULL,
        is_active INTEGER NOT NULL,
        document TEXT NOT NULL,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS status_checks (
        id TEXT PRIMARY KEY,
        timestamp TEXT NOT NULL,
        document TEXT NOT NULL
    )
    "#,
];

pub(crate) fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

/// Combined repository providing access to all record stores
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(db_error)?;
        Self::new(pool).await
    }

    /// Private in-memory database; a single connection so every query sees it
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(db_error)?;
        Self::new(pool).await
    }

    pub async fn new(pool: SqlitePool) -> Result<Self, RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(db_error)?;
        }
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn sessions(&self) -> SqliteGameSessionRepository {
        SqliteGameSessionRepository::new(self.pool.clone())
    }

    pub fn characters(&self) -> SqliteCharacterRepository {
        SqliteCharacterRepository::new(self.pool.clone())
    }

    pub fn combats(&self) -> SqliteCombatRepository {
        SqliteCombatRepository::new(self.pool.clone())
    }

    pub fn status_checks(&self) -> SqliteStatusCheckRepository {
        SqliteStatusCheckRepository::new(self.pool.clone())
    }
}
