//! Character repository implementation for SQLite

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::db_error;
use crate::application::ports::outbound::{CharacterRepositoryPort, RepositoryError};
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// Repository for Character records
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn create(&self, character: &Character) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(character)?;
        sqlx::query("INSERT INTO characters (id, document) VALUES (?, ?)")
            .bind(character.id.to_string())
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        tracing::debug!("Created character: {}", character.name);
        Ok(())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT document FROM characters WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.map(|(document,)| serde_json::from_str(&document))
            .transpose()
            .map_err(RepositoryError::from)
    }
}
