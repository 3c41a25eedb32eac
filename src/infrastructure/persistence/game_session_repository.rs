//! Game session repository implementation for SQLite

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::db_error;
use crate::application::ports::outbound::{GameSessionRepositoryPort, RepositoryError};
use crate::domain::entities::{Character, GameSession};
use crate::domain::value_objects::GameSessionId;

pub struct SqliteGameSessionRepository {
    pool: SqlitePool,
}

impl SqliteGameSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameSessionRepositoryPort for SqliteGameSessionRepository {
    async fn create(&self, session: &GameSession) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(session)?;
        sqlx::query("INSERT INTO game_sessions (id, player_id, document) VALUES (?, ?, ?)")
            .bind(session.id.to_string())
            .bind(&session.player_id)
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        tracing::debug!(game_state_id = %session.id, "Stored game session");
        Ok(())
    }

    async fn get(&self, id: GameSessionId) -> Result<Option<GameSession>, RepositoryError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT document FROM game_sessions WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(|(document,)| serde_json::from_str(&document))
            .transpose()
            .map_err(RepositoryError::from)
    }

    async fn enlist_character(
        &self,
        id: GameSessionId,
        character: &Character,
    ) -> Result<Option<GameSession>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // Write first so the transaction holds the write lock before reading the party
        sqlx::query("INSERT INTO characters (id, document) VALUES (?, ?)")
            .bind(character.id.to_string())
            .bind(serde_json::to_string(character)?)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT document FROM game_sessions WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error)?;
        let Some((document,)) = row else {
            tx.rollback().await.map_err(db_error)?;
            return Ok(None);
        };

        let mut session: GameSession = serde_json::from_str(&document)?;
        session.add_to_party(character.clone());

        sqlx::query(
            "UPDATE game_sessions SET document = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(serde_json::to_string(&session)?)
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        tracing::debug!(game_state_id = %id, character_id = %character.id, "Character enlisted");
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::CharacterRepositoryPort;
    use crate::domain::value_objects::CharacterClass;
    use crate::infrastructure::persistence::SqliteRepository;

    #[tokio::test]
    async fn test_create_and_get() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let sessions = repository.sessions();

        let session = GameSession::new("demo_player");
        sessions.create(&session).await.unwrap();
        assert_eq!(sessions.get(session.id).await.unwrap(), Some(session.clone()));

        assert!(sessions.get(GameSessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_enlist_stores_character_and_party() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let sessions = repository.sessions();

        let session = GameSession::new("demo_player");
        sessions.create(&session).await.unwrap();

        let murphy = Character::new("Murphy", CharacterClass::Detective);
        let updated = sessions
            .enlist_character(session.id, &murphy)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.party, vec![murphy.clone()]);

        let stored = sessions.get(session.id).await.unwrap().unwrap();
        assert_eq!(stored.party, vec![murphy.clone()]);
        assert_eq!(
            repository.characters().get(murphy.id).await.unwrap(),
            Some(murphy)
        );
    }

    #[tokio::test]
    async fn test_enlist_into_missing_session_writes_nothing() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let sessions = repository.sessions();

        let ghost = Character::new("Ghost", CharacterClass::Witch);
        let result = sessions
            .enlist_character(GameSessionId::new(), &ghost)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repository.characters().get(ghost.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_enlist_rolls_back_party_change() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let sessions = repository.sessions();

        let session = GameSession::new("demo_player");
        sessions.create(&session).await.unwrap();

        let murphy = Character::new("Murphy", CharacterClass::Detective);
        sessions.enlist_character(session.id, &murphy).await.unwrap();

        // Same id again: the character insert fails and the party is untouched
        let result = sessions.enlist_character(session.id, &murphy).await;
        assert!(matches!(result, Err(RepositoryError::Database(_))));

        let stored = sessions.get(session.id).await.unwrap().unwrap();
        assert_eq!(stored.party.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_enlists_keep_every_member() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let sessions = repository.sessions();

        let session = GameSession::new("demo_player");
        sessions.create(&session).await.unwrap();

        let morgana = Character::new("Morgana", CharacterClass::Witch);
        let eliza = Character::new("Eliza", CharacterClass::Scientist);
        let (first, second) = tokio::join!(
            sessions.enlist_character(session.id, &morgana),
            sessions.enlist_character(session.id, &eliza),
        );
        first.unwrap();
        second.unwrap();

        let stored = sessions.get(session.id).await.unwrap().unwrap();
        let names: Vec<_> = stored.party.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Morgana"));
        assert!(names.contains(&"Eliza"));
    }
}
