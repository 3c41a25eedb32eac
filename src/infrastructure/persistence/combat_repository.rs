//! Combat encounter repository implementation for SQLite

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::db_error;
use crate::application::ports::outbound::{CombatRepositoryPort, RepositoryError};
use crate::domain::entities::CombatEncounter;
use crate::domain::value_objects::CombatId;

pub struct SqliteCombatRepository {
    pool: SqlitePool,
}

impl SqliteCombatRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CombatRepositoryPort for SqliteCombatRepository {
    async fn create(&self, combat: &CombatEncounter) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(combat)?;
        sqlx::query(
            "INSERT INTO combat_encounters (id, game_session_id, is_active, document) VALUES (?, ?, ?, ?)",
        )
        .bind(combat.id.to_string())
        .bind(combat.game_session_id.to_string())
        .bind(combat.is_active)
        .bind(document)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn get(&self, id: CombatId) -> Result<Option<CombatEncounter>, RepositoryError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT document FROM combat_encounters WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(|(document,)| serde_json::from_str(&document))
            .transpose()
            .map_err(RepositoryError::from)
    }

    async fn update(&self, combat: &CombatEncounter) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(combat)?;
        sqlx::query(
            "UPDATE combat_encounters SET is_active = ?, document = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(combat.is_active)
        .bind(document)
        .bind(combat.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ContentCatalog;
    use crate::domain::entities::Character;
    use crate::domain::value_objects::{CharacterClass, GameSessionId};
    use crate::infrastructure::persistence::SqliteRepository;

    #[tokio::test]
    async fn test_combat_round_trip_preserves_turn_order() {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let combats = repository.combats();

        let mut rng = rand::thread_rng();
        let mut combat = CombatEncounter::start(
            GameSessionId::new(),
            vec![Character::new("Marcus", CharacterClass::Healer)],
            ContentCatalog::arkham_demo().instantiate_first_enemies(2),
            &mut rng,
        );
        combats.create(&combat).await.unwrap();

        let stored = combats.get(combat.id).await.unwrap().unwrap();
        assert_eq!(stored.turn_order, combat.turn_order);
        assert!(stored.is_active);

        combat.end();
        combats.update(&combat).await.unwrap();
        assert!(!combats.get(combat.id).await.unwrap().unwrap().is_active);
    }
}
