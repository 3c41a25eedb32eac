//! Combat Service - starting, loading and ending encounters

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::error::{GameError, GameResult};
use crate::application::ports::outbound::{CombatRepositoryPort, GameSessionRepositoryPort};
use crate::application::services::ImageService;
use crate::domain::catalog::ContentCatalog;
use crate::domain::entities::{Character, CombatEncounter, Enemy};
use crate::domain::value_objects::{CombatId, GameSessionId};

#[async_trait]
pub trait CombatService: Send + Sync {
    /// Roll initiative for the given sides and open an encounter
    fn start_combat(
        &self,
        game_session_id: GameSessionId,
        party: Vec<Character>,
        enemies: Vec<Enemy>,
    ) -> CombatEncounter;

    /// Start combat between a stored session's party and the first
    /// `enemy_count` roster entries (service default when `None`)
    async fn start_for_session(
        &self,
        game_session_id: GameSessionId,
        enemy_count: Option<usize>,
    ) -> GameResult<CombatEncounter>;

    async fn get_combat(&self, id: CombatId) -> GameResult<CombatEncounter>;

    async fn end_combat(&self, id: CombatId) -> GameResult<CombatEncounter>;
}

pub struct CombatServiceImpl {
    catalog: Arc<ContentCatalog>,
    images: Arc<ImageService>,
    sessions: Arc<dyn GameSessionRepositoryPort>,
    combats: Arc<dyn CombatRepositoryPort>,
    default_enemy_count: usize,
}

impl CombatServiceImpl {
    pub fn new(
        catalog: Arc<ContentCatalog>,
        images: Arc<ImageService>,
        sessions: Arc<dyn GameSessionRepositoryPort>,
        combats: Arc<dyn CombatRepositoryPort>,
        default_enemy_count: usize,
    ) -> Self {
        Self {
            catalog,
            images,
            sessions,
            combats,
            default_enemy_count,
        }
    }

    /// At least one enemy, at most the whole roster
    fn enemy_count(&self, requested: Option<usize>) -> usize {
        let roster = self.catalog.enemy_templates().len().max(1);
        requested
            .unwrap_or(self.default_enemy_count)
            .clamp(1, roster)
    }
}

#[async_trait]
impl CombatService for CombatServiceImpl {
    fn start_combat(
        &self,
        game_session_id: GameSessionId,
        party: Vec<Character>,
        enemies: Vec<Enemy>,
    ) -> CombatEncounter {
        let mut rng = rand::thread_rng();
        CombatEncounter::start(game_session_id, party, enemies, &mut rng)
    }

    #[instrument(skip(self))]
    async fn start_for_session(
        &self,
        game_session_id: GameSessionId,
        enemy_count: Option<usize>,
    ) -> GameResult<CombatEncounter> {
        let session = self
            .sessions
            .get(game_session_id)
            .await?
            .ok_or_else(|| GameError::not_found("Game state", game_session_id))?;

        let enemies = self
            .catalog
            .instantiate_first_enemies(self.enemy_count(enemy_count));
        let enemies = self.images.illustrate_enemies(enemies).await;

        let combat = self.start_combat(session.id, session.party, enemies);
        self.combats.create(&combat).await?;

        info!(
            combat_id = %combat.id,
            party_size = combat.party.len(),
            enemy_count = combat.enemies.len(),
            "Combat started"
        );
        Ok(combat)
    }

    async fn get_combat(&self, id: CombatId) -> GameResult<CombatEncounter> {
        self.combats
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found("Combat", id))
    }

    #[instrument(skip(self))]
    async fn end_combat(&self, id: CombatId) -> GameResult<CombatEncounter> {
        let mut combat = self.get_combat(id).await?;
        if combat.is_active {
            combat.end();
            self.combats.update(&combat).await?;
            info!(combat_id = %id, "Combat ended");
        }
        Ok(combat)
    }
}
