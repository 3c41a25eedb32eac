use async_trait::async_trait;
use sqlx::SqlitePool;

use super::db_error;
use crate::application::ports::outbound::{RepositoryError, StatusCheckRepositoryPort};
use crate::domain::entities::StatusCheck;

pub struct SqliteStatusCheckRepository {
    pool: SqlitePool,
}

impl SqliteStatusCheckRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusCheckRepositoryPort for SqliteStatusCheckRepository {
    async fn create(&self, check: &StatusCheck) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(check)?;
        sqlx::query("INSERT INTO status_checks (id, timestamp, document) VALUES (?, ?, ?)")
            .bind(check.id.to_string())
            .bind(check.timestamp.to_rfc3339())
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn list(&self, limit: u32) -> Result<Vec<StatusCheck>, RepositoryError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT document FROM status_checks ORDER BY timestamp DESC LIMIT ?")
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter()
            .map(|(document,)| serde_json::from_str(&document).map_err(RepositoryError::from))
            .collect()
    }
}
