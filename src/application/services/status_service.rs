//! Status Service - client liveness pings

use std::sync::Arc;

use tracing::debug;

use crate::application::error::GameResult;
use crate::application::ports::outbound::StatusCheckRepositoryPort;
use crate::domain::entities::StatusCheck;

/// Upper bound on how many checks a listing returns
pub const STATUS_LIST_LIMIT: u32 = 1000;

pub struct StatusService {
    checks: Arc<dyn StatusCheckRepositoryPort>,
}

impl StatusService {
    pub fn new(checks: Arc<dyn StatusCheckRepositoryPort>) -> Self {
        Self { checks }
    }

    pub async fn record(&self, client_name: &str) -> GameResult<StatusCheck> {
        let check = StatusCheck::new(client_name);
        self.checks.create(&check).await?;
        debug!(client_name, "Recorded status check");
        Ok(check)
    }

    pub async fn list(&self) -> GameResult<Vec<StatusCheck>> {
        Ok(self.checks.list(STATUS_LIST_LIMIT).await?)
    }
}
