//! Team-level settings service.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::repos::teams;
use crate::repos::teams::Team;

#[derive(Default)]
pub struct TeamService;

impl TeamService {
    /// Human-facing autodraft toggle. Distinct from the orchestrator's
    /// forced enable: a human may turn the flag either way between picks.
    pub async fn set_autodraft(
        &self,
        txn: &DatabaseTransaction,
        team_id: i64,
        enabled: bool,
    ) -> Result<Team, AppError> {
        let now = OffsetDateTime::now_utc();
        let team = teams::set_autodraft(txn, team_id, enabled, now).await?;
        info!(team_id, enabled, "autodraft toggled");
        Ok(team)
    }
}
