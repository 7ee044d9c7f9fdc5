//! Cap affordability checks shared by the auto-pick and advance paths.

use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::DraftFlowService;
use crate::error::AppError;
use crate::repos::leagues::League;
use crate::repos::teams::Team;
use crate::repos::{picks, players};

/// A team's cap position at decision time.
#[derive(Debug, Clone, Copy)]
pub(super) struct TeamAffordability {
    pub remaining_cap: i64,
    pub affordable_player_exists: bool,
}

impl TeamAffordability {
    /// A team can draft when it holds at least the minimum cap threshold
    /// and at least one undrafted player fits under its remaining cap.
    pub fn can_draft(&self, min_cap_threshold: i64) -> bool {
        self.remaining_cap >= min_cap_threshold && self.affordable_player_exists
    }
}

impl DraftFlowService {
    pub(super) async fn team_affordability(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        team_id: i64,
    ) -> Result<TeamAffordability, AppError> {
        let current_salary = picks::team_salary(txn, team_id).await?;
        let remaining_cap = league.salary_cap_amount - current_salary;

        if remaining_cap < self.config.min_cap_threshold {
            debug!(
                league_id = league.id,
                team_id, remaining_cap, "team under minimum cap threshold"
            );
            return Ok(TeamAffordability {
                remaining_cap,
                affordable_player_exists: false,
            });
        }

        let drafted = picks::drafted_player_ids(txn, league.id).await?;
        let affordable_player_exists =
            players::affordable_player_exists(txn, remaining_cap, &drafted).await?;

        if !affordable_player_exists {
            debug!(
                league_id = league.id,
                team_id,
                remaining_cap,
                drafted = drafted.len(),
                "no remaining player fits under the team's cap"
            );
        }

        Ok(TeamAffordability {
            remaining_cap,
            affordable_player_exists,
        })
    }

    /// True if at least one team in the league can still draft. Drives the
    /// early-completion decision once the grace window has passed.
    pub(super) async fn any_team_can_draft(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        teams: &[Team],
    ) -> Result<bool, AppError> {
        for team in teams {
            let affordability = self.team_affordability(txn, league, team.id).await?;
            if affordability.can_draft(self.config.min_cap_threshold) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
