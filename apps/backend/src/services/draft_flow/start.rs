//! Draft start: scheduled -> in progress.

use sea_orm::DatabaseTransaction;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use super::DraftFlowService;
use crate::entities::leagues::DraftStatus;
use crate::error::AppError;
use crate::repos::draft_state::StateInit;
use crate::repos::leagues::League;
use crate::repos::{draft_order, draft_state, leagues};

impl DraftFlowService {
    /// Start a league's draft: flip the league status, create the draft
    /// state singleton pointing at pick #1 and arm its timer.
    ///
    /// Returns false when nothing was started - either pick #1 is missing
    /// (the league is left `scheduled` and retried next cycle) or a
    /// concurrent run won the status flip.
    pub async fn start_draft(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        info!(league_id = league.id, name = %league.name, "starting draft");

        let Some(first_pick) = draft_order::find_by_pick_number(txn, league.id, 1).await? else {
            warn!(
                league_id = league.id,
                "pick #1 missing from draft order; leaving league scheduled for retry"
            );
            return Ok(false);
        };

        // The conditional status flip is the claim on this league: the run
        // that loses it leaves everything untouched.
        let claimed = leagues::set_draft_status_if(
            txn,
            league.id,
            DraftStatus::Scheduled,
            DraftStatus::InProgress,
            now,
        )
        .await?;
        if !claimed {
            debug!(league_id = league.id, "draft already started by another run");
            return Ok(false);
        }

        let settings = leagues::find_settings(txn, league.id).await?;
        let total_picks = draft_order::count_total(txn, league.id).await? as i32;

        draft_state::upsert_for_start(
            txn,
            StateInit {
                league_id: league.id,
                current_pick_id: first_pick.id,
                current_pick_number: first_pick.pick_number,
                current_round: first_pick.round as i16,
                total_picks,
                completed_picks: 0,
                is_auto_pick_active: settings
                    .as_ref()
                    .map(|s| s.draft_auto_pick_enabled)
                    .unwrap_or(true),
            },
            now,
        )
        .await?;

        // First pick always gets the full human-facing window.
        let secs = settings
            .as_ref()
            .map(|s| s.draft_time_per_pick_secs)
            .unwrap_or(self.config.default_time_per_pick_secs);
        draft_order::arm_timer_if_unset(txn, first_pick.id, now, now + Duration::seconds(secs))
            .await?;

        info!(league_id = league.id, total_picks, timer_secs = secs, "draft started");
        Ok(true)
    }
}
