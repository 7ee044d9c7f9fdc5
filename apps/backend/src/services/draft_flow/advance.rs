//! Pick advancement and draft completion.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use super::DraftFlowService;
use crate::domain::timers;
use crate::entities::draft_order::AutoPickReason;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::leagues::League;
use crate::repos::{draft_order, draft_state, leagues, teams};

impl DraftFlowService {
    /// Move the draft forward after `completed_pick_number` finished.
    ///
    /// An explicit loop bounded by the league's total pick count: each
    /// iteration either installs a new current pick, completes the draft,
    /// or skips one capped-out entry and moves the cursor strictly
    /// forward. Several consecutive capped-out teams are therefore skipped
    /// in a single invocation without recursion.
    pub async fn advance_after(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        completed_pick_number: i32,
        now: OffsetDateTime,
    ) -> Result<(), AppError> {
        let teams = teams::find_all_by_league(txn, league.id).await?;
        let team_count = teams.len() as u16;
        let total_picks = draft_order::count_total(txn, league.id).await? as i32;
        let settings = leagues::find_settings(txn, league.id).await?;
        let league_secs = settings.as_ref().map(|s| s.draft_time_per_pick_secs);

        let mut cursor = completed_pick_number;

        for _ in 0..=total_picks {
            // League-wide cap exhaustion can only end the draft once every
            // team has had its grace-window picks.
            if timers::cap_check_allowed(cursor, team_count, &self.config)
                && !self.any_team_can_draft(txn, league, &teams).await?
            {
                info!(
                    league_id = league.id,
                    after_pick = cursor,
                    "no team can afford any remaining player; completing draft early"
                );
                return self.complete_draft(txn, league, now).await;
            }

            let Some(next) = draft_order::find_next_incomplete(txn, league.id, cursor).await?
            else {
                info!(league_id = league.id, "all picks exhausted; completing draft");
                return self.complete_draft(txn, league, now).await;
            };

            let team = teams
                .iter()
                .find(|t| t.draft_position == next.team_position)
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Team,
                        format!(
                            "no team at draft position {} in league {}",
                            next.team_position, league.id
                        ),
                    )
                })?;

            let affordability = self.team_affordability(txn, league, team.id).await?;
            if !affordability.can_draft(self.config.min_cap_threshold) {
                info!(
                    league_id = league.id,
                    pick_number = next.pick_number,
                    team = %team.team_name,
                    remaining_cap = affordability.remaining_cap,
                    "team capped out; skipping pick"
                );
                // Timer is stamped already-expired: the skip consumed the slot.
                draft_order::complete_if_incomplete(
                    txn,
                    next.id,
                    Some(AutoPickReason::InsufficientCapSpace),
                    true,
                    Some((now, now)),
                )
                .await?;
                cursor = next.pick_number;
                continue;
            }

            // This entry becomes the new current pick.
            let duration = timers::pick_duration(team.autodraft_enabled, league_secs, &self.config);
            draft_order::arm_timer_if_unset(txn, next.id, now, now + duration).await?;

            let completed = draft_order::count_completed(txn, league.id).await? as i32;
            draft_state::advance_cursor(
                txn,
                league.id,
                next.id,
                next.pick_number,
                next.round,
                completed,
                now,
            )
            .await?;

            debug!(
                league_id = league.id,
                pick_number = next.pick_number,
                round = next.round,
                team = %team.team_name,
                timer_secs = duration.whole_seconds(),
                autodraft = team.autodraft_enabled,
                "moved to next pick"
            );
            return Ok(());
        }

        // Unreachable while the cursor moves strictly forward; kept as a
        // hard stop against adversarial cap configurations.
        Err(AppError::internal(format!(
            "advance exceeded {total_picks} iterations for league {}",
            league.id
        )))
    }

    /// Terminal transition for the whole draft.
    pub async fn complete_draft(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        now: OffsetDateTime,
    ) -> Result<(), AppError> {
        let completed = draft_order::count_completed(txn, league.id).await? as i32;

        leagues::complete_draft(txn, league.id, now).await?;
        draft_state::complete_if_in_progress(txn, league.id, completed, now).await?;

        info!(
            league_id = league.id,
            completed_picks = completed,
            "draft completed"
        );
        Ok(())
    }
}
