//! Expired-pick handling: auto-pick, forced autodraft, cap-out skips.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{info, warn};

use super::DraftFlowService;
use crate::entities::draft_order::AutoPickReason;
use crate::error::AppError;
use crate::ranking::{fallback_player, BestPickQuery, RankedPlayer};
use crate::repos::leagues::League;
use crate::repos::picks::CommitOutcome;
use crate::repos::{draft_order, messages, picks, teams};

/// What processing an entry actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// A player was committed to the team's roster.
    Drafted { player_id: i64 },
    /// Entry skipped: the team cannot afford any remaining player.
    SkippedInsufficientCap,
    /// Entry skipped: affordability held but no candidate was found.
    SkippedNoEligiblePlayers,
    /// Another writer completed the entry first; nothing was mutated.
    AlreadyCompleted,
    /// The timer has not actually expired; nothing was mutated.
    TimerNotExpired,
}

impl DraftFlowService {
    /// Process the current pick of an in-progress draft whose timer has
    /// expired.
    ///
    /// The entry is reloaded and its precondition re-checked inside the
    /// transaction, so calling this twice for the same entry (or from two
    /// overlapping runs) mutates at most once.
    pub async fn process_draft_pick(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        entry_id: i64,
        now: OffsetDateTime,
    ) -> Result<ProcessOutcome, AppError> {
        let entry = draft_order::require_entry(txn, entry_id).await?;
        if entry.is_completed {
            return Ok(ProcessOutcome::AlreadyCompleted);
        }
        if !entry.is_expired(now) {
            return Ok(ProcessOutcome::TimerNotExpired);
        }

        let team = teams::require_by_position(txn, league.id, entry.team_position).await?;
        let was_autodraft = team.autodraft_enabled;

        info!(
            league_id = league.id,
            pick_number = entry.pick_number,
            round = entry.round,
            team = %team.team_name,
            autodraft = was_autodraft,
            "pick timer expired; auto-picking"
        );

        let total_rounds = draft_order::max_round(txn, league.id).await?.unwrap_or(15);
        let completed_by_team = picks::count_by_team(txn, league.id, team.id).await? as i32;
        let picks_remaining = i32::from(total_rounds) - completed_by_team;

        let query = BestPickQuery {
            league_id: league.id,
            team_id: team.id,
            round: entry.round,
            picks_remaining,
            total_rounds,
        };
        let ranked = self.oracle.best_affordable_player(txn, &query).await?;

        let selection: Option<RankedPlayer> = match ranked {
            Some(player) => Some(player),
            None => {
                // The oracle's ranking criteria are stricter than raw
                // affordability; re-check before declaring the team capped.
                let affordability = self.team_affordability(txn, league, team.id).await?;
                if !affordability.can_draft(self.config.min_cap_threshold) {
                    info!(
                        league_id = league.id,
                        pick_number = entry.pick_number,
                        team = %team.team_name,
                        remaining_cap = affordability.remaining_cap,
                        "team capped out; skipping pick"
                    );
                    return self
                        .skip_entry(txn, league, &entry, AutoPickReason::InsufficientCapSpace, now)
                        .await;
                }

                info!(
                    league_id = league.id,
                    pick_number = entry.pick_number,
                    "primary ranking returned nothing; using salary fallback"
                );
                fallback_player(txn, league.id, affordability.remaining_cap).await?
            }
        };

        let Some(player) = selection else {
            // Affordability said yes but both tiers came up empty.
            return self
                .skip_entry(txn, league, &entry, AutoPickReason::NoEligiblePlayers, now)
                .await;
        };

        let reason = if was_autodraft {
            AutoPickReason::AutodraftEnabled
        } else {
            AutoPickReason::TimeExpired
        };

        let outcome =
            picks::commit_pick(txn, &entry, team.id, player.player_id, Some(reason), now).await?;
        if outcome == CommitOutcome::AlreadyCompleted {
            return Ok(ProcessOutcome::AlreadyCompleted);
        }

        if !was_autodraft {
            // Missed pick: autodraft is forced on for the rest of the draft.
            let flipped = teams::enable_autodraft_if_disabled(txn, team.id, now).await?;
            if flipped {
                info!(
                    league_id = league.id,
                    team_id = team.id,
                    "enabled autodraft for team after missed pick"
                );
                // Best-effort feed entry; a missed message never fails the pick.
                if let Err(e) = messages::post_system_message(
                    txn,
                    league.id,
                    "autodraft_enabled",
                    &format!(
                        "{} missed their pick - autodraft is on for the rest of the draft",
                        team.team_name
                    ),
                )
                .await
                {
                    warn!(league_id = league.id, error = %e, "failed to post activity message");
                }
            }
        }

        info!(
            league_id = league.id,
            pick_number = entry.pick_number,
            player_id = player.player_id,
            salary = player.salary,
            over_average_budget = player.is_over_average_budget,
            remaining_cap_after = player.remaining_cap_after,
            "auto-picked player"
        );

        self.advance_after(txn, league, entry.pick_number, now).await?;
        Ok(ProcessOutcome::Drafted {
            player_id: player.player_id,
        })
    }

    /// Complete an entry without assigning a player, then advance.
    async fn skip_entry(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        entry: &crate::repos::draft_order::DraftOrderEntry,
        reason: AutoPickReason,
        now: OffsetDateTime,
    ) -> Result<ProcessOutcome, AppError> {
        let won =
            draft_order::complete_if_incomplete(txn, entry.id, Some(reason), true, Some((now, now)))
                .await?;
        if !won {
            return Ok(ProcessOutcome::AlreadyCompleted);
        }

        self.advance_after(txn, league, entry.pick_number, now).await?;
        Ok(match reason {
            AutoPickReason::InsufficientCapSpace => ProcessOutcome::SkippedInsufficientCap,
            _ => ProcessOutcome::SkippedNoEligiblePlayers,
        })
    }
}
