//! The orchestrator run loop.
//!
//! Invoked every few seconds by the periodic ticker and ad hoc by
//! triggers. Trigger hints only narrow the scan and add a settling delay;
//! a bare periodic invocation discovers the same work on its own.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::DraftFlowService;
use crate::db::require_db;
use crate::domain::timers;
use crate::error::AppError;
use crate::repos::draft_state::StateInit;
use crate::repos::leagues::League;
use crate::repos::{draft_order, draft_state, leagues, teams};
use crate::state::app_state::AppState;

/// Bound on draft starts per cycle so a backlog cannot stall expiry
/// processing.
const MAX_STARTS_PER_CYCLE: u64 = 10;

/// Why this invocation fired. Hints only narrow the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    ManualStart,
    PickMade,
    DraftStartTimeReached,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerHint {
    pub trigger: TriggerKind,
    #[serde(default)]
    pub league_id: Option<i64>,
    #[serde(default)]
    pub pick_number: Option<i32>,
}

/// Per-invocation result returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub success: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub drafts_started: u32,
    pub drafts_processed: u32,
}

impl DraftFlowService {
    /// One orchestration cycle.
    ///
    /// Each league is handled in its own transaction behind its own error
    /// boundary: a failing league is logged, left untouched for the next
    /// cycle, and never blocks the rest of the scan.
    pub async fn run_cycle(
        &self,
        state: &AppState,
        trigger: Option<TriggerHint>,
    ) -> Result<RunSummary, AppError> {
        if let Some(hint) = &trigger {
            debug!(trigger = ?hint.trigger, league_id = ?hint.league_id, "cycle triggered");
            // Let the write that fired the trigger settle before scanning.
            if self.config.settle_delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.config.settle_delay_ms))
                    .await;
            }
        }

        let db = require_db(state)?;
        let now = OffsetDateTime::now_utc();
        let league_filter = trigger.as_ref().and_then(|t| t.league_id);

        // Step 1: start drafts whose scheduled instant has passed.
        let mut drafts_started = 0u32;
        let startable =
            leagues::find_startable(db, now, league_filter, MAX_STARTS_PER_CYCLE).await?;
        for league in &startable {
            match self.start_league_guarded(db, league, now).await {
                Ok(true) => drafts_started += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(league_id = league.id, error = %e, "draft start failed; retrying next cycle");
                }
            }
        }

        // Step 2: advance in-progress drafts whose current pick needs action.
        let mut drafts_processed = 0u32;
        let states = draft_state::find_in_progress(db, league_filter).await?;
        for draft in &states {
            match self.process_league_guarded(db, draft.league_id, now).await {
                Ok(true) => drafts_processed += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(league_id = draft.league_id, error = %e, "draft processing failed; retrying next cycle");
                }
            }
        }

        // Step 3: recover in-progress leagues with no draft state at all.
        let in_progress = leagues::find_in_progress(db, league_filter).await?;
        for league in &in_progress {
            if states.iter().any(|s| s.league_id == league.id) {
                continue;
            }
            if let Err(e) = self.heal_league_guarded(db, league, now).await {
                warn!(league_id = league.id, error = %e, "draft state recovery failed; retrying next cycle");
            }
        }

        if drafts_started > 0 || drafts_processed > 0 {
            info!(drafts_started, drafts_processed, "draft cycle completed");
        }

        Ok(RunSummary {
            success: true,
            timestamp: now,
            drafts_started,
            drafts_processed,
        })
    }

    async fn start_league_guarded(
        &self,
        db: &DatabaseConnection,
        league: &League,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let txn = db
            .begin()
            .await
            .map_err(|e| AppError::db(format!("failed to begin transaction: {e}")))?;
        match self.start_draft(&txn, league, now).await {
            Ok(started) => {
                txn.commit()
                    .await
                    .map_err(|e| AppError::db(format!("failed to commit transaction: {e}")))?;
                Ok(started)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn process_league_guarded(
        &self,
        db: &DatabaseConnection,
        league_id: i64,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let txn = db
            .begin()
            .await
            .map_err(|e| AppError::db(format!("failed to begin transaction: {e}")))?;
        match self.process_current_pick(&txn, league_id, now).await {
            Ok(acted) => {
                txn.commit()
                    .await
                    .map_err(|e| AppError::db(format!("failed to commit transaction: {e}")))?;
                Ok(acted)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    /// Inspect the league's current pick and act on it.
    ///
    /// Returns true when something was done: an expired pick processed, a
    /// stalled timer re-armed, or a stale cursor caught up.
    pub async fn process_current_pick(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let league = leagues::require_league(txn, league_id).await?;
        let draft = draft_state::require_state(txn, league_id).await?;

        let entry = match draft.current_pick_id {
            Some(id) => draft_order::find_by_id(txn, id).await?,
            None => draft_order::find_lowest_incomplete(txn, league_id).await?,
        };
        let Some(entry) = entry else {
            // Order exhausted but state still live: treat as completion.
            self.complete_draft(txn, &league, now).await?;
            return Ok(true);
        };

        if entry.is_completed {
            // A manual pick completed the entry; catch the cursor up.
            debug!(
                league_id,
                pick_number = entry.pick_number,
                "current entry already completed; advancing cursor"
            );
            self.advance_after(txn, &league, entry.pick_number, now).await?;
            return Ok(true);
        }

        if entry.time_expires.is_none() {
            // Stalled pick: live, current, but never armed.
            return self.heal_stalled_pick(txn, &league, entry.id, now).await;
        }

        if entry.is_expired(now) {
            self.process_draft_pick(txn, &league, entry.id, now).await?;
            return Ok(true);
        }

        debug!(
            league_id,
            pick_number = entry.pick_number,
            "current pick still on the clock"
        );
        Ok(false)
    }

    /// Re-arm a current entry whose timer was never set.
    ///
    /// Idempotent: the conditional arm only fires while `time_expires` is
    /// still null, so a second healing pass is a no-op.
    pub async fn heal_stalled_pick(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        entry_id: i64,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let entry = draft_order::require_entry(txn, entry_id).await?;
        if entry.is_completed || entry.time_expires.is_some() {
            return Ok(false);
        }

        let team = teams::require_by_position(txn, league.id, entry.team_position).await?;
        let settings = leagues::find_settings(txn, league.id).await?;
        let duration = timers::pick_duration(
            team.autodraft_enabled,
            settings.as_ref().map(|s| s.draft_time_per_pick_secs),
            &self.config,
        );

        let armed = draft_order::arm_timer_if_unset(txn, entry.id, now, now + duration).await?;
        if armed {
            info!(
                league_id = league.id,
                pick_number = entry.pick_number,
                timer_secs = duration.whole_seconds(),
                "recovered stalled pick with a fresh timer"
            );
        }
        Ok(armed)
    }

    async fn heal_league_guarded(
        &self,
        db: &DatabaseConnection,
        league: &League,
        now: OffsetDateTime,
    ) -> Result<(), AppError> {
        let txn = db
            .begin()
            .await
            .map_err(|e| AppError::db(format!("failed to begin transaction: {e}")))?;
        match self.heal_missing_state(&txn, league, now).await {
            Ok(()) => {
                txn.commit()
                    .await
                    .map_err(|e| AppError::db(format!("failed to commit transaction: {e}")))?;
                Ok(())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    /// Rebuild the draft state singleton for an in-progress league that
    /// lost it, pointing at the lowest incomplete entry.
    pub async fn heal_missing_state(
        &self,
        txn: &DatabaseTransaction,
        league: &League,
        now: OffsetDateTime,
    ) -> Result<(), AppError> {
        if draft_state::find_by_league(txn, league.id).await?.is_some() {
            return Ok(());
        }

        warn!(
            league_id = league.id,
            "in-progress league has no draft state; rebuilding"
        );

        let Some(current) = draft_order::find_lowest_incomplete(txn, league.id).await? else {
            // Nothing left to pick; close the draft out.
            self.complete_draft(txn, league, now).await?;
            return Ok(());
        };

        let settings = leagues::find_settings(txn, league.id).await?;
        let total_picks = draft_order::count_total(txn, league.id).await? as i32;
        let completed = draft_order::count_completed(txn, league.id).await? as i32;

        draft_state::upsert_for_start(
            txn,
            StateInit {
                league_id: league.id,
                current_pick_id: current.id,
                current_pick_number: current.pick_number,
                current_round: current.round as i16,
                total_picks,
                completed_picks: completed,
                is_auto_pick_active: settings
                    .as_ref()
                    .map(|s| s.draft_auto_pick_enabled)
                    .unwrap_or(true),
            },
            now,
        )
        .await?;

        // Same recovery rule as a stalled pick: arm a fresh timer if none.
        self.heal_stalled_pick(txn, league, current.id, now).await?;
        Ok(())
    }
}
