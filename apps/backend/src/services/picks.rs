//! Manual pick service - the human write path.
//!
//! Obeys the same storage-level precondition as the orchestrator: a pick
//! can only be committed onto a still-incomplete entry. The cursor is not
//! advanced here; the next orchestrator cycle (usually fired immediately
//! via a `pick_made` trigger) observes the completed entry and moves on.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::picks::CommitOutcome;
use crate::repos::{draft_order, draft_state, leagues, picks, players, teams};

#[derive(Default)]
pub struct PickService;

impl PickService {
    /// Commit a human selection for the league's current pick.
    pub async fn make_manual_pick(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        pick_number: i32,
        player_id: i64,
    ) -> Result<(), AppError> {
        let league = leagues::require_league(txn, league_id).await?;
        let entry = draft_order::find_by_pick_number(txn, league_id, pick_number)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "DRAFT_ORDER_ENTRY_NOT_FOUND",
                    format!("pick {pick_number} not found in league {league_id}"),
                )
            })?;

        if entry.is_completed {
            return Err(DomainError::conflict(
                ConflictKind::PickAlreadyCompleted,
                format!("pick {pick_number} is already completed"),
            )
            .into());
        }

        // Only the current pick may be filled by hand.
        let draft = draft_state::require_state(txn, league_id).await?;
        if draft.current_pick_number != pick_number {
            return Err(AppError::bad_request(
                "NOT_CURRENT_PICK",
                format!(
                    "pick {pick_number} is not on the clock (current is {})",
                    draft.current_pick_number
                ),
            ));
        }

        let team = teams::require_by_position(txn, league_id, entry.team_position).await?;
        let player = players::require_player(txn, player_id).await?;

        let current_salary = picks::team_salary(txn, team.id).await?;
        let remaining_cap = league.salary_cap_amount - current_salary;
        if player.salary > remaining_cap {
            return Err(AppError::invalid(
                "OVER_SALARY_CAP",
                format!(
                    "{} costs {} but the team has only {} in cap space",
                    player.full_name, player.salary, remaining_cap
                ),
            ));
        }

        let now = OffsetDateTime::now_utc();
        // Human picks carry no auto-pick reason.
        let outcome = picks::commit_pick(txn, &entry, team.id, player_id, None, now).await?;
        if outcome == CommitOutcome::AlreadyCompleted {
            return Err(DomainError::conflict(
                ConflictKind::PickAlreadyCompleted,
                format!("pick {pick_number} was completed concurrently"),
            )
            .into());
        }

        info!(
            league_id,
            pick_number,
            team_id = team.id,
            player_id,
            "manual pick committed"
        );
        Ok(())
    }
}
