//! Committed picks repository: the roster/cap side of the store.
//!
//! `commit_pick` is the one write path that assigns a player to a team. It
//! couples the conditional completion of the order entry with the roster
//! insert inside the caller's transaction, so either both happen or
//! neither does.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::picks_sea as picks_adapter;
use crate::entities::draft_order::AutoPickReason;
use crate::errors::domain::DomainError;
use crate::repos::draft_order::{self, DraftOrderEntry};

pub use picks_adapter::PickCreate;

/// Outcome of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// This call completed the entry and inserted the roster row.
    Committed,
    /// The entry was already completed by another writer; nothing changed.
    AlreadyCompleted,
}

/// Atomically assign `player_id` to `team_id` for the given order entry.
///
/// The conditional entry completion is attempted first; if it reports the
/// entry as already completed, the roster insert is skipped entirely and
/// the caller observes `AlreadyCompleted`. Running inside one transaction
/// makes the pair atomic.
pub async fn commit_pick(
    txn: &DatabaseTransaction,
    entry: &DraftOrderEntry,
    team_id: i64,
    player_id: i64,
    reason: Option<AutoPickReason>,
    now: OffsetDateTime,
) -> Result<CommitOutcome, DomainError> {
    let timer = if entry.time_expires.is_none() {
        // Manual picks on a not-yet-armed entry still stamp the window.
        Some((now, now))
    } else {
        None
    };

    let won =
        draft_order::complete_if_incomplete(txn, entry.id, reason, reason.is_some(), timer).await?;
    if !won {
        return Ok(CommitOutcome::AlreadyCompleted);
    }

    picks_adapter::insert_pick(
        txn,
        PickCreate {
            league_id: entry.league_id,
            pick_number: entry.pick_number,
            round: entry.round as i16,
            fantasy_team_id: team_id,
            player_id,
        },
    )
    .await?;

    Ok(CommitOutcome::Committed)
}

/// Current payroll for a team: the sum of its drafted players' salaries.
pub async fn team_salary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<i64, DomainError> {
    let picks = picks_adapter::find_by_team_with_players(conn, team_id).await?;
    Ok(picks
        .into_iter()
        .filter_map(|(_, player)| player)
        .map(|p| p.salary)
        .sum())
}

pub async fn drafted_player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(picks_adapter::drafted_player_ids(conn, league_id).await?)
}

/// How many picks a team has already made in this draft.
pub async fn count_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    team_id: i64,
) -> Result<u64, DomainError> {
    Ok(picks_adapter::count_by_team(conn, league_id, team_id).await?)
}

pub async fn find_by_pick_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_number: i32,
) -> Result<Option<crate::entities::draft_picks::Model>, DomainError> {
    Ok(picks_adapter::find_by_league_and_pick_number(conn, league_id, pick_number).await?)
}
