//! Draft order repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::draft_order_sea as order_adapter;
use crate::entities::draft_order;
use crate::entities::draft_order::AutoPickReason;
use crate::errors::domain::DomainError;

pub use order_adapter::EntryCreate;

/// Draft order entry domain model.
///
/// Entries are created once, in full, before the draft starts and are only
/// ever mutated to flip `is_completed`, stamp timer fields, or attach an
/// `auto_pick_reason` - never reordered or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftOrderEntry {
    pub id: i64,
    pub league_id: i64,
    pub pick_number: i32,
    pub round: u8,
    pub team_position: u16,
    pub is_completed: bool,
    pub is_auto_picked: bool,
    pub auto_pick_reason: Option<AutoPickReason>,
    pub time_started: Option<OffsetDateTime>,
    pub time_expires: Option<OffsetDateTime>,
}

impl DraftOrderEntry {
    /// Whether the pick clock has run out as of `now`. An unarmed timer
    /// never counts as expired; it is the stalled-pick recovery case.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        matches!(self.time_expires, Some(expires) if expires <= now)
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Option<DraftOrderEntry>, DomainError> {
    let entry = order_adapter::find_by_id(conn, entry_id).await?;
    Ok(entry.map(DraftOrderEntry::from))
}

pub async fn require_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<DraftOrderEntry, DomainError> {
    let entry = order_adapter::require_entry(conn, entry_id).await?;
    Ok(DraftOrderEntry::from(entry))
}

pub async fn find_by_pick_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_number: i32,
) -> Result<Option<DraftOrderEntry>, DomainError> {
    let entry = order_adapter::find_by_league_and_pick_number(conn, league_id, pick_number).await?;
    Ok(entry.map(DraftOrderEntry::from))
}

pub async fn find_next_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    after_pick_number: i32,
) -> Result<Option<DraftOrderEntry>, DomainError> {
    let entry = order_adapter::find_next_incomplete(conn, league_id, after_pick_number).await?;
    Ok(entry.map(DraftOrderEntry::from))
}

pub async fn find_lowest_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<DraftOrderEntry>, DomainError> {
    let entry = order_adapter::find_lowest_incomplete(conn, league_id).await?;
    Ok(entry.map(DraftOrderEntry::from))
}

pub async fn count_total<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<u64, DomainError> {
    Ok(order_adapter::count_total(conn, league_id).await?)
}

pub async fn count_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<u64, DomainError> {
    Ok(order_adapter::count_completed(conn, league_id).await?)
}

pub async fn max_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<u8>, DomainError> {
    let round = order_adapter::max_round(conn, league_id).await?;
    Ok(round.map(|r| r as u8))
}

/// Conditionally complete an entry; false means it was already completed.
pub async fn complete_if_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    reason: Option<AutoPickReason>,
    is_auto_picked: bool,
    timer: Option<(OffsetDateTime, OffsetDateTime)>,
) -> Result<bool, DomainError> {
    Ok(order_adapter::complete_if_incomplete(conn, entry_id, reason, is_auto_picked, timer).await?)
}

/// Arm the pick timer if it is unset; false means it was already armed (or
/// the entry is gone/completed).
pub async fn arm_timer_if_unset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    started: OffsetDateTime,
    expires: OffsetDateTime,
) -> Result<bool, DomainError> {
    Ok(order_adapter::arm_timer_if_unset(conn, entry_id, started, expires).await?)
}

/// Seed the complete order for a league before its draft starts.
pub async fn seed_entries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entries: Vec<EntryCreate>,
) -> Result<(), DomainError> {
    Ok(order_adapter::create_entries(conn, entries).await?)
}

// Conversions between SeaORM models and domain models

impl From<draft_order::Model> for DraftOrderEntry {
    fn from(model: draft_order::Model) -> Self {
        Self {
            id: model.id,
            league_id: model.league_id,
            pick_number: model.pick_number,
            round: model.round as u8,
            team_position: model.team_position as u16,
            is_completed: model.is_completed,
            is_auto_picked: model.is_auto_picked,
            auto_pick_reason: model.auto_pick_reason,
            time_started: model.time_started,
            time_expires: model.time_expires,
        }
    }
}
