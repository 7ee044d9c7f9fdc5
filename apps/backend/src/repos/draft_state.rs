//! Draft state repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::draft_state_sea as state_adapter;
use crate::entities::draft_state;
use crate::entities::leagues::DraftStatus;
use crate::errors::domain::DomainError;

pub use state_adapter::StateInit;

/// The per-league draft cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftState {
    pub league_id: i64,
    pub current_pick_id: Option<i64>,
    pub current_pick_number: i32,
    pub current_round: u8,
    pub draft_status: DraftStatus,
    pub is_auto_pick_active: bool,
    pub total_picks: i32,
    pub completed_picks: i32,
    pub draft_started_at: Option<OffsetDateTime>,
    pub draft_completed_at: Option<OffsetDateTime>,
    pub last_activity_at: Option<OffsetDateTime>,
}

pub async fn find_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<DraftState>, DomainError> {
    let state = state_adapter::find_by_league(conn, league_id).await?;
    Ok(state.map(DraftState::from))
}

pub async fn require_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<DraftState, DomainError> {
    let state = state_adapter::require_state(conn, league_id).await?;
    Ok(DraftState::from(state))
}

pub async fn find_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Option<i64>,
) -> Result<Vec<DraftState>, DomainError> {
    let states = state_adapter::find_in_progress(conn, league_id).await?;
    Ok(states.into_iter().map(DraftState::from).collect())
}

pub async fn upsert_for_start<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StateInit,
    now: OffsetDateTime,
) -> Result<DraftState, DomainError> {
    let state = state_adapter::upsert_for_start(conn, dto, now).await?;
    Ok(DraftState::from(state))
}

pub async fn advance_cursor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_id: i64,
    pick_number: i32,
    round: u8,
    completed_picks: i32,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    Ok(state_adapter::advance_cursor(
        conn,
        league_id,
        pick_id,
        pick_number,
        round as i16,
        completed_picks,
        now,
    )
    .await?)
}

pub async fn complete_if_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    completed_picks: i32,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    Ok(state_adapter::complete_if_in_progress(conn, league_id, completed_picks, now).await?)
}

// Conversions between SeaORM models and domain models

impl From<draft_state::Model> for DraftState {
    fn from(model: draft_state::Model) -> Self {
        Self {
            league_id: model.league_id,
            current_pick_id: model.current_pick_id,
            current_pick_number: model.current_pick_number,
            current_round: model.current_round as u8,
            draft_status: model.draft_status,
            is_auto_pick_active: model.is_auto_pick_active,
            total_picks: model.total_picks,
            completed_picks: model.completed_picks,
            draft_started_at: model.draft_started_at,
            draft_completed_at: model.draft_completed_at,
            last_activity_at: model.last_activity_at,
        }
    }
}
