//! SeaORM adapter for the per-league draft state singleton.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};
use time::OffsetDateTime;

use crate::entities::draft_state;
use crate::entities::leagues::DraftStatus;

pub async fn find_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<draft_state::Model>, sea_orm::DbErr> {
    draft_state::Entity::find()
        .filter(draft_state::Column::LeagueId.eq(league_id))
        .one(conn)
        .await
}

pub async fn require_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<draft_state::Model, sea_orm::DbErr> {
    find_by_league(conn, league_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Draft state not found".to_string()))
}

/// All in-progress draft states eligible for expiry processing.
pub async fn find_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Option<i64>,
) -> Result<Vec<draft_state::Model>, sea_orm::DbErr> {
    let mut query = draft_state::Entity::find()
        .filter(draft_state::Column::DraftStatus.eq(DraftStatus::InProgress))
        .filter(draft_state::Column::IsAutoPickActive.eq(true));
    if let Some(id) = league_id {
        query = query.filter(draft_state::Column::LeagueId.eq(id));
    }
    query.all(conn).await
}

#[derive(Debug, Clone)]
pub struct StateInit {
    pub league_id: i64,
    pub current_pick_id: i64,
    pub current_pick_number: i32,
    pub current_round: i16,
    pub total_picks: i32,
    pub completed_picks: i32,
    pub is_auto_pick_active: bool,
}

/// Create (or reset, if a concurrent run got there first) the draft state
/// singleton for a starting draft. The unique index on `league_id` makes
/// this an upsert rather than a race.
pub async fn upsert_for_start<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StateInit,
    now: OffsetDateTime,
) -> Result<draft_state::Model, sea_orm::DbErr> {
    let active = draft_state::ActiveModel {
        id: NotSet,
        league_id: Set(dto.league_id),
        current_pick_id: Set(Some(dto.current_pick_id)),
        current_pick_number: Set(dto.current_pick_number),
        current_round: Set(dto.current_round),
        draft_status: Set(DraftStatus::InProgress),
        is_auto_pick_active: Set(dto.is_auto_pick_active),
        total_picks: Set(dto.total_picks),
        completed_picks: Set(dto.completed_picks),
        draft_started_at: Set(Some(now)),
        draft_completed_at: Set(None),
        last_activity_at: Set(Some(now)),
    };

    draft_state::Entity::insert(active)
        .on_conflict(
            OnConflict::column(draft_state::Column::LeagueId)
                .update_columns([
                    draft_state::Column::CurrentPickId,
                    draft_state::Column::CurrentPickNumber,
                    draft_state::Column::CurrentRound,
                    draft_state::Column::DraftStatus,
                    draft_state::Column::IsAutoPickActive,
                    draft_state::Column::TotalPicks,
                    draft_state::Column::CompletedPicks,
                    draft_state::Column::DraftStartedAt,
                    draft_state::Column::LastActivityAt,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;

    require_state(conn, dto.league_id).await
}

/// Move the cursor to a new current pick.
pub async fn advance_cursor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_id: i64,
    pick_number: i32,
    round: i16,
    completed_picks: i32,
    now: OffsetDateTime,
) -> Result<(), sea_orm::DbErr> {
    draft_state::Entity::update_many()
        .col_expr(
            draft_state::Column::CurrentPickId,
            Expr::val(Some(pick_id)).into(),
        )
        .col_expr(
            draft_state::Column::CurrentPickNumber,
            Expr::val(pick_number).into(),
        )
        .col_expr(draft_state::Column::CurrentRound, Expr::val(round).into())
        .col_expr(
            draft_state::Column::CompletedPicks,
            Expr::val(completed_picks).into(),
        )
        .col_expr(
            draft_state::Column::LastActivityAt,
            Expr::val(Some(now)).into(),
        )
        .filter(draft_state::Column::LeagueId.eq(league_id))
        .exec(conn)
        .await?;
    Ok(())
}

/// Terminal transition. Conditional on the state still being in progress so
/// overlapping completions collapse into one.
pub async fn complete_if_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    completed_picks: i32,
    now: OffsetDateTime,
) -> Result<bool, sea_orm::DbErr> {
    let result = draft_state::Entity::update_many()
        .col_expr(
            draft_state::Column::DraftStatus,
            Expr::val(DraftStatus::Completed).into(),
        )
        .col_expr(
            draft_state::Column::CompletedPicks,
            Expr::val(completed_picks).into(),
        )
        .col_expr(
            draft_state::Column::DraftCompletedAt,
            Expr::val(Some(now)).into(),
        )
        .col_expr(
            draft_state::Column::LastActivityAt,
            Expr::val(Some(now)).into(),
        )
        .filter(draft_state::Column::LeagueId.eq(league_id))
        .filter(draft_state::Column::DraftStatus.eq(DraftStatus::InProgress))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}
