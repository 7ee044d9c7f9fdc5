//! SeaORM adapter for the draft order table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use time::OffsetDateTime;

use crate::entities::draft_order;
use crate::entities::draft_order::AutoPickReason;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Option<draft_order::Model>, sea_orm::DbErr> {
    draft_order::Entity::find_by_id(entry_id).one(conn).await
}

/// Find entry by ID or return RecordNotFound error.
pub async fn require_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<draft_order::Model, sea_orm::DbErr> {
    find_by_id(conn, entry_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Draft order entry not found".to_string()))
}

pub async fn find_by_league_and_pick_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_number: i32,
) -> Result<Option<draft_order::Model>, sea_orm::DbErr> {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .filter(draft_order::Column::PickNumber.eq(pick_number))
        .one(conn)
        .await
}

/// Lowest-numbered incomplete entry strictly after `after_pick_number`.
pub async fn find_next_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    after_pick_number: i32,
) -> Result<Option<draft_order::Model>, sea_orm::DbErr> {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .filter(draft_order::Column::IsCompleted.eq(false))
        .filter(draft_order::Column::PickNumber.gt(after_pick_number))
        .order_by_asc(draft_order::Column::PickNumber)
        .limit(1)
        .one(conn)
        .await
}

/// Lowest-numbered incomplete entry for the league, if any remain.
pub async fn find_lowest_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<draft_order::Model>, sea_orm::DbErr> {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .filter(draft_order::Column::IsCompleted.eq(false))
        .order_by_asc(draft_order::Column::PickNumber)
        .limit(1)
        .one(conn)
        .await
}

pub async fn count_total<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .count(conn)
        .await
}

pub async fn count_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .filter(draft_order::Column::IsCompleted.eq(true))
        .count(conn)
        .await
}

/// Highest round present in the league's draft order.
pub async fn max_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<i16>, sea_orm::DbErr> {
    let entry = draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .order_by_desc(draft_order::Column::Round)
        .limit(1)
        .one(conn)
        .await?;
    Ok(entry.map(|e| e.round))
}

/// Conditionally complete an entry.
///
/// The `is_completed = false` filter is the serialization point: of two
/// overlapping orchestrator runs, exactly one observes `rows_affected = 1`
/// and proceeds with the side effects; the loser sees `false` and must
/// treat the entry as already handled.
///
/// `timer` additionally stamps `time_started`/`time_expires` (used by the
/// cap-skip path, which marks the entry as expired the moment it is
/// skipped).
pub async fn complete_if_incomplete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    reason: Option<AutoPickReason>,
    is_auto_picked: bool,
    timer: Option<(OffsetDateTime, OffsetDateTime)>,
) -> Result<bool, sea_orm::DbErr> {
    let mut update = draft_order::Entity::update_many()
        .col_expr(draft_order::Column::IsCompleted, Expr::val(true).into())
        .col_expr(
            draft_order::Column::IsAutoPicked,
            Expr::val(is_auto_picked).into(),
        )
        .col_expr(draft_order::Column::AutoPickReason, Expr::val(reason).into());

    if let Some((started, expires)) = timer {
        update = update
            .col_expr(
                draft_order::Column::TimeStarted,
                Expr::val(Some(started)).into(),
            )
            .col_expr(
                draft_order::Column::TimeExpires,
                Expr::val(Some(expires)).into(),
            );
    }

    let result = update
        .filter(draft_order::Column::Id.eq(entry_id))
        .filter(draft_order::Column::IsCompleted.eq(false))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Arm the pick timer, but only if the entry is still live and has no timer.
///
/// The `time_expires IS NULL` filter makes both the advance path and the
/// stalled-pick recovery idempotent: re-arming an already-armed entry is a
/// no-op, so overlapping runs cannot stretch a pick's clock.
pub async fn arm_timer_if_unset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    started: OffsetDateTime,
    expires: OffsetDateTime,
) -> Result<bool, sea_orm::DbErr> {
    let result = draft_order::Entity::update_many()
        .col_expr(
            draft_order::Column::TimeStarted,
            Expr::val(Some(started)).into(),
        )
        .col_expr(
            draft_order::Column::TimeExpires,
            Expr::val(Some(expires)).into(),
        )
        .filter(draft_order::Column::Id.eq(entry_id))
        .filter(draft_order::Column::IsCompleted.eq(false))
        .filter(draft_order::Column::TimeExpires.is_null())
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

#[derive(Debug, Clone)]
pub struct EntryCreate {
    pub league_id: i64,
    pub pick_number: i32,
    pub round: i16,
    pub team_position: i16,
}

pub async fn create_entries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entries: Vec<EntryCreate>,
) -> Result<(), sea_orm::DbErr> {
    use sea_orm::{NotSet, Set};

    if entries.is_empty() {
        return Ok(());
    }

    let now = OffsetDateTime::now_utc();
    let actives = entries.into_iter().map(|e| draft_order::ActiveModel {
        id: NotSet,
        league_id: Set(e.league_id),
        pick_number: Set(e.pick_number),
        round: Set(e.round),
        team_position: Set(e.team_position),
        is_completed: Set(false),
        is_auto_picked: Set(false),
        auto_pick_reason: Set(None),
        time_started: Set(None),
        time_expires: Set(None),
        created_at: Set(now),
    });

    draft_order::Entity::insert_many(actives).exec(conn).await?;
    Ok(())
}
