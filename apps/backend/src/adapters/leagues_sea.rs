//! SeaORM adapter for leagues and their settings.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::league_settings;
use crate::entities::leagues;
use crate::entities::leagues::{DraftStatus, LeaguePhase};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<leagues::Model>, sea_orm::DbErr> {
    leagues::Entity::find_by_id(league_id).one(conn).await
}

pub async fn require_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<leagues::Model, sea_orm::DbErr> {
    find_by_id(conn, league_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("League not found".to_string()))
}

/// Leagues whose scheduled draft instant has passed. Bounded per cycle so a
/// backlog cannot starve the rest of the scan.
pub async fn find_startable<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
    league_id: Option<i64>,
    limit: u64,
) -> Result<Vec<leagues::Model>, sea_orm::DbErr> {
    let mut query = leagues::Entity::find()
        .filter(leagues::Column::DraftStatus.eq(DraftStatus::Scheduled))
        .filter(leagues::Column::DraftDate.lte(now));
    if let Some(id) = league_id {
        query = query.filter(leagues::Column::Id.eq(id));
    }
    query
        .order_by_asc(leagues::Column::DraftDate)
        .limit(limit)
        .all(conn)
        .await
}

/// In-progress leagues, used by the self-healing scan.
pub async fn find_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Option<i64>,
) -> Result<Vec<leagues::Model>, sea_orm::DbErr> {
    let mut query =
        leagues::Entity::find().filter(leagues::Column::DraftStatus.eq(DraftStatus::InProgress));
    if let Some(id) = league_id {
        query = query.filter(leagues::Column::Id.eq(id));
    }
    query.all(conn).await
}

/// Conditional status transition; returns false if another writer moved the
/// league out of `from` first.
pub async fn set_draft_status_if<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    from: DraftStatus,
    to: DraftStatus,
    now: OffsetDateTime,
) -> Result<bool, sea_orm::DbErr> {
    let result = leagues::Entity::update_many()
        .col_expr(leagues::Column::DraftStatus, Expr::val(to).into())
        .col_expr(leagues::Column::UpdatedAt, Expr::val(now).into())
        .filter(leagues::Column::Id.eq(league_id))
        .filter(leagues::Column::DraftStatus.eq(from))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Terminal transition: completed draft, league enters its post-draft phase.
pub async fn complete_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    now: OffsetDateTime,
) -> Result<bool, sea_orm::DbErr> {
    let result = leagues::Entity::update_many()
        .col_expr(
            leagues::Column::DraftStatus,
            Expr::val(DraftStatus::Completed).into(),
        )
        .col_expr(
            leagues::Column::CurrentPhase,
            Expr::val(LeaguePhase::RegularSeason).into(),
        )
        .col_expr(leagues::Column::UpdatedAt, Expr::val(now).into())
        .filter(leagues::Column::Id.eq(league_id))
        .filter(leagues::Column::DraftStatus.eq(DraftStatus::InProgress))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

#[derive(Debug, Clone)]
pub struct LeagueCreate {
    pub name: String,
    pub max_teams: i16,
    pub draft_date: Option<OffsetDateTime>,
    pub salary_cap_amount: i64,
}

pub async fn create_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LeagueCreate,
) -> Result<leagues::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let now = OffsetDateTime::now_utc();
    let active = leagues::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        max_teams: Set(dto.max_teams),
        draft_date: Set(dto.draft_date),
        draft_status: Set(DraftStatus::Scheduled),
        salary_cap_amount: Set(dto.salary_cap_amount),
        current_phase: Set(LeaguePhase::PreDraft),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

// ----- league_settings -----

pub async fn find_settings_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<league_settings::Model>, sea_orm::DbErr> {
    league_settings::Entity::find()
        .filter(league_settings::Column::LeagueId.eq(league_id))
        .one(conn)
        .await
}

#[derive(Debug, Clone)]
pub struct SettingsCreate {
    pub league_id: i64,
    pub draft_time_per_pick: i32,
    pub draft_auto_pick_enabled: bool,
}

pub async fn create_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SettingsCreate,
) -> Result<league_settings::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let now = OffsetDateTime::now_utc();
    let active = league_settings::ActiveModel {
        id: NotSet,
        league_id: Set(dto.league_id),
        draft_time_per_pick: Set(dto.draft_time_per_pick),
        draft_auto_pick_enabled: Set(dto.draft_auto_pick_enabled),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
