//! SeaORM adapter for fantasy teams.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::fantasy_teams;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<fantasy_teams::Model>, sea_orm::DbErr> {
    fantasy_teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<fantasy_teams::Model, sea_orm::DbErr> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))
}

pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<fantasy_teams::Model>, sea_orm::DbErr> {
    fantasy_teams::Entity::find()
        .filter(fantasy_teams::Column::LeagueId.eq(league_id))
        .order_by_asc(fantasy_teams::Column::DraftPosition)
        .all(conn)
        .await
}

pub async fn find_by_league_and_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    draft_position: i16,
) -> Result<Option<fantasy_teams::Model>, sea_orm::DbErr> {
    fantasy_teams::Entity::find()
        .filter(fantasy_teams::Column::LeagueId.eq(league_id))
        .filter(fantasy_teams::Column::DraftPosition.eq(draft_position))
        .one(conn)
        .await
}

/// Set the autodraft flag unconditionally (human toggle path).
pub async fn set_autodraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    enabled: bool,
    now: OffsetDateTime,
) -> Result<Option<fantasy_teams::Model>, sea_orm::DbErr> {
    fantasy_teams::Entity::update_many()
        .col_expr(
            fantasy_teams::Column::AutodraftEnabled,
            Expr::val(enabled).into(),
        )
        .col_expr(fantasy_teams::Column::UpdatedAt, Expr::val(now).into())
        .filter(fantasy_teams::Column::Id.eq(team_id))
        .exec(conn)
        .await?;

    find_by_id(conn, team_id).await
}

/// One-way transition used when a team misses its pick. Conditional on the
/// flag still being off so overlapping runs report a single transition.
pub async fn enable_autodraft_if_disabled<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    now: OffsetDateTime,
) -> Result<bool, sea_orm::DbErr> {
    let result = fantasy_teams::Entity::update_many()
        .col_expr(
            fantasy_teams::Column::AutodraftEnabled,
            Expr::val(true).into(),
        )
        .col_expr(fantasy_teams::Column::UpdatedAt, Expr::val(now).into())
        .filter(fantasy_teams::Column::Id.eq(team_id))
        .filter(fantasy_teams::Column::AutodraftEnabled.eq(false))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub league_id: i64,
    pub team_name: String,
    pub draft_position: i16,
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<fantasy_teams::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let now = OffsetDateTime::now_utc();
    let active = fantasy_teams::ActiveModel {
        id: NotSet,
        league_id: Set(dto.league_id),
        team_name: Set(dto.team_name),
        draft_position: Set(dto.draft_position),
        autodraft_enabled: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
