//! SeaORM adapter for the player pool.
//!
//! Queries here take the set of already-drafted player IDs as input; the
//! caller (repos layer) is responsible for fetching it once per decision so
//! the same snapshot feeds both the ranking and affordability checks.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::players;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))
}

/// Is there at least one undrafted active player at or under `max_salary`?
pub async fn exists_affordable<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    max_salary: i64,
    drafted_ids: &[i64],
) -> Result<bool, sea_orm::DbErr> {
    let mut query = players::Entity::find()
        .filter(players::Column::IsActive.eq(true))
        .filter(players::Column::Salary.lte(max_salary));
    if !drafted_ids.is_empty() {
        query = query.filter(players::Column::Id.is_not_in(drafted_ids.iter().copied()));
    }
    Ok(query.limit(1).one(conn).await?.is_some())
}

/// Best projected undrafted active player at or under `max_salary`.
pub async fn best_projected_under<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    max_salary: i64,
    drafted_ids: &[i64],
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    let mut query = players::Entity::find()
        .filter(players::Column::IsActive.eq(true))
        .filter(players::Column::Salary.lte(max_salary));
    if !drafted_ids.is_empty() {
        query = query.filter(players::Column::Id.is_not_in(drafted_ids.iter().copied()));
    }
    query
        .order_by_desc(players::Column::ProjectedPoints)
        .limit(1)
        .one(conn)
        .await
}

/// Highest-salary undrafted active player at or under `max_salary`.
///
/// Salary-descending is the fallback tier's proxy for value; it does not
/// match the primary oracle's projection-based ranking.
pub async fn highest_salary_under<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    max_salary: i64,
    drafted_ids: &[i64],
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    let mut query = players::Entity::find()
        .filter(players::Column::IsActive.eq(true))
        .filter(players::Column::Salary.lte(max_salary));
    if !drafted_ids.is_empty() {
        query = query.filter(players::Column::Id.is_not_in(drafted_ids.iter().copied()));
    }
    query
        .order_by_desc(players::Column::Salary)
        .limit(1)
        .one(conn)
        .await
}

#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub full_name: String,
    pub position: String,
    pub salary: i64,
    pub projected_points: f64,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let active = players::ActiveModel {
        id: NotSet,
        full_name: Set(dto.full_name),
        position: Set(dto.position),
        salary: Set(dto.salary),
        projected_points: Set(dto.projected_points),
        is_active: Set(true),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}
