//! SeaORM adapter for committed draft picks.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QuerySelect,
    Set,
};
use time::OffsetDateTime;

use crate::entities::{draft_picks, players};

#[derive(Debug, Clone)]
pub struct PickCreate {
    pub league_id: i64,
    pub pick_number: i32,
    pub round: i16,
    pub fantasy_team_id: i64,
    pub player_id: i64,
}

pub async fn insert_pick<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PickCreate,
) -> Result<draft_picks::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let active = draft_picks::ActiveModel {
        id: NotSet,
        league_id: Set(dto.league_id),
        pick_number: Set(dto.pick_number),
        round: Set(dto.round),
        fantasy_team_id: Set(dto.fantasy_team_id),
        player_id: Set(dto.player_id),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// IDs of every player already drafted in the league.
pub async fn drafted_player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let picks = draft_picks::Entity::find()
        .filter(draft_picks::Column::LeagueId.eq(league_id))
        .select_only()
        .column(draft_picks::Column::PlayerId)
        .into_tuple::<i64>()
        .all(conn)
        .await?;
    Ok(picks)
}

pub async fn count_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    team_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    draft_picks::Entity::find()
        .filter(draft_picks::Column::LeagueId.eq(league_id))
        .filter(draft_picks::Column::FantasyTeamId.eq(team_id))
        .count(conn)
        .await
}

/// Picks for a team joined with the drafted players, for salary math.
pub async fn find_by_team_with_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<(draft_picks::Model, Option<players::Model>)>, sea_orm::DbErr> {
    draft_picks::Entity::find()
        .filter(draft_picks::Column::FantasyTeamId.eq(team_id))
        .find_also_related(players::Entity)
        .all(conn)
        .await
}

pub async fn find_by_league_and_pick_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    pick_number: i32,
) -> Result<Option<draft_picks::Model>, sea_orm::DbErr> {
    draft_picks::Entity::find()
        .filter(draft_picks::Column::LeagueId.eq(league_id))
        .filter(draft_picks::Column::PickNumber.eq(pick_number))
        .one(conn)
        .await
}
