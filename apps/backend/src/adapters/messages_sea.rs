//! SeaORM adapter for the league activity feed.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::league_messages;

pub async fn insert_message<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    message_type: &str,
    body: &str,
) -> Result<league_messages::Model, sea_orm::DbErr> {
    use sea_orm::ActiveModelTrait;

    let active = league_messages::ActiveModel {
        id: NotSet,
        league_id: Set(league_id),
        message_type: Set(message_type.to_string()),
        body: Set(body.to_string()),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<league_messages::Model>, sea_orm::DbErr> {
    league_messages::Entity::find()
        .filter(league_messages::Column::LeagueId.eq(league_id))
        .order_by_asc(league_messages::Column::CreatedAt)
        .all(conn)
        .await
}
