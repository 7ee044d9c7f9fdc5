//! League activity feed repository.

use sea_orm::ConnectionTrait;

use crate::adapters::messages_sea as messages_adapter;
use crate::entities::league_messages;
use crate::errors::domain::DomainError;

/// Post a system message to the league's activity feed.
///
/// Callers on the draft path treat failures here as best-effort: a missed
/// feed entry must never fail the pick that produced it.
pub async fn post_system_message<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    message_type: &str,
    body: &str,
) -> Result<league_messages::Model, DomainError> {
    Ok(messages_adapter::insert_message(conn, league_id, message_type, body).await?)
}

pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<league_messages::Model>, DomainError> {
    Ok(messages_adapter::find_all_by_league(conn, league_id).await?)
}
