//! Player pool repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

pub use players_adapter::PlayerCreate;

/// Player domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub position: String,
    pub salary: i64,
    pub projected_points: f64,
    pub is_active: bool,
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    let player = players_adapter::require_player(conn, player_id).await?;
    Ok(Player::from(player))
}

/// Raw affordability: at least one undrafted active player fits the cap.
pub async fn affordable_player_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    remaining_cap: i64,
    drafted_ids: &[i64],
) -> Result<bool, DomainError> {
    Ok(players_adapter::exists_affordable(conn, remaining_cap, drafted_ids).await?)
}

pub async fn best_projected_under<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    max_salary: i64,
    drafted_ids: &[i64],
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::best_projected_under(conn, max_salary, drafted_ids).await?;
    Ok(player.map(Player::from))
}

pub async fn highest_salary_under<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    max_salary: i64,
    drafted_ids: &[i64],
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::highest_salary_under(conn, max_salary, drafted_ids).await?;
    Ok(player.map(Player::from))
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<Player, DomainError> {
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

// Conversions between SeaORM models and domain models

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            position: model.position,
            salary: model.salary,
            projected_points: model.projected_points,
            is_active: model.is_active,
        }
    }
}
