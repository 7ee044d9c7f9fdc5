//! Fantasy team repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::teams_sea as teams_adapter;
use crate::entities::fantasy_teams;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use teams_adapter::TeamCreate;

/// Team domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub draft_position: u16,
    pub autodraft_enabled: bool,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let team = teams_adapter::find_by_id(conn, team_id).await?;
    Ok(team.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    let team = teams_adapter::find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Team, format!("team {team_id} not found"))
        })?;
    Ok(Team::from(team))
}

pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<Team>, DomainError> {
    let teams = teams_adapter::find_all_by_league(conn, league_id).await?;
    Ok(teams.into_iter().map(Team::from).collect())
}

/// Resolve the team on the clock for a draft-order entry.
pub async fn require_by_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    draft_position: u16,
) -> Result<Team, DomainError> {
    let team =
        teams_adapter::find_by_league_and_position(conn, league_id, draft_position as i16)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Team,
                    format!("no team at draft position {draft_position} in league {league_id}"),
                )
            })?;
    Ok(Team::from(team))
}

pub async fn set_autodraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    enabled: bool,
    now: OffsetDateTime,
) -> Result<Team, DomainError> {
    let team = teams_adapter::set_autodraft(conn, team_id, enabled, now)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Team, format!("team {team_id} not found"))
        })?;
    Ok(Team::from(team))
}

/// Force autodraft on for a team that missed its pick. One-way; returns
/// true only for the run that actually flipped the flag.
pub async fn enable_autodraft_if_disabled<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    Ok(teams_adapter::enable_autodraft_if_disabled(conn, team_id, now).await?)
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<Team, DomainError> {
    let team = teams_adapter::create_team(conn, dto).await?;
    Ok(Team::from(team))
}

// Conversions between SeaORM models and domain models

impl From<fantasy_teams::Model> for Team {
    fn from(model: fantasy_teams::Model) -> Self {
        Self {
            id: model.id,
            league_id: model.league_id,
            team_name: model.team_name,
            draft_position: model.draft_position as u16,
            autodraft_enabled: model.autodraft_enabled,
        }
    }
}
