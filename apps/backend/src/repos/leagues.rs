//! League repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::leagues_sea as leagues_adapter;
use crate::entities::league_settings;
use crate::entities::leagues;
use crate::entities::leagues::{DraftStatus, LeaguePhase};
use crate::errors::domain::DomainError;

pub use leagues_adapter::{LeagueCreate, SettingsCreate};

/// League domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub max_teams: u16,
    pub draft_date: Option<OffsetDateTime>,
    pub draft_status: DraftStatus,
    pub salary_cap_amount: i64,
    pub current_phase: LeaguePhase,
}

/// Per-league draft settings; callers fall back to `DraftConfig` defaults
/// when a league has no settings row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSettings {
    pub league_id: i64,
    pub draft_time_per_pick_secs: i64,
    pub draft_auto_pick_enabled: bool,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<League>, DomainError> {
    let league = leagues_adapter::find_by_id(conn, league_id).await?;
    Ok(league.map(League::from))
}

pub async fn require_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<League, DomainError> {
    let league = leagues_adapter::require_league(conn, league_id).await?;
    Ok(League::from(league))
}

pub async fn find_startable<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
    league_id: Option<i64>,
    limit: u64,
) -> Result<Vec<League>, DomainError> {
    let leagues = leagues_adapter::find_startable(conn, now, league_id, limit).await?;
    Ok(leagues.into_iter().map(League::from).collect())
}

pub async fn find_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Option<i64>,
) -> Result<Vec<League>, DomainError> {
    let leagues = leagues_adapter::find_in_progress(conn, league_id).await?;
    Ok(leagues.into_iter().map(League::from).collect())
}

/// Conditional status transition; false means another writer won.
pub async fn set_draft_status_if<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    from: DraftStatus,
    to: DraftStatus,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    Ok(leagues_adapter::set_draft_status_if(conn, league_id, from, to, now).await?)
}

pub async fn complete_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    Ok(leagues_adapter::complete_draft(conn, league_id, now).await?)
}

pub async fn create_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LeagueCreate,
) -> Result<League, DomainError> {
    let league = leagues_adapter::create_league(conn, dto).await?;
    Ok(League::from(league))
}

pub async fn find_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<LeagueSettings>, DomainError> {
    let settings = leagues_adapter::find_settings_by_league(conn, league_id).await?;
    Ok(settings.map(LeagueSettings::from))
}

pub async fn create_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SettingsCreate,
) -> Result<LeagueSettings, DomainError> {
    let settings = leagues_adapter::create_settings(conn, dto).await?;
    Ok(LeagueSettings::from(settings))
}

// Conversions between SeaORM models and domain models

impl From<leagues::Model> for League {
    fn from(model: leagues::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            max_teams: model.max_teams as u16,
            draft_date: model.draft_date,
            draft_status: model.draft_status,
            salary_cap_amount: model.salary_cap_amount,
            current_phase: model.current_phase,
        }
    }
}

impl From<league_settings::Model> for LeagueSettings {
    fn from(model: league_settings::Model) -> Self {
        Self {
            league_id: model.league_id,
            draft_time_per_pick_secs: model.draft_time_per_pick as i64,
            draft_auto_pick_enabled: model.draft_auto_pick_enabled,
        }
    }
}
