//! League creation service: league row, settings, teams and the complete
//! snake draft order, seeded before the draft ever starts.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::snake;
use crate::error::AppError;
use crate::repos::draft_order::EntryCreate;
use crate::repos::leagues::{LeagueCreate, SettingsCreate};
use crate::repos::teams::TeamCreate;
use crate::repos::{draft_order, leagues, teams};

/// Default league salary cap, in currency units.
const DEFAULT_SALARY_CAP: i64 = 170_000_000;

/// Default number of draft rounds.
const DEFAULT_DRAFT_ROUNDS: u8 = 15;

#[derive(Debug, Clone)]
pub struct CreateLeagueInput {
    pub name: String,
    pub team_names: Vec<String>,
    pub draft_date: Option<OffsetDateTime>,
    pub salary_cap_amount: Option<i64>,
    pub draft_rounds: Option<u8>,
    pub draft_time_per_pick_secs: Option<i32>,
    pub draft_auto_pick_enabled: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CreatedLeague {
    pub league_id: i64,
    pub team_ids: Vec<i64>,
    pub total_picks: i32,
}

#[derive(Default)]
pub struct LeagueService;

impl LeagueService {
    /// Create a league with its settings, teams and full snake draft
    /// order. The draft state singleton is *not* created here; it appears
    /// when the scheduled draft instant is reached.
    pub async fn create_league(
        &self,
        txn: &DatabaseTransaction,
        input: CreateLeagueInput,
    ) -> Result<CreatedLeague, AppError> {
        let team_count = input.team_names.len();
        if team_count < 2 {
            return Err(AppError::invalid(
                "TOO_FEW_TEAMS",
                format!("a league needs at least 2 teams, got {team_count}"),
            ));
        }
        if input.name.trim().is_empty() {
            return Err(AppError::invalid("EMPTY_NAME", "league name is required"));
        }

        let rounds = input.draft_rounds.unwrap_or(DEFAULT_DRAFT_ROUNDS);
        let league = leagues::create_league(
            txn,
            LeagueCreate {
                name: input.name,
                max_teams: team_count as i16,
                draft_date: input.draft_date,
                salary_cap_amount: input.salary_cap_amount.unwrap_or(DEFAULT_SALARY_CAP),
            },
        )
        .await?;

        leagues::create_settings(
            txn,
            SettingsCreate {
                league_id: league.id,
                draft_time_per_pick: input.draft_time_per_pick_secs.unwrap_or(60),
                draft_auto_pick_enabled: input.draft_auto_pick_enabled.unwrap_or(true),
            },
        )
        .await?;

        let mut team_ids = Vec::with_capacity(team_count);
        for (idx, team_name) in input.team_names.into_iter().enumerate() {
            let team = teams::create_team(
                txn,
                TeamCreate {
                    league_id: league.id,
                    team_name,
                    draft_position: idx as i16 + 1,
                },
            )
            .await?;
            team_ids.push(team.id);
        }

        let slots = snake::build_order(team_count as u16, rounds);
        let total_picks = slots.len() as i32;
        draft_order::seed_entries(
            txn,
            slots
                .into_iter()
                .map(|s| EntryCreate {
                    league_id: league.id,
                    pick_number: s.pick_number,
                    round: s.round as i16,
                    team_position: s.team_position as i16,
                })
                .collect(),
        )
        .await?;

        info!(
            league_id = league.id,
            teams = team_count,
            rounds,
            total_picks,
            "league created with seeded draft order"
        );

        Ok(CreatedLeague {
            league_id: league.id,
            team_ids,
            total_picks,
        })
    }
}
