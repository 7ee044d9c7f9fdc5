//! Factory helpers building leagues, teams, players and draft fixtures.

use backend::entities::{draft_order, draft_state, fantasy_teams};
use backend::error::AppError;
use backend::repos::players;
use backend::repos::players::PlayerCreate;
use backend::services::leagues::{CreateLeagueInput, LeagueService};
use backend::state::app_state::AppState;
use backend_test_support::unique_helpers::unique_league_name;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use time::{Duration, OffsetDateTime};

pub struct TestLeague {
    pub league_id: i64,
    pub team_ids: Vec<i64>,
    pub total_picks: i32,
}

/// Create a league whose scheduled draft instant is already in the past,
/// so the next orchestrator cycle starts it.
pub async fn create_startable_league(
    state: &AppState,
    prefix: &str,
    team_count: usize,
    rounds: u8,
    salary_cap: i64,
) -> Result<TestLeague, AppError> {
    let db = state.db().expect("test state has a database");
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;

    let created = LeagueService
        .create_league(
            &txn,
            CreateLeagueInput {
                name: unique_league_name(prefix),
                team_names: (1..=team_count).map(|i| format!("Team {i}")).collect(),
                draft_date: Some(OffsetDateTime::now_utc() - Duration::minutes(1)),
                salary_cap_amount: Some(salary_cap),
                draft_rounds: Some(rounds),
                draft_time_per_pick_secs: Some(60),
                draft_auto_pick_enabled: Some(true),
            },
        )
        .await?;

    txn.commit().await.map_err(|e| AppError::db(e.to_string()))?;

    Ok(TestLeague {
        league_id: created.league_id,
        team_ids: created.team_ids,
        total_picks: created.total_picks,
    })
}

/// Seed players as (salary, projected_points) pairs; returns IDs in order.
pub async fn seed_players(
    db: &DatabaseConnection,
    specs: &[(i64, f64)],
) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(specs.len());
    for (i, (salary, projected)) in specs.iter().enumerate() {
        let player = players::create_player(
            db,
            PlayerCreate {
                full_name: format!("Player {}", i + 1),
                position: ["PG", "SG", "SF", "PF", "C"][i % 5].to_string(),
                salary: *salary,
                projected_points: *projected,
            },
        )
        .await?;
        ids.push(player.id);
    }
    Ok(ids)
}

/// Back-date the current pick's timer so the next cycle sees it expired.
pub async fn expire_current_pick(
    db: &DatabaseConnection,
    league_id: i64,
) -> Result<i64, AppError> {
    let state = get_state(db, league_id).await;
    let pick_id = state.current_pick_id.expect("draft has a current pick");

    let now = OffsetDateTime::now_utc();
    draft_order::Entity::update_many()
        .col_expr(
            draft_order::Column::TimeStarted,
            Expr::val(Some(now - Duration::seconds(65))).into(),
        )
        .col_expr(
            draft_order::Column::TimeExpires,
            Expr::val(Some(now - Duration::seconds(5))).into(),
        )
        .filter(draft_order::Column::Id.eq(pick_id))
        .exec(db)
        .await
        .map_err(|e| AppError::db(e.to_string()))?;

    Ok(pick_id)
}

/// Clear a pick's timer to simulate a stalled entry.
pub async fn clear_pick_timer(db: &DatabaseConnection, pick_id: i64) -> Result<(), AppError> {
    draft_order::Entity::update_many()
        .col_expr(
            draft_order::Column::TimeStarted,
            Expr::val(None::<OffsetDateTime>).into(),
        )
        .col_expr(
            draft_order::Column::TimeExpires,
            Expr::val(None::<OffsetDateTime>).into(),
        )
        .filter(draft_order::Column::Id.eq(pick_id))
        .exec(db)
        .await
        .map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

pub async fn set_team_autodraft(
    db: &DatabaseConnection,
    team_id: i64,
    enabled: bool,
) -> Result<(), AppError> {
    fantasy_teams::Entity::update_many()
        .col_expr(
            fantasy_teams::Column::AutodraftEnabled,
            Expr::val(enabled).into(),
        )
        .filter(fantasy_teams::Column::Id.eq(team_id))
        .exec(db)
        .await
        .map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

pub async fn get_entry(
    db: &DatabaseConnection,
    league_id: i64,
    pick_number: i32,
) -> draft_order::Model {
    draft_order::Entity::find()
        .filter(draft_order::Column::LeagueId.eq(league_id))
        .filter(draft_order::Column::PickNumber.eq(pick_number))
        .one(db)
        .await
        .expect("query draft order entry")
        .expect("entry exists")
}

pub async fn get_state(db: &DatabaseConnection, league_id: i64) -> draft_state::Model {
    draft_state::Entity::find()
        .filter(draft_state::Column::LeagueId.eq(league_id))
        .one(db)
        .await
        .expect("query draft state")
        .expect("draft state exists")
}

pub async fn get_team(db: &DatabaseConnection, team_id: i64) -> fantasy_teams::Model {
    fantasy_teams::Entity::find_by_id(team_id)
        .one(db)
        .await
        .expect("query team")
        .expect("team exists")
}
