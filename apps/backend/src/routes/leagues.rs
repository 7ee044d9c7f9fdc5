use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::leagues::{CreateLeagueInput, LeagueService};
use crate::services::picks::PickService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateLeagueRequest {
    name: String,
    team_names: Vec<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    draft_date: Option<OffsetDateTime>,
    #[serde(default)]
    salary_cap_amount: Option<i64>,
    #[serde(default)]
    draft_rounds: Option<u8>,
    #[serde(default)]
    draft_time_per_pick: Option<i32>,
    #[serde(default)]
    draft_auto_pick_enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CreateLeagueResponse {
    league_id: i64,
    team_ids: Vec<i64>,
    total_picks: i32,
}

async fn create_league(
    app_state: web::Data<AppState>,
    body: web::Json<CreateLeagueRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let created = with_txn(&app_state, |txn| {
        Box::pin(async move {
            LeagueService
                .create_league(
                    txn,
                    CreateLeagueInput {
                        name: req.name,
                        team_names: req.team_names,
                        draft_date: req.draft_date,
                        salary_cap_amount: req.salary_cap_amount,
                        draft_rounds: req.draft_rounds,
                        draft_time_per_pick_secs: req.draft_time_per_pick,
                        draft_auto_pick_enabled: req.draft_auto_pick_enabled,
                    },
                )
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(CreateLeagueResponse {
        league_id: created.league_id,
        team_ids: created.team_ids,
        total_picks: created.total_picks,
    }))
}

#[derive(Debug, Deserialize)]
struct MakePickRequest {
    pick_number: i32,
    player_id: i64,
}

#[derive(Debug, Serialize)]
struct MakePickResponse {
    success: bool,
}

async fn make_pick(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<MakePickRequest>,
) -> Result<HttpResponse, AppError> {
    let league_id = path.into_inner();
    let req = body.into_inner();

    with_txn(&app_state, |txn| {
        Box::pin(async move {
            PickService
                .make_manual_pick(txn, league_id, req.pick_number, req.player_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MakePickResponse { success: true }))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::post().to(create_league));
    cfg.route("/{league_id}/picks", web::post().to(make_pick));
}
