use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::teams::TeamService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct SetAutodraftRequest {
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct SetAutodraftResponse {
    id: i64,
    team_name: String,
    autodraft_enabled: bool,
}

async fn set_autodraft(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<SetAutodraftRequest>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let enabled = body.enabled;

    let team = with_txn(&app_state, |txn| {
        Box::pin(async move { TeamService.set_autodraft(txn, team_id, enabled).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SetAutodraftResponse {
        id: team.id,
        team_name: team.team_name,
        autodraft_enabled: team.autodraft_enabled,
    }))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/{team_id}/autodraft", web::patch().to(set_autodraft));
}
