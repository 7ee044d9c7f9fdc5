//! The orchestrator's external trigger endpoint.
//!
//! Fired by the deploy's cron as a bare POST, and by user actions with a
//! trigger hint in the body. Both paths run the same cycle; the hint only
//! narrows the scan.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::services::draft_flow::{DraftFlowService, TriggerHint};
use crate::state::app_state::AppState;

async fn run(
    app_state: web::Data<AppState>,
    body: Option<web::Json<TriggerHint>>,
) -> Result<HttpResponse, AppError> {
    let service = DraftFlowService::new(app_state.draft_config().clone());
    let summary = service
        .run_cycle(&app_state, body.map(web::Json::into_inner))
        .await?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/run", web::post().to(run));
}
