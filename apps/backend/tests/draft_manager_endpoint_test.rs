mod support;

use actix_web::{test, web, App};
use backend::routes;
use backend::AppError;
use serde::Deserialize;

use crate::support::factory;

#[derive(Debug, Deserialize)]
struct SummaryBody {
    success: bool,
    drafts_started: u32,
    drafts_processed: u32,
}

#[tokio::test]
async fn trigger_endpoint_runs_a_cycle() -> Result<(), AppError> {
    let state = support::build_test_state().await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    // A bare invocation with no trigger hint and nothing to do.
    let req = test::TestRequest::post()
        .uri("/api/draft-manager/run")
        .to_request();
    let body: SummaryBody = test::call_and_read_body_json(&app, req).await;
    assert!(body.success);
    assert_eq!(body.drafts_started, 0);
    assert_eq!(body.drafts_processed, 0);

    // With a startable league, the same endpoint picks it up.
    let db = state.db().unwrap();
    factory::seed_players(db, &[(10_000_000, 40.0)]).await?;
    let league = factory::create_startable_league(&state, "http", 2, 3, 170_000_000).await?;

    let req = test::TestRequest::post()
        .uri("/api/draft-manager/run")
        .set_json(serde_json::json!({
            "trigger": "draft_start_time_reached",
            "league_id": league.league_id,
        }))
        .to_request();
    let body: SummaryBody = test::call_and_read_body_json(&app, req).await;
    assert!(body.success);
    assert_eq!(body.drafts_started, 1);

    Ok(())
}

#[tokio::test]
async fn health_endpoint_reports_ok() -> Result<(), AppError> {
    let state = support::build_test_state().await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");

    Ok(())
}
