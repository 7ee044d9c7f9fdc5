mod support;

use backend::error::AppError;
use backend::services::draft_flow::DraftFlowService;
use backend::services::picks::PickService;
use sea_orm::TransactionTrait;

use crate::support::factory;

async fn try_pick(
    state: &backend::AppState,
    league_id: i64,
    pick_number: i32,
    player_id: i64,
) -> Result<(), AppError> {
    let db = state.db().unwrap();
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;
    let result = PickService
        .make_manual_pick(&txn, league_id, pick_number, player_id)
        .await;
    match result {
        Ok(()) => {
            txn.commit().await.map_err(|e| AppError::db(e.to_string()))?;
            Ok(())
        }
        Err(e) => {
            let _ = txn.rollback().await;
            Err(e)
        }
    }
}

#[tokio::test]
async fn manual_pick_completes_entry_without_auto_tags() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players = factory::seed_players(db, &[(12_000_000, 45.0), (8_000_000, 35.0)]).await?;
    let league = factory::create_startable_league(&state, "manual", 2, 3, 170_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    try_pick(&state, league.league_id, 1, players[0]).await?;

    // Completed by a human: no auto-pick markers.
    let entry = factory::get_entry(db, league.league_id, 1).await;
    assert!(entry.is_completed);
    assert!(!entry.is_auto_picked);
    assert_eq!(entry.auto_pick_reason, None);

    let pick = backend::repos::picks::find_by_pick_number(db, league.league_id, 1)
        .await?
        .expect("pick row exists");
    assert_eq!(pick.player_id, players[0]);

    // The human path does not advance; the next cycle catches up.
    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.current_pick_number, 1);
    service.run_cycle(&state, None).await?;
    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.current_pick_number, 2);
    assert_eq!(draft.completed_picks, 1);

    // The team was not forced onto autodraft for picking by hand.
    let team = factory::get_team(db, league.team_ids[0]).await;
    assert!(!team.autodraft_enabled);

    Ok(())
}

#[tokio::test]
async fn manual_pick_rejects_over_cap_and_stale_targets() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players =
        factory::seed_players(db, &[(12_000_000, 45.0), (8_000_000, 35.0), (1_000_000, 20.0)])
            .await?;
    let league = factory::create_startable_league(&state, "manual-errs", 2, 3, 10_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    // Over the team's remaining cap.
    let err = try_pick(&state, league.league_id, 1, players[0])
        .await
        .expect_err("12M player cannot fit a 10M cap");
    assert!(matches!(
        err,
        AppError::Validation { code: "OVER_SALARY_CAP", .. }
    ));

    // Not the pick on the clock.
    let err = try_pick(&state, league.league_id, 3, players[2])
        .await
        .expect_err("pick 3 is not current");
    assert!(matches!(
        err,
        AppError::BadRequest { code: "NOT_CURRENT_PICK", .. }
    ));

    // A valid pick, then the same slot again.
    try_pick(&state, league.league_id, 1, players[1]).await?;
    let err = try_pick(&state, league.league_id, 1, players[2])
        .await
        .expect_err("pick 1 already completed");
    assert!(matches!(err, AppError::Conflict { .. }));

    Ok(())
}
