mod support;

use backend::entities::draft_state;
use backend::services::draft_flow::DraftFlowService;
use backend::AppError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::support::factory;

#[tokio::test]
async fn stalled_pick_gets_a_fresh_timer() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    factory::seed_players(db, &[(10_000_000, 40.0), (8_000_000, 35.0)]).await?;
    let league = factory::create_startable_league(&state, "stall", 2, 3, 170_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    // Simulate the stall: current pick live but never armed.
    let entry = factory::get_entry(db, league.league_id, 1).await;
    factory::clear_pick_timer(db, entry.id).await?;

    let summary = service.run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_processed, 1);

    // A fresh non-null timer, with nothing else touched.
    let healed = factory::get_entry(db, league.league_id, 1).await;
    assert!(healed.time_expires.is_some());
    assert!(healed.time_started.is_some());
    assert!(!healed.is_completed);
    assert_eq!(healed.pick_number, 1);

    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.current_pick_number, 1);
    assert_eq!(draft.completed_picks, 0);

    // Healing an already-healed entry is a no-op.
    let before = healed.time_expires;
    service.run_cycle(&state, None).await?;
    let after = factory::get_entry(db, league.league_id, 1).await;
    assert_eq!(after.time_expires, before);

    Ok(())
}

#[tokio::test]
async fn missing_draft_state_is_rebuilt() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    factory::seed_players(db, &[(10_000_000, 40.0), (8_000_000, 35.0)]).await?;
    let league = factory::create_startable_league(&state, "lost-state", 2, 3, 170_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    // Drop the singleton out from under an in-progress league.
    draft_state::Entity::delete_many()
        .filter(draft_state::Column::LeagueId.eq(league.league_id))
        .exec(db)
        .await
        .map_err(|e| AppError::db(e.to_string()))?;

    service.run_cycle(&state, None).await?;

    // Rebuilt, pointing at the lowest incomplete entry.
    let rebuilt = factory::get_state(db, league.league_id).await;
    assert_eq!(rebuilt.current_pick_number, 1);
    assert_eq!(rebuilt.total_picks, 6);
    assert_eq!(rebuilt.completed_picks, 0);
    assert!(rebuilt.current_pick_id.is_some());

    Ok(())
}
