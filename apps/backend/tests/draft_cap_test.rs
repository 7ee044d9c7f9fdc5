mod support;

use backend::entities::draft_order::AutoPickReason;
use backend::entities::leagues::{DraftStatus, LeaguePhase};
use backend::repos::leagues;
use backend::services::draft_flow::DraftFlowService;
use backend::services::picks::PickService;
use backend::AppError;
use sea_orm::TransactionTrait;

use crate::support::factory;

async fn manual_pick(
    state: &backend::AppState,
    league_id: i64,
    pick_number: i32,
    player_id: i64,
) -> Result<(), AppError> {
    let db = state.db().unwrap();
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;
    PickService
        .make_manual_pick(&txn, league_id, pick_number, player_id)
        .await?;
    txn.commit().await.map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

/// With a cap nobody can use, every team still gets its two grace-window
/// picks (as skips) before the draft completes - never earlier than pick 2N.
#[tokio::test]
async fn grace_window_guarantees_two_rounds_before_early_completion() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    // Every player costs more than the whole cap.
    factory::seed_players(
        db,
        &[(5_000_000, 50.0), (5_000_000, 45.0), (5_000_000, 40.0)],
    )
    .await?;
    let league = factory::create_startable_league(&state, "grace", 2, 3, 1_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;
    factory::expire_current_pick(db, league.league_id).await?;
    service.run_cycle(&state, None).await?;

    // Picks 1..=4 (2 teams x 2 rounds) were skipped, one per slot.
    for pick_number in 1..=4 {
        let entry = factory::get_entry(db, league.league_id, pick_number).await;
        assert!(entry.is_completed, "pick {pick_number} should be skipped");
        assert_eq!(
            entry.auto_pick_reason,
            Some(AutoPickReason::InsufficientCapSpace)
        );
    }

    // Completion happened exactly at the 2N boundary, not before.
    for pick_number in 5..=6 {
        let entry = factory::get_entry(db, league.league_id, pick_number).await;
        assert!(!entry.is_completed);
    }

    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.draft_status, DraftStatus::Completed);
    assert_eq!(draft.completed_picks, 4);
    assert!(draft.completed_picks < draft.total_picks);
    assert!(draft.draft_completed_at.is_some());

    let loaded = leagues::require_league(db, league.league_id).await?;
    assert_eq!(loaded.draft_status, DraftStatus::Completed);
    assert_eq!(loaded.current_phase, LeaguePhase::RegularSeason);

    // No player was ever assigned.
    let drafted = backend::repos::picks::drafted_player_ids(db, league.league_id).await?;
    assert!(drafted.is_empty());

    Ok(())
}

/// Past the grace window, a single capped-out team has its pick skipped
/// immediately while solvent teams keep drafting.
#[tokio::test]
async fn capped_out_team_is_skipped_and_draft_continues() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players = factory::seed_players(
        db,
        &[
            (9_000_000, 50.0), // team A's big spend
            (1_000_000, 30.0),
            (1_000_000, 29.0),
            (900_000, 40.0), // A's second pick, leaving 100k < threshold
            (1_000_000, 28.0),
            (1_000_000, 27.0),
        ],
    )
    .await?;
    let league = factory::create_startable_league(&state, "capskip", 2, 3, 10_000_000).await?;

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    // Snake for 2 teams: A, B, B, A, A, B. Humans pick; the cycle between
    // picks catches the cursor up.
    manual_pick(&state, league.league_id, 1, players[0]).await?; // A spends 9.0M
    service.run_cycle(&state, None).await?;
    manual_pick(&state, league.league_id, 2, players[1]).await?; // B 1.0M
    service.run_cycle(&state, None).await?;
    manual_pick(&state, league.league_id, 3, players[2]).await?; // B 1.0M
    service.run_cycle(&state, None).await?;
    manual_pick(&state, league.league_id, 4, players[3]).await?; // A 0.9M -> 100k left
    service.run_cycle(&state, None).await?;

    // Pick #5 belongs to the now-capped team A: skipped, no player, no wait.
    let skipped = factory::get_entry(db, league.league_id, 5).await;
    assert!(skipped.is_completed);
    assert!(skipped.is_auto_picked);
    assert_eq!(
        skipped.auto_pick_reason,
        Some(AutoPickReason::InsufficientCapSpace)
    );
    assert!(backend::repos::picks::find_by_pick_number(db, league.league_id, 5)
        .await?
        .is_none());

    // The draft moved straight on to team B's pick #6.
    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.draft_status, DraftStatus::InProgress);
    assert_eq!(draft.current_pick_number, 6);
    let current = factory::get_entry(db, league.league_id, 6).await;
    assert!(!current.is_completed);
    assert!(current.time_expires.is_some());

    Ok(())
}

/// Once every team is under the minimum cap threshold past the grace
/// window, the draft completes even with rounds remaining.
#[tokio::test]
async fn draft_completes_early_when_all_teams_are_capped() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    // Enough mid-priced players for two rounds; after that nobody fits
    // under what's left of the cap.
    factory::seed_players(
        db,
        &[
            (4_800_000, 50.0),
            (4_800_000, 49.0),
            (4_800_000, 48.0),
            (4_800_000, 47.0),
            (5_000_000, 46.0),
            (5_000_000, 45.0),
        ],
    )
    .await?;
    let league = factory::create_startable_league(&state, "exhaust", 2, 3, 10_000_000).await?;

    // Everyone on autodraft; the orchestrator drives the whole draft.
    for team_id in &league.team_ids {
        factory::set_team_autodraft(db, *team_id, true).await?;
    }

    let service = DraftFlowService::default();
    service.run_cycle(&state, None).await?;

    for _ in 0..4 {
        factory::expire_current_pick(db, league.league_id).await?;
        service.run_cycle(&state, None).await?;
    }

    // Both teams drafted twice, landing under the minimum cap threshold,
    // and the league was declared exhausted.
    let drafted = backend::repos::picks::drafted_player_ids(db, league.league_id).await?;
    assert_eq!(drafted.len(), 4);

    for pick_number in 1..=4 {
        let entry = factory::get_entry(db, league.league_id, pick_number).await;
        assert!(entry.is_completed);
        assert_eq!(
            entry.auto_pick_reason,
            Some(AutoPickReason::AutodraftEnabled)
        );
    }

    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.draft_status, DraftStatus::Completed);
    assert_eq!(draft.completed_picks, 4);
    assert!(draft.completed_picks < draft.total_picks);

    let loaded = leagues::require_league(db, league.league_id).await?;
    assert_eq!(loaded.draft_status, DraftStatus::Completed);
    assert_eq!(loaded.current_phase, LeaguePhase::RegularSeason);

    Ok(())
}
