mod support;

use std::sync::Arc;

use async_trait::async_trait;
use backend::config::draft::DraftConfig;
use backend::entities::draft_order::AutoPickReason;
use backend::errors::domain::DomainError;
use backend::ranking::{BestPickQuery, RankedPlayer, RankingOracle};
use backend::repos::leagues;
use backend::services::draft_flow::{DraftFlowService, ProcessOutcome};
use backend::AppError;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use time::{Duration, OffsetDateTime};

use crate::support::factory;

/// Oracle that always answers with a fixed player.
struct StubOracle {
    player_id: i64,
    salary: i64,
}

#[async_trait]
impl RankingOracle for StubOracle {
    async fn best_affordable_player(
        &self,
        _txn: &DatabaseTransaction,
        _query: &BestPickQuery,
    ) -> Result<Option<RankedPlayer>, DomainError> {
        Ok(Some(RankedPlayer {
            player_id: self.player_id,
            salary: self.salary,
            projected_points: 41.5,
            is_over_average_budget: true,
            remaining_cap_after: 40_000_000,
        }))
    }
}

#[tokio::test]
async fn expired_pick_is_auto_drafted_and_autodraft_forced_on() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let player_ids = factory::seed_players(
        db,
        &[(18_000_000, 41.5), (12_000_000, 35.0), (8_000_000, 30.0)],
    )
    .await?;
    let league = factory::create_startable_league(&state, "autopick", 4, 3, 170_000_000).await?;

    // Start, then let pick #1's clock run out.
    let service = DraftFlowService::with_oracle(
        DraftConfig::default(),
        Arc::new(StubOracle {
            player_id: player_ids[0],
            salary: 18_000_000,
        }),
    );
    service.run_cycle(&state, None).await?;
    factory::expire_current_pick(db, league.league_id).await?;

    let summary = service.run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_processed, 1);

    // The entry is completed as a missed pick.
    let entry = factory::get_entry(db, league.league_id, 1).await;
    assert!(entry.is_completed);
    assert!(entry.is_auto_picked);
    assert_eq!(entry.auto_pick_reason, Some(AutoPickReason::TimeExpired));

    // The drafted player landed on the team's roster.
    let pick = backend::repos::picks::find_by_pick_number(db, league.league_id, 1)
        .await?
        .expect("pick committed");
    assert_eq!(pick.player_id, player_ids[0]);
    assert_eq!(pick.fantasy_team_id, league.team_ids[0]);

    // Missing the pick forced the team onto autodraft.
    let team = factory::get_team(db, league.team_ids[0]).await;
    assert!(team.autodraft_enabled);

    // Cursor moved to pick #2; nothing below it is left incomplete.
    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.current_pick_number, 2);
    assert_eq!(draft.completed_picks, 1);
    let next = factory::get_entry(db, league.league_id, 2).await;
    assert!(!next.is_completed);
    assert!(next.time_expires.is_some());

    // The miss left a trace in the activity feed.
    let messages = backend::repos::messages::find_all_by_league(db, league.league_id).await?;
    assert!(messages.iter().any(|m| m.message_type == "autodraft_enabled"));

    Ok(())
}

#[tokio::test]
async fn routine_autodraft_pick_keeps_reason_distinct() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let player_ids = factory::seed_players(db, &[(18_000_000, 41.5), (9_000_000, 30.0)]).await?;
    let league = factory::create_startable_league(&state, "routine", 4, 3, 170_000_000).await?;

    let service = DraftFlowService::with_oracle(
        DraftConfig::default(),
        Arc::new(StubOracle {
            player_id: player_ids[0],
            salary: 18_000_000,
        }),
    );
    service.run_cycle(&state, None).await?;

    // Team opted into autodraft before its pick expired.
    factory::set_team_autodraft(db, league.team_ids[0], true).await?;
    factory::expire_current_pick(db, league.league_id).await?;
    service.run_cycle(&state, None).await?;

    let entry = factory::get_entry(db, league.league_id, 1).await;
    assert_eq!(
        entry.auto_pick_reason,
        Some(AutoPickReason::AutodraftEnabled)
    );

    // No "missed pick" message for a team already on autodraft.
    let messages = backend::repos::messages::find_all_by_league(db, league.league_id).await?;
    assert!(messages.is_empty());

    Ok(())
}

#[tokio::test]
async fn processing_a_completed_entry_is_a_no_op() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let player_ids = factory::seed_players(db, &[(18_000_000, 41.5), (9_000_000, 30.0)]).await?;
    let league = factory::create_startable_league(&state, "idem", 4, 3, 170_000_000).await?;

    let service = DraftFlowService::with_oracle(
        DraftConfig::default(),
        Arc::new(StubOracle {
            player_id: player_ids[0],
            salary: 18_000_000,
        }),
    );
    service.run_cycle(&state, None).await?;
    let pick_id = factory::expire_current_pick(db, league.league_id).await?;
    service.run_cycle(&state, None).await?;

    // Invoke expiry processing again on the same, now-completed entry.
    let loaded = leagues::require_league(db, league.league_id).await?;
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;
    let outcome = service
        .process_draft_pick(&txn, &loaded, pick_id, OffsetDateTime::now_utc())
        .await?;
    txn.commit().await.map_err(|e| AppError::db(e.to_string()))?;

    assert_eq!(outcome, ProcessOutcome::AlreadyCompleted);

    // No further mutation: still one committed pick, cursor still at #2.
    let drafted = backend::repos::picks::drafted_player_ids(db, league.league_id).await?;
    assert_eq!(drafted.len(), 1);
    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.current_pick_number, 2);
    assert_eq!(draft.completed_picks, 1);

    Ok(())
}

#[tokio::test]
async fn autodraft_team_gets_three_second_fast_path_timer() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let player_ids = factory::seed_players(db, &[(18_000_000, 41.5), (9_000_000, 30.0)]).await?;
    let league = factory::create_startable_league(&state, "fastpath", 4, 3, 170_000_000).await?;

    let service = DraftFlowService::with_oracle(
        DraftConfig::default(),
        Arc::new(StubOracle {
            player_id: player_ids[0],
            salary: 18_000_000,
        }),
    );
    service.run_cycle(&state, None).await?;

    // The team picking second is already on autodraft.
    factory::set_team_autodraft(db, league.team_ids[1], true).await?;
    factory::expire_current_pick(db, league.league_id).await?;
    service.run_cycle(&state, None).await?;

    // Its window is exactly 3 seconds despite the league's 60s setting.
    let next = factory::get_entry(db, league.league_id, 2).await;
    let started = next.time_started.expect("timer started");
    let expires = next.time_expires.expect("timer armed");
    assert_eq!(expires - started, Duration::seconds(3));

    Ok(())
}
