mod support;

use backend::ranking::{fallback_player, BestPickQuery, BudgetedOracle, RankingOracle};
use backend::AppError;
use sea_orm::TransactionTrait;

use crate::support::factory;

const MIN_PLAYER_SALARY: i64 = 600_000;

#[tokio::test]
async fn budgeted_oracle_respects_dynamic_ceiling() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players = factory::seed_players(
        db,
        &[
            (40_000_000, 60.0), // star, above the round-one ceiling
            (20_000_000, 45.0),
            (1_000_000, 10.0),
        ],
    )
    .await?;
    let league = factory::create_startable_league(&state, "oracle", 2, 15, 170_000_000).await?;

    let oracle = BudgetedOracle::new(MIN_PLAYER_SALARY);
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;

    // Round 1 with a full draft ahead: the 40M star exceeds the stretched
    // per-pick budget, so the 20M player wins on projection.
    let ranked = oracle
        .best_affordable_player(
            &txn,
            &BestPickQuery {
                league_id: league.league_id,
                team_id: league.team_ids[0],
                round: 1,
                picks_remaining: 15,
                total_rounds: 15,
            },
        )
        .await?
        .expect("a candidate under the ceiling");
    assert_eq!(ranked.player_id, players[1]);
    assert_eq!(ranked.salary, 20_000_000);
    assert!(ranked.is_over_average_budget);
    assert_eq!(ranked.remaining_cap_after, 150_000_000);

    // Final pick: the whole remaining cap is in play.
    let ranked = oracle
        .best_affordable_player(
            &txn,
            &BestPickQuery {
                league_id: league.league_id,
                team_id: league.team_ids[0],
                round: 15,
                picks_remaining: 1,
                total_rounds: 15,
            },
        )
        .await?
        .expect("a candidate for the last pick");
    assert_eq!(ranked.player_id, players[0]);
    assert!(!ranked.is_over_average_budget);

    txn.rollback().await.map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

#[tokio::test]
async fn budgeted_oracle_reserves_budget_for_remaining_picks() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players = factory::seed_players(db, &[(1_900_000, 50.0), (500_000, 10.0)]).await?;
    let league = factory::create_startable_league(&state, "reserve", 2, 3, 2_000_000).await?;

    let oracle = BudgetedOracle::new(MIN_PLAYER_SALARY);
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;

    // Two picks must stay fundable after this one, so the 1.9M player
    // that would drain the cap is out of reach.
    let ranked = oracle
        .best_affordable_player(
            &txn,
            &BestPickQuery {
                league_id: league.league_id,
                team_id: league.team_ids[0],
                round: 1,
                picks_remaining: 3,
                total_rounds: 3,
            },
        )
        .await?
        .expect("the cheap player fits under the reserve");
    assert_eq!(ranked.player_id, players[1]);
    assert_eq!(ranked.salary, 500_000);

    txn.rollback().await.map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

#[tokio::test]
async fn oracle_none_and_fallback_share_a_shape() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let players = factory::seed_players(db, &[(40_000_000, 60.0), (20_000_000, 45.0)]).await?;
    let league = factory::create_startable_league(&state, "fallback", 2, 3, 170_000_000).await?;

    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;

    // Fallback ranks purely by salary under the remaining cap.
    let fallback = fallback_player(&txn, league.league_id, 170_000_000)
        .await?
        .expect("highest-salary candidate");
    assert_eq!(fallback.player_id, players[0]);
    assert_eq!(fallback.salary, 40_000_000);
    assert_eq!(fallback.remaining_cap_after, 130_000_000);

    // Under a cap nobody fits, both tiers agree there is no candidate.
    let fallback = fallback_player(&txn, league.league_id, 100_000).await?;
    assert!(fallback.is_none());

    txn.rollback().await.map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}

#[tokio::test]
async fn oracle_returns_none_when_nothing_is_rankable() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    factory::seed_players(db, &[(5_000_000, 50.0)]).await?;
    let league = factory::create_startable_league(&state, "none", 2, 3, 1_000_000).await?;

    let oracle = BudgetedOracle::new(MIN_PLAYER_SALARY);
    let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;

    let ranked = oracle
        .best_affordable_player(
            &txn,
            &BestPickQuery {
                league_id: league.league_id,
                team_id: league.team_ids[0],
                round: 1,
                picks_remaining: 3,
                total_rounds: 3,
            },
        )
        .await?;
    assert!(ranked.is_none());

    txn.rollback().await.map_err(|e| AppError::db(e.to_string()))?;
    Ok(())
}
