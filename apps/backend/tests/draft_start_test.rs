mod support;

use backend::entities::leagues::DraftStatus;
use backend::error::AppError;
use backend::repos::leagues;
use backend::repos::leagues::{LeagueCreate, SettingsCreate};
use backend::services::draft_flow::DraftFlowService;
use time::{Duration, OffsetDateTime};

use crate::support::factory;

#[tokio::test]
async fn scheduled_draft_starts_when_instant_passes() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    factory::seed_players(db, &[(20_000_000, 50.0), (10_000_000, 40.0)]).await?;
    let league = factory::create_startable_league(&state, "start", 2, 3, 170_000_000).await?;

    let service = DraftFlowService::default();
    let summary = service.run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_started, 1);
    assert!(summary.success);

    let loaded = leagues::require_league(db, league.league_id).await?;
    assert_eq!(loaded.draft_status, DraftStatus::InProgress);

    let draft = factory::get_state(db, league.league_id).await;
    assert_eq!(draft.draft_status, DraftStatus::InProgress);
    assert_eq!(draft.current_pick_number, 1);
    assert_eq!(draft.current_round, 1);
    assert_eq!(draft.total_picks, 6);
    assert_eq!(draft.completed_picks, 0);
    assert!(draft.draft_started_at.is_some());

    // Pick #1 got the full per-pick window.
    let first = factory::get_entry(db, league.league_id, 1).await;
    let started = first.time_started.expect("timer started");
    let expires = first.time_expires.expect("timer armed");
    assert_eq!(expires - started, Duration::seconds(60));

    // A second cycle finds nothing to start.
    let summary = service.run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_started, 0);

    Ok(())
}

#[tokio::test]
async fn draft_without_pick_one_stays_scheduled() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    // A league with no seeded draft order at all.
    let league = leagues::create_league(
        db,
        LeagueCreate {
            name: "Orderless League".to_string(),
            max_teams: 2,
            draft_date: Some(OffsetDateTime::now_utc() - Duration::minutes(5)),
            salary_cap_amount: 170_000_000,
        },
    )
    .await?;
    leagues::create_settings(
        db,
        SettingsCreate {
            league_id: league.id,
            draft_time_per_pick: 60,
            draft_auto_pick_enabled: true,
        },
    )
    .await?;

    let service = DraftFlowService::default();
    let summary = service.run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_started, 0);

    // Left scheduled for retry on the next cycle.
    let loaded = leagues::require_league(db, league.id).await?;
    assert_eq!(loaded.draft_status, DraftStatus::Scheduled);

    Ok(())
}

#[tokio::test]
async fn future_draft_date_is_not_started() -> Result<(), AppError> {
    let state = support::build_test_state().await?;
    let db = state.db().unwrap();

    let created = {
        use backend::services::leagues::{CreateLeagueInput, LeagueService};
        use sea_orm::TransactionTrait;

        let txn = db.begin().await.map_err(|e| AppError::db(e.to_string()))?;
        let created = LeagueService
            .create_league(
                &txn,
                CreateLeagueInput {
                    name: "Future League".to_string(),
                    team_names: vec!["A".into(), "B".into()],
                    draft_date: Some(OffsetDateTime::now_utc() + Duration::hours(2)),
                    salary_cap_amount: None,
                    draft_rounds: Some(3),
                    draft_time_per_pick_secs: None,
                    draft_auto_pick_enabled: None,
                },
            )
            .await?;
        txn.commit().await.map_err(|e| AppError::db(e.to_string()))?;
        created
    };

    let summary = DraftFlowService::default().run_cycle(&state, None).await?;
    assert_eq!(summary.drafts_started, 0);

    let loaded = leagues::require_league(db, created.league_id).await?;
    assert_eq!(loaded.draft_status, DraftStatus::Scheduled);

    Ok(())
}
