use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::draft::DraftConfig;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::routes;
use backend::services::draft_flow::DraftFlowService;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🏀 Starting Fastbreak Backend on http://{}:{}", host, port);

    // Create application state using unified builder
    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_draft_config(DraftConfig::from_env())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    // The in-process periodic ticker: the orchestrator's steady heartbeat.
    // External triggers hit /api/draft-manager/run for immediacy; this loop
    // guarantees progress even if no trigger ever arrives.
    let ticker_state = app_state.clone();
    let tick_secs = app_state.draft_config().tick_secs.max(1);
    tokio::spawn(async move {
        let service = DraftFlowService::new(ticker_state.draft_config().clone());
        let mut interval = tokio::time::interval(Duration::from_secs(tick_secs));
        loop {
            interval.tick().await;
            if let Err(e) = service.run_cycle(&ticker_state, None).await {
                tracing::error!(error = %e, "draft management cycle failed");
            }
        }
    });

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
