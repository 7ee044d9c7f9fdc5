use actix_web::web;

pub mod draft_manager;
pub mod health;
pub mod leagues;
pub mod teams;

/// Configure application routes for tests and non-HttpServer contexts.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Orchestrator trigger: /api/draft-manager/**
    cfg.service(web::scope("/api/draft-manager").configure(draft_manager::configure_routes));

    // League routes: /api/leagues/**
    cfg.service(web::scope("/api/leagues").configure(leagues::configure_routes));

    // Team routes: /api/teams/**
    cfg.service(web::scope("/api/teams").configure(teams::configure_routes));
}
