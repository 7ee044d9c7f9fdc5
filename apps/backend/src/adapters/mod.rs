//! SeaORM adapters.
//!
//! Adapter functions return DbErr; the repos layer maps to DomainError via
//! `From<DbErr>`. Every mutation the orchestrator relies on for concurrency
//! safety is expressed here as a conditional update whose filters re-check
//! the precondition, with `rows_affected` telling the caller whether it won.

pub mod draft_order_sea;
pub mod draft_state_sea;
pub mod leagues_sea;
pub mod messages_sea;
pub mod picks_sea;
pub mod players_sea;
pub mod teams_sea;
