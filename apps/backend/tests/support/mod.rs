//! Shared integration-test support.

pub mod factory;

use backend::config::db::DbProfile;
use backend::error::AppError;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;

/// Build an AppState backed by a fresh, fully migrated in-memory SQLite
/// database. Every call returns an isolated database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    backend_test_support::logging::init();
    build_state().with_db(DbProfile::Test).build().await
}
