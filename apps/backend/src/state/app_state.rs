use sea_orm::DatabaseConnection;

use crate::config::draft::DraftConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Draft business configuration
    draft: DraftConfig,
}

impl AppState {
    /// Create a new AppState with the given database connection and draft config
    pub fn new(db: DatabaseConnection, draft: DraftConfig) -> Self {
        Self { db: Some(db), draft }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self {
            db: None,
            draft: DraftConfig::default(),
        }
    }

    /// Create a new AppState without a database but with explicit draft config
    pub fn new_without_db_with_config(draft: DraftConfig) -> Self {
        Self { db: None, draft }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn draft_config(&self) -> &DraftConfig {
        &self.draft
    }
}
