//! Draft flow orchestration service.
//!
//! A stateless coordinator invoked on a periodic cadence (and ad hoc by
//! triggers): starts scheduled drafts, auto-picks when pick timers expire,
//! skips capped-out teams, self-heals stalled picks and completes drafts.
//!
//! The service keeps no state between invocations; every decision is
//! derived fresh from storage, and every mutation re-checks its
//! precondition at the storage layer so overlapping runs cannot duplicate
//! a pick or double-advance the cursor.

mod advance;
mod affordability;
mod auto_pick;
mod cycle;
mod start;

use std::sync::Arc;

pub use auto_pick::ProcessOutcome;
pub use cycle::{RunSummary, TriggerHint, TriggerKind};

use crate::config::draft::DraftConfig;
use crate::ranking::{BudgetedOracle, RankingOracle};

/// Draft flow service - holds the business constants and the ranking
/// oracle; everything else is read from storage per call.
pub struct DraftFlowService {
    config: DraftConfig,
    oracle: Arc<dyn RankingOracle>,
}

impl DraftFlowService {
    pub fn new(config: DraftConfig) -> Self {
        let oracle = Arc::new(BudgetedOracle::new(config.min_cap_threshold));
        Self { config, oracle }
    }

    /// Construct with a caller-supplied oracle (tests, alternative rankers).
    pub fn with_oracle(config: DraftConfig, oracle: Arc<dyn RankingOracle>) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }
}

impl Default for DraftFlowService {
    fn default() -> Self {
        Self::new(DraftConfig::default())
    }
}
