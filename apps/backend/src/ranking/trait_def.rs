use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use crate::errors::domain::DomainError;

/// Inputs to a best-player lookup.
#[derive(Debug, Clone)]
pub struct BestPickQuery {
    pub league_id: i64,
    pub team_id: i64,
    pub round: u8,
    /// Picks this team still has to make, inclusive of the current one.
    pub picks_remaining: i32,
    pub total_rounds: u8,
}

/// The oracle's answer: one player plus the budget metadata the caller may
/// want to log or surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub player_id: i64,
    pub salary: i64,
    pub projected_points: f64,
    pub is_over_average_budget: bool,
    pub remaining_cap_after: i64,
}

/// Ranks the single best player a team can afford right now.
///
/// Implementations own their notion of "best"; returning `None` means the
/// oracle found no candidate under its criteria, which is not the same as
/// the team being unable to afford anyone.
#[async_trait]
pub trait RankingOracle: Send + Sync {
    async fn best_affordable_player(
        &self,
        txn: &DatabaseTransaction,
        query: &BestPickQuery,
    ) -> Result<Option<RankedPlayer>, DomainError>;
}
