//! Primary ranking tier: projection-ranked selection under a dynamic budget.

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::trait_def::{BestPickQuery, RankedPlayer, RankingOracle};
use crate::errors::domain::DomainError;
use crate::repos::{leagues, picks, players};

/// Spending multiplier applied to the average per-pick budget. Early rounds
/// are allowed to spend well past the average so a team still lands stars;
/// late rounds converge on the average.
fn aggressiveness(round: u8, total_rounds: u8) -> f64 {
    if round <= 2 {
        3.0
    } else if round <= 5 {
        2.0
    } else if u16::from(round) * 3 <= u16::from(total_rounds) * 2 {
        1.5
    } else {
        1.0
    }
}

/// Ranks by projected points under a per-pick ceiling derived from the
/// team's remaining cap: spend aggressively early, but always reserve a
/// minimum viable salary for every remaining pick so a team with many
/// picks left can never exhaust its cap on one selection.
pub struct BudgetedOracle {
    /// Floor reserved per future pick (the league's minimum viable salary).
    min_player_salary: i64,
}

impl BudgetedOracle {
    pub fn new(min_player_salary: i64) -> Self {
        Self { min_player_salary }
    }
}

#[async_trait]
impl RankingOracle for BudgetedOracle {
    async fn best_affordable_player(
        &self,
        txn: &DatabaseTransaction,
        query: &BestPickQuery,
    ) -> Result<Option<RankedPlayer>, DomainError> {
        let league = leagues::require_league(txn, query.league_id).await?;
        let current_salary = picks::team_salary(txn, query.team_id).await?;
        let remaining_cap = league.salary_cap_amount - current_salary;

        let picks_remaining = query.picks_remaining.max(1);
        let average_budget = remaining_cap / i64::from(picks_remaining);
        let reserve = i64::from(picks_remaining - 1) * self.min_player_salary;

        let multiplier = aggressiveness(query.round, query.total_rounds);
        let stretched = (average_budget as f64 * multiplier) as i64;
        let ceiling = stretched.min(remaining_cap - reserve);

        debug!(
            league_id = query.league_id,
            team_id = query.team_id,
            round = query.round,
            picks_remaining,
            remaining_cap,
            average_budget,
            ceiling,
            "ranking under dynamic budget"
        );

        if ceiling <= 0 {
            return Ok(None);
        }

        let drafted = picks::drafted_player_ids(txn, query.league_id).await?;
        let best = players::best_projected_under(txn, ceiling, &drafted).await?;

        Ok(best.map(|p| RankedPlayer {
            player_id: p.id,
            salary: p.salary,
            projected_points: p.projected_points,
            is_over_average_budget: p.salary > average_budget,
            remaining_cap_after: remaining_cap - p.salary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::aggressiveness;

    #[test]
    fn early_rounds_spend_hardest() {
        assert_eq!(aggressiveness(1, 15), 3.0);
        assert_eq!(aggressiveness(2, 15), 3.0);
        assert_eq!(aggressiveness(3, 15), 2.0);
        assert_eq!(aggressiveness(8, 15), 1.5);
        assert_eq!(aggressiveness(14, 15), 1.0);
    }
}
