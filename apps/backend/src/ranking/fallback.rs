//! Fallback ranking tier.
//!
//! Used when the primary oracle returns nothing for a team that raw
//! affordability says can still draft: the single highest-salary undrafted
//! player that fits under the remaining cap. Salary-descending is a crude
//! proxy for value and intentionally ignores the primary tier's budget
//! model.

use sea_orm::DatabaseTransaction;

use super::trait_def::RankedPlayer;
use crate::errors::domain::DomainError;
use crate::repos::{picks, players};

pub async fn fallback_player(
    txn: &DatabaseTransaction,
    league_id: i64,
    remaining_cap: i64,
) -> Result<Option<RankedPlayer>, DomainError> {
    let drafted = picks::drafted_player_ids(txn, league_id).await?;
    let player = players::highest_salary_under(txn, remaining_cap, &drafted).await?;

    Ok(player.map(|p| RankedPlayer {
        player_id: p.id,
        salary: p.salary,
        projected_points: p.projected_points,
        is_over_average_budget: false,
        remaining_cap_after: remaining_cap - p.salary,
    }))
}
