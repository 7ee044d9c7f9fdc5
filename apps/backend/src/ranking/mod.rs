//! Player Ranking Oracle.
//!
//! The orchestrator never ranks players itself; it asks an oracle for the
//! single best affordable player and treats "no result" as a first-class
//! outcome. Selection is a two-tier strategy: the budgeted primary lookup
//! here, and the cruder salary-ordered fallback in `fallback`, both
//! returning the same `RankedPlayer` shape so callers never special-case
//! which tier answered.

mod budgeted;
mod fallback;
mod trait_def;

pub use budgeted::BudgetedOracle;
pub use fallback::fallback_player;
pub use trait_def::{BestPickQuery, RankedPlayer, RankingOracle};
