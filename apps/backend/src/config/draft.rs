//! Draft business constants.
//!
//! The thresholds here are league policy, not derived values. They are kept
//! as named, env-overridable configuration so an operator can tune them
//! without touching orchestration code.

use std::env;

use time::Duration;

/// Minimum cap headroom (in league currency units) below which a team is
/// considered capped out.
pub const DEFAULT_MIN_CAP_THRESHOLD: i64 = 600_000;

/// Number of full rounds every team is guaranteed before league-wide
/// cap-exhaustion checks may end the draft early.
pub const DEFAULT_GRACE_ROUNDS: i32 = 2;

/// Timer used when the team on the clock already has autodraft enabled.
/// No human decision is awaited; the short window only preserves
/// current-pick visibility for observers.
pub const DEFAULT_AUTODRAFT_TIMER_SECS: i64 = 3;

/// Per-pick timer used when a league has no explicit setting.
pub const DEFAULT_TIME_PER_PICK_SECS: i64 = 60;

/// Settling delay applied when a trigger hint arrives, to tolerate
/// eventually-consistent writes from the action that fired the trigger.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 400;

/// Cadence of the in-process periodic ticker.
pub const DEFAULT_TICK_SECS: u64 = 10;

/// Runtime draft configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct DraftConfig {
    pub min_cap_threshold: i64,
    pub grace_rounds: i32,
    pub autodraft_timer_secs: i64,
    pub default_time_per_pick_secs: i64,
    pub settle_delay_ms: u64,
    pub tick_secs: u64,
}

impl DraftConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            min_cap_threshold: env_or("DRAFT_MIN_CAP_THRESHOLD", DEFAULT_MIN_CAP_THRESHOLD),
            grace_rounds: env_or("DRAFT_GRACE_ROUNDS", DEFAULT_GRACE_ROUNDS),
            autodraft_timer_secs: env_or("DRAFT_AUTODRAFT_TIMER_SECS", DEFAULT_AUTODRAFT_TIMER_SECS),
            default_time_per_pick_secs: env_or(
                "DRAFT_TIME_PER_PICK_SECS",
                DEFAULT_TIME_PER_PICK_SECS,
            ),
            settle_delay_ms: env_or("DRAFT_SETTLE_DELAY_MS", DEFAULT_SETTLE_DELAY_MS),
            tick_secs: env_or("DRAFT_TICK_SECS", DEFAULT_TICK_SECS),
        }
    }

    /// Timer duration for the autodraft fast path.
    pub fn autodraft_timer(&self) -> Duration {
        Duration::seconds(self.autodraft_timer_secs)
    }

    /// Number of completed picks required before cap-exhaustion checks run.
    pub fn grace_picks(&self, team_count: i32) -> i32 {
        self.grace_rounds * team_count
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            min_cap_threshold: DEFAULT_MIN_CAP_THRESHOLD,
            grace_rounds: DEFAULT_GRACE_ROUNDS,
            autodraft_timer_secs: DEFAULT_AUTODRAFT_TIMER_SECS,
            default_time_per_pick_secs: DEFAULT_TIME_PER_PICK_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            tick_secs: DEFAULT_TICK_SECS,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn defaults_preserve_source_constants() {
        let config = DraftConfig::default();
        assert_eq!(config.min_cap_threshold, 600_000);
        assert_eq!(config.grace_rounds, 2);
        assert_eq!(config.autodraft_timer_secs, 3);
        assert_eq!(config.default_time_per_pick_secs, 60);
    }

    #[test]
    fn grace_picks_is_two_full_rounds() {
        let config = DraftConfig::default();
        assert_eq!(config.grace_picks(10), 20);
        assert_eq!(config.grace_picks(8), 16);
    }

    #[test]
    #[serial]
    fn env_override_wins() {
        std::env::set_var("DRAFT_MIN_CAP_THRESHOLD", "750000");
        let config = DraftConfig::from_env();
        assert_eq!(config.min_cap_threshold, 750_000);
        std::env::remove_var("DRAFT_MIN_CAP_THRESHOLD");
    }
}
