//! Pick timer and grace window rules.

use time::Duration;

use crate::config::draft::DraftConfig;

/// How long the next team gets on the clock.
///
/// Teams already on autodraft get the short fast-path window: no human
/// decision is awaited, the window only preserves current-pick visibility
/// for observers.
pub fn pick_duration(
    autodraft_enabled: bool,
    league_secs: Option<i64>,
    config: &DraftConfig,
) -> Duration {
    if autodraft_enabled {
        config.autodraft_timer()
    } else {
        Duration::seconds(league_secs.unwrap_or(config.default_time_per_pick_secs))
    }
}

/// Whether league-wide cap-exhaustion checks may run yet.
///
/// Checks are held back until `grace_rounds` full rounds of picks have
/// completed, so every team gets those picks before the draft can end
/// early on cap exhaustion.
pub fn cap_check_allowed(completed_pick_number: i32, team_count: u16, config: &DraftConfig) -> bool {
    completed_pick_number >= config.grace_picks(team_count as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autodraft_gets_fast_path_regardless_of_league_setting() {
        let config = DraftConfig::default();
        assert_eq!(pick_duration(true, Some(90), &config), Duration::seconds(3));
        assert_eq!(pick_duration(true, None, &config), Duration::seconds(3));
    }

    #[test]
    fn human_gets_league_setting_or_default() {
        let config = DraftConfig::default();
        assert_eq!(
            pick_duration(false, Some(90), &config),
            Duration::seconds(90)
        );
        assert_eq!(pick_duration(false, None, &config), Duration::seconds(60));
    }

    #[test]
    fn cap_checks_held_until_two_full_rounds() {
        let config = DraftConfig::default();
        assert!(!cap_check_allowed(19, 10, &config));
        assert!(cap_check_allowed(20, 10, &config));
        assert!(cap_check_allowed(25, 10, &config));
    }
}
