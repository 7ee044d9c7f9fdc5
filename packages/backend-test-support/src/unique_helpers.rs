//! Test helpers for generating unique test data
//!
//! ULID-based helpers to keep test rows unique across runs so tests can
//! share a database without colliding.

use ulid::Ulid;

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("league");
/// let id2 = unique_str("league");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("league-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique league name with the given prefix.
pub fn unique_league_name(prefix: &str) -> String {
    format!("{} League {}", prefix, Ulid::new())
}
