//! Shared constants for goal-lookup.

/// Maximum matches listed in full mode when a lookup is ambiguous.
pub const FULL_MATCH_DISPLAY_LIMIT: usize = 5;

/// Maximum matches listed in compact mode when a lookup is ambiguous.
pub const COMPACT_MATCH_DISPLAY_LIMIT: usize = 3;

/// Description length (in chars) kept by [`crate::description_preview`].
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Env var holding the CSV export URL.
pub const CSV_URL_ENV: &str = "GOAL_LOOKUP_CSV_URL";

/// Env var holding an optional fetch timeout in seconds. `0` disables it.
pub const FETCH_TIMEOUT_ENV: &str = "GOAL_LOOKUP_FETCH_TIMEOUT_SECS";
