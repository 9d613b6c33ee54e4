//! Coarse relative-age formatting for repository cards.

use chrono::{DateTime, Utc};

/// Formats how long ago `instant` was relative to `now`.
///
/// Picks the largest unit with a non-zero whole count: years (365 days),
/// months (30 days), days, hours, minutes, every count truncated. `now` is
/// injected so the output is deterministic.
pub fn relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(instant);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    let months = days / 30;
    let years = days / 365;

    if years > 0 {
        format!("{years}y ago")
    } else if months > 0 {
        format!("{months}mo ago")
    } else if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else {
        format!("{minutes}m ago")
    }
}
