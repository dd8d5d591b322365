//! Coarse relative-age labels for "last topped the damage chart" replies.

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

pub fn format_relative_age(epoch_secs: Option<u64>) -> String {
    let now_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    format_relative_age_at(now_secs, epoch_secs)
}

/// `now_secs` is sampled exactly once per formatting call, so the branch
/// thresholds all see the same instant.
fn format_relative_age_at(now_secs: u64, epoch_secs: Option<u64>) -> String {
    let Some(then_secs) = epoch_secs else {
        return "never".to_string();
    };

    // Timestamps in the future read as "just now".
    let diff = now_secs.saturating_sub(then_secs);

    if diff >= SECS_PER_DAY {
        format!("{} day(s) ago", diff / SECS_PER_DAY)
    } else if diff >= SECS_PER_HOUR {
        format!("{} hour(s) ago", diff / SECS_PER_HOUR)
    } else if diff >= SECS_PER_MINUTE {
        format!("{} minute(s) ago", diff / SECS_PER_MINUTE)
    } else {
        "just now".to_string()
    }
}
