use crate::models::AppData;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Streak walking never looks further back than a year.
const MAX_LOOKBACK_DAYS: i64 = 365;

/// Consecutive checked-in days ending today (inclusive). An entry counts by
/// existing; it does not need any answers. The walk stops at the first gap,
/// so a missing entry for `today` yields 0.
pub fn current_streak_at(today: NaiveDate, data: &AppData) -> u32 {
    let dates = entry_dates(data);
    let mut streak = 0;
    for offset in 0..MAX_LOOKBACK_DAYS {
        if dates.contains(&(today - Duration::days(offset))) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive entry dates anywhere in the history. A
/// day-to-day delta of exactly 1 extends the run; anything else resets it.
pub fn best_streak(data: &AppData) -> u32 {
    let dates = entry_dates(data);
    if dates.is_empty() {
        return 0;
    }

    let mut best = 1;
    let mut run = 1;
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        if let Some(prev) = previous {
            if (date - prev).num_days() == 1 {
                run += 1;
                best = best.max(run);
            } else {
                run = 1;
            }
        }
        previous = Some(date);
    }
    best
}

fn entry_dates(data: &AppData) -> BTreeSet<NaiveDate> {
    data.entries.iter().map(|entry| entry.date).collect()
}
