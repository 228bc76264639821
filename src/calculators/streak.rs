//! Streak calculation over daily progress entries

use chrono::NaiveDate;

use crate::types::DailyProgressEntry;

/// Contiguous qualifying days, walking back from the most recent entry.
///
/// The most recent entry starts the walk wherever it falls; it is not
/// required to be today. Each following entry must be exactly one day
/// earlier than the previous counted one, and every counted entry must
/// qualify. The walk stops at the first entry failing either test.
///
/// Note: a lone qualifying entry from weeks ago, with nothing logged
/// since, still reports a streak of 1.
pub fn current_streak<'a, I>(entries: I) -> u32
where
    I: IntoIterator<Item = &'a DailyProgressEntry>,
{
    let mut sorted: Vec<&DailyProgressEntry> = entries.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut cursor: Option<NaiveDate> = None;

    for entry in sorted {
        if !entry.is_qualifying() {
            break;
        }
        if let Some(previous) = cursor {
            if previous.pred_opt() != Some(entry.date) {
                break;
            }
        }
        streak += 1;
        cursor = Some(entry.date);
    }

    streak
}

/// Longest run of consecutive qualifying days anywhere in history
pub fn longest_streak<'a, I>(entries: I) -> u32
where
    I: IntoIterator<Item = &'a DailyProgressEntry>,
{
    let mut days: Vec<NaiveDate> = entries
        .into_iter()
        .filter(|e| e.is_qualifying())
        .map(|e| e.date)
        .collect();
    days.sort();
    days.dedup();

    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in days {
        run = match previous {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }

    best
}
