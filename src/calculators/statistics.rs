//! Craving statistics and savings
//!
//! Every value here is recomputed from the full history on each call.

use std::collections::HashMap;

use chrono::Timelike;

use crate::types::{CravingEvent, DailyProgressEntry, TriggerCount, HOURS_PER_DAY};

/// How many triggers `common_triggers` reports
pub const TOP_TRIGGER_LIMIT: usize = 5;

/// Events per window when comparing recent and prior intensity
pub const TREND_WINDOW: usize = 3;

/// Intensity and trigger/time analytics for a set of cravings
#[derive(Debug, Clone, PartialEq)]
pub struct CravingStatistics {
    pub average_intensity: f64,
    pub common_triggers: Vec<TriggerCount>,
    pub cravings_by_hour: [u32; HOURS_PER_DAY],
    pub trend: f64,
}

impl CravingStatistics {
    pub fn compute(cravings: &[CravingEvent]) -> Self {
        Self {
            average_intensity: average_intensity(cravings),
            common_triggers: common_triggers(cravings),
            cravings_by_hour: cravings_by_hour(cravings),
            trend: intensity_trend(cravings),
        }
    }
}

fn mean<'a, I>(cravings: I) -> f64
where
    I: IntoIterator<Item = &'a CravingEvent>,
{
    let (sum, count) = cravings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), c| (sum + u64::from(c.intensity), count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Mean intensity, 0 if there are no cravings
pub fn average_intensity(cravings: &[CravingEvent]) -> f64 {
    mean(cravings)
}

/// Top triggers by exact-text count, most frequent first.
///
/// Equal counts keep the order in which the trigger was first seen.
pub fn common_triggers(cravings: &[CravingEvent]) -> Vec<TriggerCount> {
    let mut counts: Vec<TriggerCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for craving in cravings {
        match index.get(craving.trigger.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(craving.trigger.as_str(), counts.len());
                counts.push(TriggerCount {
                    trigger: craving.trigger.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_TRIGGER_LIMIT);
    counts
}

/// Cravings per hour of the local day they were recorded in
pub fn cravings_by_hour(cravings: &[CravingEvent]) -> [u32; HOURS_PER_DAY] {
    let mut buckets = [0u32; HOURS_PER_DAY];
    for craving in cravings {
        buckets[craving.timestamp.hour() as usize] += 1;
    }
    buckets
}

/// Mean intensity of the newest `TREND_WINDOW` cravings minus that of the
/// window before it.
///
/// Returns 0 with fewer than two cravings. A short or empty window averages
/// whatever it holds, with an empty window counting as 0.
pub fn intensity_trend(cravings: &[CravingEvent]) -> f64 {
    if cravings.len() < 2 {
        return 0.0;
    }

    // Reversed before the stable sort so same-instant cravings rank
    // newest-logged first.
    let mut newest_first: Vec<&CravingEvent> = cravings.iter().rev().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let recent = newest_first.iter().take(TREND_WINDOW).copied();
    let prior = newest_first
        .iter()
        .skip(TREND_WINDOW)
        .take(TREND_WINDOW)
        .copied();

    mean(recent) - mean(prior)
}

/// Count of qualifying days across all history
pub fn total_days_gamble_free<'a, I>(entries: I) -> u32
where
    I: IntoIterator<Item = &'a DailyProgressEntry>,
{
    entries.into_iter().filter(|e| e.is_qualifying()).count() as u32
}

/// Always recomputed as spend times gamble-free days, never accumulated
pub fn money_saved(average_daily_spend: f64, total_days_gamble_free: u32) -> f64 {
    average_daily_spend * f64::from(total_days_gamble_free)
}
