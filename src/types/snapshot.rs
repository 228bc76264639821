//! Derived aggregate snapshot

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Achievement;

/// Buckets in the hour-of-day histogram
pub const HOURS_PER_DAY: usize = 24;

/// A trigger label and how often it was reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCount {
    pub trigger: String,
    pub count: usize,
}

/// Read-only aggregate state, recomputed wholesale after every mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSnapshot {
    pub streak_count: u32,
    pub longest_streak: u32,
    pub total_days_gamble_free: u32,
    pub money_saved: f64,
    pub mindfulness_minutes_total: u64,
    pub mindfulness_exercises_completed: u64,
    pub cravings_resisted_total: u64,
    pub average_intensity: f64,
    pub common_triggers: Vec<TriggerCount>,
    pub cravings_by_hour: [u32; HOURS_PER_DAY],
    pub trend: f64,
}

impl Default for AggregateSnapshot {
    fn default() -> Self {
        Self {
            streak_count: 0,
            longest_streak: 0,
            total_days_gamble_free: 0,
            money_saved: 0.0,
            mindfulness_minutes_total: 0,
            mindfulness_exercises_completed: 0,
            cravings_resisted_total: 0,
            average_intensity: 0.0,
            common_triggers: Vec::new(),
            cravings_by_hour: [0; HOURS_PER_DAY],
            trend: 0.0,
        }
    }
}

impl AggregateSnapshot {
    /// Hour with the most cravings, if any were logged
    pub fn peak_hour(&self) -> Option<usize> {
        let (hour, count) = self
            .cravings_by_hour
            .iter()
            .enumerate()
            .max_by(|(ha, a), (hb, b)| a.cmp(b).then(hb.cmp(ha)))?;
        (*count > 0).then_some(hour)
    }
}

/// Published to observers after each successful mutation
#[derive(Debug, Clone)]
pub struct SnapshotUpdate {
    pub snapshot: Arc<AggregateSnapshot>,
    /// Achievements unlocked by this mutation, empty if none
    pub newly_unlocked: Vec<Achievement>,
}
