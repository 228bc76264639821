//! Daily progress entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::is_zero;

/// Aggregate record for one calendar day
///
/// At most one entry exists per date; see `EventStore::upsert_daily_progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgressEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub cravings_reported: u32,
    #[serde(default)]
    pub cravings_resisted: u32,
    #[serde(default)]
    pub mindfulness_minutes: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mindfulness_sessions: u32,
    #[serde(default)]
    pub goal_completed: bool,
}

impl DailyProgressEntry {
    /// Create an empty entry for `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            cravings_reported: 0,
            cravings_resisted: 0,
            mindfulness_minutes: 0,
            mindfulness_sessions: 0,
            goal_completed: false,
        }
    }

    /// Goal completed and every reported craving resisted.
    ///
    /// A resisted count above the reported count happens when events and
    /// entries are edited independently; it counts as fully resisted.
    pub fn is_qualifying(&self) -> bool {
        self.goal_completed && self.cravings_resisted >= self.cravings_reported
    }

    /// Apply a delta in place
    pub fn apply(&mut self, delta: &ProgressDelta) {
        self.cravings_reported = self.cravings_reported.saturating_add(delta.cravings_reported);
        self.cravings_resisted = self.cravings_resisted.saturating_add(delta.cravings_resisted);
        self.mindfulness_minutes = self
            .mindfulness_minutes
            .saturating_add(delta.mindfulness_minutes);
        self.mindfulness_sessions = self
            .mindfulness_sessions
            .saturating_add(delta.mindfulness_sessions);
        if let Some(completed) = delta.goal_completed {
            self.goal_completed = completed;
        }
    }

    /// Fold a duplicate entry for the same day into this one
    pub(crate) fn merge(&mut self, other: &DailyProgressEntry) {
        self.apply(&ProgressDelta {
            cravings_reported: other.cravings_reported,
            cravings_resisted: other.cravings_resisted,
            mindfulness_minutes: other.mindfulness_minutes,
            mindfulness_sessions: other.mindfulness_sessions,
            goal_completed: Some(self.goal_completed || other.goal_completed),
        });
    }
}

/// Change to a day's progress: counters are added, the goal flag overwritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressDelta {
    pub cravings_reported: u32,
    pub cravings_resisted: u32,
    pub mindfulness_minutes: u32,
    pub mindfulness_sessions: u32,
    pub goal_completed: Option<bool>,
}

impl ProgressDelta {
    /// One craving reported, resisted unless the user gave in
    pub fn craving(did_give_in: bool) -> Self {
        Self {
            cravings_reported: 1,
            cravings_resisted: u32::from(!did_give_in),
            ..Default::default()
        }
    }

    /// One mindfulness session of `minutes`
    pub fn mindfulness(minutes: u32) -> Self {
        Self {
            mindfulness_minutes: minutes,
            mindfulness_sessions: 1,
            ..Default::default()
        }
    }

    pub fn check_in(completed: bool) -> Self {
        Self {
            goal_completed: Some(completed),
            ..Default::default()
        }
    }
}
