//! User profile record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AggregateSnapshot;

/// Trigger labels offered to a new user
pub const DEFAULT_TRIGGER_TAGS: &[&str] = &[
    "Boredom",
    "Stress",
    "Loneliness",
    "Payday",
    "Live sports",
    "Advertising",
    "Alcohol",
];

/// UI theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// Flat record of profile scalars
///
/// The `streak_count`, `total_days_gamble_free`, `money_saved` and
/// `mindfulness_minutes_total` fields are a cache of the last snapshot,
/// rewritten on every persist and ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub username: String,
    pub daily_goal: String,
    pub start_date: Option<NaiveDate>,
    pub average_daily_spend: f64,
    pub theme: ThemePreference,
    pub trigger_tags: Vec<String>,
    pub streak_count: u32,
    pub total_days_gamble_free: u32,
    pub money_saved: f64,
    pub mindfulness_minutes_total: u64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: String::new(),
            daily_goal: "Stay gamble-free today".to_string(),
            start_date: None,
            average_daily_spend: 0.0,
            theme: ThemePreference::System,
            trigger_tags: DEFAULT_TRIGGER_TAGS.iter().map(|t| t.to_string()).collect(),
            streak_count: 0,
            total_days_gamble_free: 0,
            money_saved: 0.0,
            mindfulness_minutes_total: 0,
        }
    }
}

impl UserProfile {
    /// Refresh the cached totals from a snapshot
    pub fn sync_totals(&mut self, snapshot: &AggregateSnapshot) {
        self.streak_count = snapshot.streak_count;
        self.total_days_gamble_free = snapshot.total_days_gamble_free;
        self.money_saved = snapshot.money_saved;
        self.mindfulness_minutes_total = snapshot.mindfulness_minutes_total;
    }

    /// Case-insensitive lookup of a trigger tag
    pub fn find_trigger_tag(&self, tag: &str) -> Option<usize> {
        self.trigger_tags
            .iter()
            .position(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Partial profile edit; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub daily_goal: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemePreference>,
}

impl ProfileUpdate {
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(username) = self.username {
            profile.username = username.trim().to_string();
        }
        if let Some(goal) = self.daily_goal {
            profile.daily_goal = goal.trim().to_string();
        }
        if let Some(theme) = self.theme {
            profile.theme = theme;
        }
    }
}
