//! Achievement types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which metric a milestone tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Streak,
    Mindfulness,
    Resistance,
}

impl AchievementCategory {
    /// Symbolic icon name rendered by the UI
    pub fn icon(&self) -> &'static str {
        match self {
            AchievementCategory::Streak => "flame.fill",
            AchievementCategory::Mindfulness => "leaf.fill",
            AchievementCategory::Resistance => "shield.fill",
        }
    }

    /// Unique title for the milestone at `threshold`
    pub fn title(&self, threshold: u64) -> String {
        match self {
            AchievementCategory::Streak => format!("{} Day Streak", threshold),
            AchievementCategory::Mindfulness => format!("{} Mindful Minutes", threshold),
            AchievementCategory::Resistance => format!("Resisted {} Cravings", threshold),
        }
    }

    pub fn description(&self, threshold: u64) -> String {
        match self {
            AchievementCategory::Streak => {
                format!("Stayed gamble-free for {} days in a row", threshold)
            }
            AchievementCategory::Mindfulness => {
                format!("Practiced mindfulness for {} minutes", threshold)
            }
            AchievementCategory::Resistance => {
                format!("Resisted the urge to gamble {} times", threshold)
            }
        }
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementCategory::Streak => write!(f, "streak"),
            AchievementCategory::Mindfulness => write!(f, "mindfulness"),
            AchievementCategory::Resistance => write!(f, "resistance"),
        }
    }
}

/// A permanently earned milestone. The title is its unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AchievementCategory>,
    pub unlocked_date: DateTime<Utc>,
}

impl Achievement {
    /// Milestone for `category` crossing `threshold`, unlocked at `now`
    pub fn unlocked(category: AchievementCategory, threshold: u64, now: DateTime<Utc>) -> Self {
        Self {
            title: category.title(threshold),
            description: category.description(threshold),
            icon_ref: category.icon().to_string(),
            category: Some(category),
            unlocked_date: now,
        }
    }
}
