//! Milestone evaluation
//!
//! Achievements are additive only: evaluation never removes or demotes an
//! earned achievement, and the title is the sole dedup key.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::types::{Achievement, AchievementCategory};

pub const STREAK_MILESTONES: &[u64] = &[1, 3, 7, 14, 30, 60, 90, 180, 365];
pub const MINDFUL_MINUTE_MILESTONES: &[u64] = &[10, 30, 60, 120, 300, 600, 1200];
pub const RESISTED_CRAVING_MILESTONES: &[u64] = &[1, 5, 10, 25, 50, 100];

/// Metrics the milestone tables are checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementMetrics {
    pub streak_count: u32,
    pub mindfulness_minutes_total: u64,
    pub resisted_cravings: u64,
}

impl AchievementMetrics {
    fn value_for(&self, category: AchievementCategory) -> u64 {
        match category {
            AchievementCategory::Streak => u64::from(self.streak_count),
            AchievementCategory::Mindfulness => self.mindfulness_minutes_total,
            AchievementCategory::Resistance => self.resisted_cravings,
        }
    }
}

fn milestones(category: AchievementCategory) -> &'static [u64] {
    match category {
        AchievementCategory::Streak => STREAK_MILESTONES,
        AchievementCategory::Mindfulness => MINDFUL_MINUTE_MILESTONES,
        AchievementCategory::Resistance => RESISTED_CRAVING_MILESTONES,
    }
}

/// Earned achievements in unlock order, indexed by title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementSet {
    items: Vec<Achievement>,
    titles: HashSet<String>,
}

impl AchievementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted achievements, dropping repeated titles
    pub fn from_vec(achievements: Vec<Achievement>) -> Self {
        let mut set = Self::new();
        for achievement in achievements {
            set.insert(achievement);
        }
        set
    }

    /// Add an achievement; a no-op returning `false` if the title exists
    pub fn insert(&mut self, achievement: Achievement) -> bool {
        if self.titles.contains(&achievement.title) {
            return false;
        }
        self.titles.insert(achievement.title.clone());
        self.items.push(achievement);
        true
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn get(&self, title: &str) -> Option<&Achievement> {
        self.items.iter().find(|a| a.title == title)
    }

    pub fn as_slice(&self) -> &[Achievement] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Achievement> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Achievements whose threshold is met and whose title is not yet earned
///
/// Pure: the caller decides whether to add the result to the set. Calling
/// it again after adding yields nothing new for unchanged metrics.
pub fn evaluate_achievements(
    metrics: &AchievementMetrics,
    existing: &AchievementSet,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let categories = [
        AchievementCategory::Streak,
        AchievementCategory::Mindfulness,
        AchievementCategory::Resistance,
    ];

    let mut unlocked = Vec::new();
    for category in categories {
        let value = metrics.value_for(category);
        for &threshold in milestones(category) {
            if value < threshold {
                break;
            }
            if !existing.contains_title(&category.title(threshold)) {
                unlocked.push(Achievement::unlocked(category, threshold, now));
            }
        }
    }

    unlocked
}
