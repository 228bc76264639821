//! Pure computations over the raw history
//!
//! None of these touch the store or the clock directly; the engine feeds
//! them the current collections and takes back fresh values.

mod achievements;
mod statistics;
mod streak;

pub use achievements::{
    evaluate_achievements, AchievementMetrics, AchievementSet, MINDFUL_MINUTE_MILESTONES,
    RESISTED_CRAVING_MILESTONES, STREAK_MILESTONES,
};
pub use statistics::{
    average_intensity, common_triggers, cravings_by_hour, intensity_trend, money_saved,
    total_days_gamble_free, CravingStatistics, TOP_TRIGGER_LIMIT, TREND_WINDOW,
};
pub use streak::{current_streak, longest_streak};
