//! Data types for the recovery progress engine
//!
//! Raw history (cravings, daily progress), earned achievements, the user
//! profile, and the derived aggregate snapshot.

mod achievement;
mod craving;
mod profile;
mod progress;
mod snapshot;

pub use achievement::{Achievement, AchievementCategory};
pub use craving::{CravingEvent, CravingId, CravingInput, CravingUpdate};
pub use profile::{ProfileUpdate, ThemePreference, UserProfile, DEFAULT_TRIGGER_TAGS};
pub use progress::{DailyProgressEntry, ProgressDelta};
pub use snapshot::{AggregateSnapshot, SnapshotUpdate, TriggerCount, HOURS_PER_DAY};

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u32) -> bool {
    *val == 0
}
