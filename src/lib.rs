//! Recovery Progress Engine
//!
//! Turns a gambling-recovery user's raw history (logged cravings, daily
//! check-ins, mindfulness sessions) into derived progress metrics and
//! permanent milestone achievements.
//!
//! # Features
//!
//! - **Streaks**: Current and longest runs of consecutive qualifying days
//! - **Analytics**: Top triggers, hour-of-day histogram, intensity trend
//! - **Achievements**: Streak, mindfulness and resistance milestones, unlocked once and kept
//! - **Persistence**: Versioned JSON blobs behind a small key-value trait
//! - **Observers**: Every mutation publishes a fresh snapshot on a broadcast channel
//!
//! # Modules
//!
//! - `types`: Core data structures (CravingEvent, DailyProgressEntry, Achievement)
//! - `event_store`: Owner of raw craving and daily progress history
//! - `calculators`: Pure streak, statistics and achievement functions
//! - `engine`: The orchestrating `ProgressEngine`
//! - `persistence`: Key-value gateway, blob codec and file/memory backends
//! - `validation`: Input rules
//! - `config`: Data directory and channel settings
//! - `utils`: Clock abstraction and atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use recovery_progress::{CravingInput, EngineConfig, ProgressEngine};
//!
//! fn main() -> recovery_progress::EngineResult<()> {
//!     let mut engine = ProgressEngine::open_default(&EngineConfig::from_env())?;
//!     engine.log_craving(CravingInput::new(6, "Payday"))?;
//!     engine.log_daily_check_in(engine.today(), true)?;
//!     println!("streak: {}", engine.snapshot().streak_count);
//!     Ok(())
//! }
//! ```

pub mod calculators;
pub mod config;
pub mod engine;
pub mod error;
pub mod event_store;
pub mod persistence;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::EngineConfig;
pub use engine::ProgressEngine;
pub use error::{EngineError, EngineResult};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, PersistenceError};
pub use types::{
    Achievement, AchievementCategory, AggregateSnapshot, CravingEvent, CravingId, CravingInput,
    CravingUpdate, DailyProgressEntry, ProfileUpdate, SnapshotUpdate, ThemePreference,
    TriggerCount, UserProfile,
};
pub use utils::{Clock, ManualClock, SystemClock};
pub use validation::ValidationError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
