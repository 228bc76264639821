//! Progress Engine - the orchestrator
//!
//! Owns the event store, earned achievements and profile. Every mutation
//! runs the same pipeline:
//!
//! ```text
//! mutate store ─► recompute snapshot ─► evaluate achievements ─► persist ─► publish
//! ```
//!
//! The engine is single-writer: all mutations take `&mut self` and finish the
//! whole pipeline before returning, so no caller ever sees a half-updated
//! snapshot.

mod cravings;
mod daily;
mod pipeline;
mod profile;

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::broadcast;

use crate::calculators::AchievementSet;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::event_store::EventStore;
use crate::persistence::{load_state, FileStore, KeyValueStore};
use crate::types::{
    Achievement, AggregateSnapshot, CravingEvent, CravingId, CravingInput, CravingUpdate,
    DailyProgressEntry, ProfileUpdate, SnapshotUpdate, UserProfile,
};
use crate::utils::{Clock, SystemClock};

use pipeline::build_snapshot;

/// Recovery progress engine with pluggable persistence and clock
pub struct ProgressEngine {
    pub(crate) store: EventStore,
    pub(crate) achievements: AchievementSet,
    pub(crate) profile: UserProfile,
    pub(crate) snapshot: Arc<AggregateSnapshot>,
    pub(crate) recently_unlocked: Vec<Achievement>,
    pub(crate) gateway: Box<dyn KeyValueStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) updates: broadcast::Sender<SnapshotUpdate>,
    load_failures: Vec<&'static str>,
}

impl ProgressEngine {
    /// Load state from `gateway` and build the initial snapshot.
    ///
    /// Blobs that fail to decode fall back to defaults individually; see
    /// `load_failures`.
    pub fn open<S, C>(gateway: S, clock: C) -> Self
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
    {
        Self::open_with(
            Box::new(gateway),
            Arc::new(clock),
            EngineConfig::default().broadcast_capacity,
        )
    }

    /// File-backed engine on the system clock, rooted at `config.data_dir`
    pub fn open_default(config: &EngineConfig) -> EngineResult<Self> {
        let gateway = FileStore::open(&config.data_dir)?;
        Ok(Self::open_with(
            Box::new(gateway),
            Arc::new(SystemClock),
            config.broadcast_capacity,
        ))
    }

    /// Fully explicit constructor
    pub fn open_with(
        gateway: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        broadcast_capacity: usize,
    ) -> Self {
        let (state, report) = load_state(gateway.as_ref());
        let (updates, _) = broadcast::channel(broadcast_capacity.max(1));

        let store = EventStore::from_parts(state.cravings, state.daily_progress);
        let snapshot = build_snapshot(&store, state.profile.average_daily_spend);

        let mut engine = Self {
            store,
            achievements: AchievementSet::from_vec(state.achievements),
            profile: state.profile,
            snapshot: Arc::new(snapshot),
            recently_unlocked: Vec::new(),
            gateway,
            clock,
            updates,
            load_failures: report.failed_keys(),
        };

        // Older data may meet milestones that were never recorded.
        if pipeline::unlock_pending(&mut engine) {
            pipeline::persist(&engine);
        }

        tracing::debug!(
            streak = engine.snapshot.streak_count,
            achievements = engine.achievements.len(),
            "progress engine opened"
        );

        engine
    }

    // Mutations (cravings.rs)
    pub fn log_craving(&mut self, input: CravingInput) -> EngineResult<CravingEvent> {
        cravings::log_craving(self, input)
    }

    pub fn update_craving(
        &mut self,
        id: CravingId,
        update: CravingUpdate,
    ) -> EngineResult<CravingEvent> {
        cravings::update_craving(self, id, update)
    }

    // Mutations (daily.rs)
    pub fn log_daily_check_in(
        &mut self,
        date: NaiveDate,
        completed: bool,
    ) -> EngineResult<DailyProgressEntry> {
        daily::log_daily_check_in(self, date, completed)
    }

    pub fn log_mindfulness(&mut self, minutes: u32) -> EngineResult<DailyProgressEntry> {
        daily::log_mindfulness(self, minutes)
    }

    // Mutations (profile.rs)
    pub fn add_trigger_tag(&mut self, tag: &str) -> EngineResult<bool> {
        profile::add_trigger_tag(self, tag)
    }

    pub fn remove_trigger_tag(&mut self, tag: &str) -> EngineResult<bool> {
        profile::remove_trigger_tag(self, tag)
    }

    pub fn set_average_daily_spend(&mut self, amount: f64) -> EngineResult<()> {
        profile::set_average_daily_spend(self, amount)
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> EngineResult<()> {
        profile::update_profile(self, update)
    }

    /// Recompute without mutating history.
    ///
    /// Returns achievements unlocked by this pass; empty when nothing changed,
    /// in which case nothing is persisted or published either.
    pub fn refresh(&mut self) -> Vec<Achievement> {
        pipeline::refresh(self)
    }

    /// Current aggregate snapshot
    pub fn snapshot(&self) -> &AggregateSnapshot {
        &self.snapshot
    }

    /// Shared handle to the current snapshot
    pub fn snapshot_arc(&self) -> Arc<AggregateSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Receive a `SnapshotUpdate` after every completed mutation
    pub fn subscribe(&self) -> broadcast::Receiver<SnapshotUpdate> {
        self.updates.subscribe()
    }

    /// Achievements unlocked by the most recent mutation
    pub fn recently_unlocked(&self) -> &[Achievement] {
        &self.recently_unlocked
    }

    /// Earned achievements in unlock order
    pub fn achievements(&self) -> &[Achievement] {
        self.achievements.as_slice()
    }

    pub fn cravings(&self) -> &[CravingEvent] {
        self.store.cravings()
    }

    /// Daily progress entries, oldest first
    pub fn daily_progress(&self) -> Vec<DailyProgressEntry> {
        self.store.daily_progress_vec()
    }

    pub fn progress_for(&self, date: NaiveDate) -> Option<&DailyProgressEntry> {
        self.store.progress_for(date)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Blob keys that could not be loaded and were reset to defaults
    pub fn load_failures(&self) -> &[&'static str] {
        &self.load_failures
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl std::fmt::Debug for ProgressEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEngine")
            .field("cravings", &self.store.cravings().len())
            .field("achievements", &self.achievements.len())
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}
