//! Event Store - raw history collections
//!
//! Cravings are kept in insertion order. Daily progress is keyed by date,
//! so there is structurally at most one entry per calendar day.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::types::{
    CravingEvent, CravingId, CravingInput, CravingUpdate, DailyProgressEntry, ProgressDelta,
};
use crate::validation::{
    validate_craving_input, validate_craving_timestamp, validate_craving_update, ValidationError,
};

/// In-memory owner of cravings and daily progress
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    cravings: Vec<CravingEvent>,
    progress: BTreeMap<NaiveDate, DailyProgressEntry>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted collections.
    ///
    /// Duplicate days (only possible in legacy or hand-edited data) are
    /// merged into one entry.
    pub fn from_parts(cravings: Vec<CravingEvent>, entries: Vec<DailyProgressEntry>) -> Self {
        let mut progress: BTreeMap<NaiveDate, DailyProgressEntry> = BTreeMap::new();

        for entry in entries {
            match progress.get_mut(&entry.date) {
                Some(existing) => {
                    tracing::warn!(date = %entry.date, "merging duplicate daily progress entry");
                    existing.merge(&entry);
                }
                None => {
                    progress.insert(entry.date, entry);
                }
            }
        }

        Self { cravings, progress }
    }

    /// Validate and append a new craving.
    ///
    /// `recorded_at` is used when the input carries no timestamp. An explicit
    /// timestamp may not fall on a day after `recorded_at`'s.
    pub fn add_craving(
        &mut self,
        input: CravingInput,
        recorded_at: DateTime<FixedOffset>,
    ) -> Result<&CravingEvent, ValidationError> {
        validate_craving_input(&input)?;
        if let Some(timestamp) = input.timestamp {
            validate_craving_timestamp(timestamp, recorded_at.date_naive())?;
        }

        let event = CravingEvent::from_input(input, recorded_at);
        self.cravings.push(event);

        let index = self.cravings.len() - 1;
        Ok(&self.cravings[index])
    }

    /// Edit a craving in place. A new timestamp may not fall after `today`.
    ///
    /// Returns `Ok(false)` without touching anything if `id` is unknown.
    pub fn update_craving(
        &mut self,
        id: CravingId,
        update: CravingUpdate,
        today: NaiveDate,
    ) -> Result<bool, ValidationError> {
        validate_craving_update(&update)?;
        if let Some(timestamp) = update.timestamp {
            validate_craving_timestamp(timestamp, today)?;
        }

        match self.cravings.iter_mut().find(|c| c.id == id) {
            Some(event) => {
                update.apply_to(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find-or-create the entry for `date` and apply `delta` to it
    pub fn upsert_daily_progress(
        &mut self,
        date: NaiveDate,
        delta: ProgressDelta,
    ) -> &DailyProgressEntry {
        let entry = self
            .progress
            .entry(date)
            .or_insert_with(|| DailyProgressEntry::new(date));
        entry.apply(&delta);
        entry
    }

    /// All cravings, oldest logged first
    pub fn cravings(&self) -> &[CravingEvent] {
        &self.cravings
    }

    pub fn find_craving(&self, id: CravingId) -> Option<&CravingEvent> {
        self.cravings.iter().find(|c| c.id == id)
    }

    /// Progress entries in ascending date order
    pub fn daily_progress(&self) -> impl DoubleEndedIterator<Item = &DailyProgressEntry> {
        self.progress.values()
    }

    /// Owned copy of the progress entries, ascending by date
    pub fn daily_progress_vec(&self) -> Vec<DailyProgressEntry> {
        self.progress.values().cloned().collect()
    }

    pub fn progress_for(&self, date: NaiveDate) -> Option<&DailyProgressEntry> {
        self.progress.get(&date)
    }

    /// Number of cravings the user did not give in to
    pub fn resisted_count(&self) -> usize {
        self.cravings.iter().filter(|c| c.was_resisted()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cravings.is_empty() && self.progress.is_empty()
    }
}
