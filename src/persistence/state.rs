//! Loading and saving the engine's four blobs

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{Achievement, CravingEvent, DailyProgressEntry, UserProfile};

use super::{decode_blob, encode_blob, KeyValueStore, PersistenceError, PersistenceResult};

pub const CRAVINGS_KEY: &str = "cravings";
pub const DAILY_PROGRESS_KEY: &str = "daily_progress";
pub const ACHIEVEMENTS_KEY: &str = "achievements";
pub const PROFILE_KEY: &str = "profile";

/// Everything the engine persists, as loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub cravings: Vec<CravingEvent>,
    pub daily_progress: Vec<DailyProgressEntry>,
    pub achievements: Vec<Achievement>,
    pub profile: UserProfile,
}

/// Borrowed view of the state to be written
#[derive(Debug, Clone)]
pub struct StateView<'a> {
    pub cravings: &'a [CravingEvent],
    pub daily_progress: Vec<&'a DailyProgressEntry>,
    pub achievements: &'a [Achievement],
    pub profile: &'a UserProfile,
}

/// Which blobs fell back to defaults during a load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub failed: Vec<(&'static str, PersistenceError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_keys(&self) -> Vec<&'static str> {
        self.failed.iter().map(|(key, _)| *key).collect()
    }
}

fn load_blob<T, S>(store: &S, key: &'static str, report: &mut LoadReport) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let result = store
        .get(key)
        .and_then(|bytes| bytes.map(|b| decode_blob(key, &b)).transpose());

    match result {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to load blob, using defaults");
            report.failed.push((key, e));
            T::default()
        }
    }
}

/// Load all four blobs, each independently.
///
/// A missing blob is empty; a blob that cannot be read or decoded is
/// replaced by its default and recorded in the report. This never fails.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> (PersistedState, LoadReport) {
    let mut report = LoadReport::default();

    let state = PersistedState {
        cravings: load_blob(store, CRAVINGS_KEY, &mut report),
        daily_progress: load_blob(store, DAILY_PROGRESS_KEY, &mut report),
        achievements: load_blob(store, ACHIEVEMENTS_KEY, &mut report),
        profile: load_blob(store, PROFILE_KEY, &mut report),
    };

    tracing::debug!(
        cravings = state.cravings.len(),
        days = state.daily_progress.len(),
        achievements = state.achievements.len(),
        failed = report.failed.len(),
        "loaded persisted state"
    );

    (state, report)
}

fn save_blob<T, S>(store: &S, key: &'static str, value: &T) -> PersistenceResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = encode_blob(&value)?;
    store.set(key, &bytes)
}

/// Write all four blobs in order: cravings, progress, achievements, profile.
///
/// Every blob is attempted even if an earlier one fails; the first error
/// is returned.
pub fn save_state<S: KeyValueStore + ?Sized>(store: &S, state: &StateView<'_>) -> PersistenceResult<()> {
    let results = [
        (CRAVINGS_KEY, save_blob(store, CRAVINGS_KEY, state.cravings)),
        (
            DAILY_PROGRESS_KEY,
            save_blob(store, DAILY_PROGRESS_KEY, &state.daily_progress),
        ),
        (ACHIEVEMENTS_KEY, save_blob(store, ACHIEVEMENTS_KEY, state.achievements)),
        (PROFILE_KEY, save_blob(store, PROFILE_KEY, state.profile)),
    ];

    let mut first_error = None;
    for (key, result) in results {
        if let Err(e) = result {
            tracing::error!(key, error = %e, "failed to persist blob");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let (state, report) = load_state(&store);

        assert!(report.is_clean());
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn test_corrupt_blob_is_isolated() {
        let store = MemoryStore::new();
        let profile = UserProfile {
            username: "jo".to_string(),
            ..Default::default()
        };
        let view = StateView {
            cravings: &[],
            daily_progress: Vec::new(),
            achievements: &[],
            profile: &profile,
        };
        save_state(&store, &view).unwrap();
        store.set(CRAVINGS_KEY, b"{ truncated").unwrap();

        let (state, report) = load_state(&store);

        assert_eq!(report.failed_keys(), vec![CRAVINGS_KEY]);
        assert!(state.cravings.is_empty());
        assert_eq!(state.profile.username, "jo");
    }

    #[test]
    fn test_save_writes_all_keys() {
        let store = MemoryStore::new();
        let profile = UserProfile::default();
        let view = StateView {
            cravings: &[],
            daily_progress: Vec::new(),
            achievements: &[],
            profile: &profile,
        };

        save_state(&store, &view).unwrap();

        assert_eq!(
            store.keys(),
            vec![ACHIEVEMENTS_KEY, CRAVINGS_KEY, DAILY_PROGRESS_KEY, PROFILE_KEY]
        );
    }
}
