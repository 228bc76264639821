//! Integration tests for the progress engine

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};

use recovery_progress::{
    CravingInput, CravingUpdate, EngineError, ManualClock, MemoryStore, ProfileUpdate,
    ProgressEngine, ThemePreference, ValidationError,
};

fn setup_engine() -> (ProgressEngine, Arc<ManualClock>, Arc<MemoryStore>) {
    let clock = Arc::new(ManualClock::starting_at("2024-06-10T20:00:00+00:00").unwrap());
    let store = Arc::new(MemoryStore::new());
    let engine = ProgressEngine::open(Arc::clone(&store), Arc::clone(&clock));
    (engine, clock, store)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn count_title(engine: &ProgressEngine, title: &str) -> usize {
    engine
        .achievements()
        .iter()
        .filter(|a| a.title == title)
        .count()
}

#[test]
fn test_fresh_engine_is_empty() {
    let (engine, _, store) = setup_engine();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.streak_count, 0);
    assert_eq!(snapshot.total_days_gamble_free, 0);
    assert_eq!(snapshot.money_saved, 0.0);
    assert!(snapshot.common_triggers.is_empty());
    assert!(engine.achievements().is_empty());
    assert!(engine.load_failures().is_empty());

    // Nothing unlocked, nothing written
    assert!(store.keys().is_empty());
}

#[test]
fn test_streak_savings_and_resistance_scenario() {
    let (mut engine, _, _) = setup_engine();
    engine.set_average_daily_spend(20.0).unwrap();

    engine.log_daily_check_in(day(7), false).unwrap();
    engine.log_daily_check_in(day(8), true).unwrap();
    engine.log_daily_check_in(day(9), true).unwrap();
    engine.log_daily_check_in(day(10), true).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.streak_count, 3);
    assert_eq!(snapshot.total_days_gamble_free, 3);
    assert_eq!(snapshot.money_saved, 60.0);
    assert_eq!(count_title(&engine, "3 Day Streak"), 1);
    assert_eq!(count_title(&engine, "7 Day Streak"), 0);

    for _ in 0..24 {
        engine.log_craving(CravingInput::new(5, "Stress")).unwrap();
    }
    assert_eq!(count_title(&engine, "Resisted 25 Cravings"), 0);

    engine.log_craving(CravingInput::new(9, "Stress")).unwrap();
    let titles: Vec<&str> = engine
        .recently_unlocked()
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Resisted 25 Cravings"]);

    // Resisted cravings keep today qualifying
    assert_eq!(engine.snapshot().streak_count, 3);
    assert_eq!(engine.snapshot().cravings_resisted_total, 25);

    let again = engine.refresh();
    assert!(again.is_empty());
    assert_eq!(count_title(&engine, "Resisted 25 Cravings"), 1);
}

#[test]
fn test_achievements_survive_relapse() {
    let (mut engine, _, _) = setup_engine();

    for d in 4..=10 {
        engine.log_daily_check_in(day(d), true).unwrap();
    }
    assert_eq!(engine.snapshot().streak_count, 7);
    assert_eq!(count_title(&engine, "7 Day Streak"), 1);
    let earned = engine.achievements().len();

    engine
        .log_craving(CravingInput::new(9, "Payday").gave_in(true))
        .unwrap();

    assert_eq!(engine.snapshot().streak_count, 0);
    assert_eq!(engine.snapshot().longest_streak, 6);
    assert_eq!(count_title(&engine, "7 Day Streak"), 1);
    assert_eq!(engine.achievements().len(), earned);
}

#[test]
fn test_craving_updates_day_counters() {
    let (mut engine, _, _) = setup_engine();

    engine.log_craving(CravingInput::new(4, "Boredom")).unwrap();
    engine
        .log_craving(CravingInput::new(8, "Boredom").gave_in(true))
        .unwrap();

    let earlier = DateTime::parse_from_rfc3339("2024-06-09T09:15:00+00:00").unwrap();
    engine
        .log_craving(CravingInput::new(3, "Alcohol").at(earlier))
        .unwrap();

    let today = engine.progress_for(day(10)).unwrap();
    assert_eq!(today.cravings_reported, 2);
    assert_eq!(today.cravings_resisted, 1);

    let back_dated = engine.progress_for(day(9)).unwrap();
    assert_eq!(back_dated.cravings_reported, 1);
    assert_eq!(back_dated.cravings_resisted, 1);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.average_intensity, 5.0);
    assert_eq!(snapshot.cravings_by_hour[20], 2);
    assert_eq!(snapshot.cravings_by_hour[9], 1);
    assert_eq!(snapshot.common_triggers[0].trigger, "Boredom");
    assert_eq!(snapshot.common_triggers[0].count, 2);
}

#[test]
fn test_mindfulness_accumulates() {
    let (mut engine, _, _) = setup_engine();

    engine.log_mindfulness(5).unwrap();
    let entry = engine.log_mindfulness(7).unwrap();

    assert_eq!(entry.mindfulness_minutes, 12);
    assert_eq!(entry.mindfulness_sessions, 2);
    assert_eq!(engine.snapshot().mindfulness_minutes_total, 12);
    assert_eq!(engine.snapshot().mindfulness_exercises_completed, 2);
    assert_eq!(count_title(&engine, "10 Mindful Minutes"), 1);
    assert_eq!(engine.profile().mindfulness_minutes_total, 12);
}

#[test]
fn test_validation_rejects_without_side_effects() {
    let (mut engine, _, store) = setup_engine();

    let err = engine
        .log_craving(CravingInput::new(11, "Stress"))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::IntensityOutOfRange(11))
    ));

    let err = engine.log_craving(CravingInput::new(5, "   ")).unwrap_err();
    assert!(err.is_validation());

    let err = engine.log_daily_check_in(day(11), true).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::FutureDate { .. })
    ));

    assert!(engine.log_mindfulness(0).is_err());
    assert!(engine.set_average_daily_spend(-1.0).is_err());

    assert!(engine.cravings().is_empty());
    assert!(engine.daily_progress().is_empty());
    assert!(store.keys().is_empty());
}

#[test]
fn test_future_dated_craving_keeps_streak() {
    let (mut engine, _, _) = setup_engine();
    for d in 4..=10 {
        engine.log_daily_check_in(day(d), true).unwrap();
    }
    assert_eq!(engine.snapshot().streak_count, 7);

    let future = DateTime::parse_from_rfc3339("2030-01-01T09:00:00+00:00").unwrap();
    let err = engine
        .log_craving(CravingInput::new(3, "Stress").at(future))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::FutureDate { .. })
    ));

    let event = engine.log_craving(CravingInput::new(3, "Stress")).unwrap();
    let err = engine
        .update_craving(
            event.id,
            CravingUpdate {
                timestamp: Some(future),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_validation());

    assert!(engine.progress_for(future.date_naive()).is_none());
    assert_eq!(engine.cravings()[0].timestamp, event.timestamp);
    assert_eq!(engine.snapshot().streak_count, 7);
}

#[test]
fn test_update_craving() {
    let (mut engine, _, _) = setup_engine();

    let event = engine.log_craving(CravingInput::new(6, "Stress")).unwrap();
    let updated = engine
        .update_craving(
            event.id,
            CravingUpdate {
                intensity: Some(2),
                coping_strategy: Some(Some("Went for a walk".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.intensity, 2);
    assert_eq!(updated.coping_strategy.as_deref(), Some("Went for a walk"));
    assert_eq!(engine.snapshot().average_intensity, 2.0);
}

#[test]
fn test_update_unknown_craving_is_not_found() {
    let (mut engine, _, _) = setup_engine();
    let id = uuid::Uuid::new_v4();

    let err = engine
        .update_craving(id, CravingUpdate::default())
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { id: missing } if missing == id));
}

#[test]
fn test_trigger_tags() {
    let (mut engine, _, _) = setup_engine();
    let before = engine.profile().trigger_tags.len();

    assert!(engine.add_trigger_tag("  Crypto ").unwrap());
    assert!(!engine.add_trigger_tag("crypto").unwrap());
    assert_eq!(engine.profile().trigger_tags.len(), before + 1);
    assert_eq!(engine.profile().trigger_tags.last().unwrap(), "Crypto");

    engine.log_craving(CravingInput::new(5, "Crypto")).unwrap();
    assert!(engine.remove_trigger_tag("CRYPTO").unwrap());
    assert!(!engine.remove_trigger_tag("Crypto").unwrap());

    // History keeps the removed label
    assert_eq!(engine.cravings()[0].trigger, "Crypto");
    assert_eq!(engine.snapshot().common_triggers[0].trigger, "Crypto");
}

#[test]
fn test_update_profile_sets_start_date() {
    let (mut engine, _, _) = setup_engine();
    assert!(engine.profile().start_date.is_none());

    engine
        .update_profile(ProfileUpdate {
            username: Some("sam".to_string()),
            theme: Some(ThemePreference::Dark),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(engine.profile().username, "sam");
    assert_eq!(engine.profile().theme, ThemePreference::Dark);
    assert_eq!(engine.profile().start_date, Some(day(10)));
}

#[test]
fn test_streak_breaks_on_gap() {
    let (mut engine, clock, _) = setup_engine();

    engine.log_daily_check_in(day(6), true).unwrap();
    engine.log_daily_check_in(day(7), true).unwrap();
    engine.log_daily_check_in(day(9), true).unwrap();
    engine.log_daily_check_in(day(10), true).unwrap();
    assert_eq!(engine.snapshot().streak_count, 2);

    clock.advance_days(1);
    engine.log_daily_check_in(day(11), true).unwrap();
    assert_eq!(engine.snapshot().streak_count, 3);
    assert_eq!(engine.snapshot().total_days_gamble_free, 5);
}

#[test]
fn test_subscribers_receive_updates() {
    let (mut engine, _, _) = setup_engine();
    let mut rx = engine.subscribe();

    engine.log_daily_check_in(day(10), true).unwrap();

    let update = rx.try_recv().unwrap();
    assert_eq!(update.snapshot.streak_count, 1);
    let titles: Vec<&str> = update
        .newly_unlocked
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["1 Day Streak"]);

    engine.log_mindfulness(3).unwrap();
    let update = rx.try_recv().unwrap();
    assert_eq!(update.snapshot.mindfulness_minutes_total, 3);
    assert!(update.newly_unlocked.is_empty());
    assert!(rx.try_recv().is_err());
}
