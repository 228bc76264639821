//! Recompute, evaluate, persist, publish

use std::sync::Arc;

use crate::calculators::{
    current_streak, evaluate_achievements, longest_streak, money_saved, total_days_gamble_free,
    AchievementMetrics, CravingStatistics,
};
use crate::event_store::EventStore;
use crate::persistence::{save_state, StateView};
use crate::types::{Achievement, AggregateSnapshot, SnapshotUpdate};

use super::ProgressEngine;

/// Full recompute of the aggregate snapshot from raw history
pub(crate) fn build_snapshot(store: &EventStore, average_daily_spend: f64) -> AggregateSnapshot {
    let stats = CravingStatistics::compute(store.cravings());
    let gamble_free_days = total_days_gamble_free(store.daily_progress());

    let (minutes, sessions) = store.daily_progress().fold((0u64, 0u64), |(m, s), e| {
        (
            m + u64::from(e.mindfulness_minutes),
            s + u64::from(e.mindfulness_sessions),
        )
    });

    AggregateSnapshot {
        streak_count: current_streak(store.daily_progress()),
        longest_streak: longest_streak(store.daily_progress()),
        total_days_gamble_free: gamble_free_days,
        money_saved: money_saved(average_daily_spend, gamble_free_days),
        mindfulness_minutes_total: minutes,
        mindfulness_exercises_completed: sessions,
        cravings_resisted_total: store.resisted_count() as u64,
        average_intensity: stats.average_intensity,
        common_triggers: stats.common_triggers,
        cravings_by_hour: stats.cravings_by_hour,
        trend: stats.trend,
    }
}

/// Evaluate milestones against the current snapshot and record new ones.
///
/// Returns true if anything was unlocked.
pub(super) fn unlock_pending(engine: &mut ProgressEngine) -> bool {
    let metrics = AchievementMetrics {
        streak_count: engine.snapshot.streak_count,
        mindfulness_minutes_total: engine.snapshot.mindfulness_minutes_total,
        resisted_cravings: engine.snapshot.cravings_resisted_total,
    };

    let unlocked = evaluate_achievements(&metrics, &engine.achievements, engine.clock.now_utc());
    for achievement in &unlocked {
        tracing::info!(title = %achievement.title, "achievement unlocked");
        engine.achievements.insert(achievement.clone());
    }

    let any = !unlocked.is_empty();
    engine.recently_unlocked = unlocked;
    any
}

/// Write every blob. Failures are logged, never propagated.
pub(super) fn persist(engine: &ProgressEngine) {
    let view = StateView {
        cravings: engine.store.cravings(),
        daily_progress: engine.store.daily_progress().collect(),
        achievements: engine.achievements.as_slice(),
        profile: &engine.profile,
    };

    if let Err(e) = save_state(engine.gateway.as_ref(), &view) {
        tracing::error!(error = %e, "persisting engine state failed; in-memory state kept");
    }
}

fn publish(engine: &ProgressEngine) {
    // No receivers is not an error
    let _ = engine.updates.send(SnapshotUpdate {
        snapshot: Arc::clone(&engine.snapshot),
        newly_unlocked: engine.recently_unlocked.clone(),
    });
}

/// Rerun the pipeline only if the recomputed snapshot differs.
///
/// Every installed snapshot has already been evaluated, so an unchanged
/// snapshot cannot unlock anything; nothing is persisted or published.
pub(super) fn refresh(engine: &mut ProgressEngine) -> Vec<Achievement> {
    let fresh = build_snapshot(&engine.store, engine.profile.average_daily_spend);
    if fresh == *engine.snapshot {
        engine.recently_unlocked.clear();
        tracing::debug!("refresh found no changes");
        return Vec::new();
    }

    commit(engine);
    engine.recently_unlocked.clone()
}

/// Steps 2-5 of every mutation
pub(super) fn commit(engine: &mut ProgressEngine) {
    if engine.profile.start_date.is_none() {
        engine.profile.start_date = Some(engine.clock.today());
    }

    let snapshot = build_snapshot(&engine.store, engine.profile.average_daily_spend);
    engine.snapshot = Arc::new(snapshot);

    unlock_pending(engine);
    engine.profile.sync_totals(&engine.snapshot);

    persist(engine);
    publish(engine);

    tracing::debug!(
        streak = engine.snapshot.streak_count,
        gamble_free_days = engine.snapshot.total_days_gamble_free,
        unlocked = engine.recently_unlocked.len(),
        "recomputed snapshot"
    );
}
