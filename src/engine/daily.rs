//! Daily check-in and mindfulness mutations

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::types::{DailyProgressEntry, ProgressDelta};
use crate::validation::{validate_check_in_date, validate_mindfulness_minutes};

use super::{pipeline, ProgressEngine};

/// Mark `date` as goal completed (or not). Future dates are rejected.
pub fn log_daily_check_in(
    engine: &mut ProgressEngine,
    date: NaiveDate,
    completed: bool,
) -> EngineResult<DailyProgressEntry> {
    validate_check_in_date(date, engine.clock.today())?;

    let entry = engine
        .store
        .upsert_daily_progress(date, ProgressDelta::check_in(completed))
        .clone();

    tracing::debug!(%date, completed, "daily check-in logged");

    pipeline::commit(engine);
    Ok(entry)
}

/// Add a mindfulness session to today's entry
pub fn log_mindfulness(engine: &mut ProgressEngine, minutes: u32) -> EngineResult<DailyProgressEntry> {
    validate_mindfulness_minutes(minutes)?;

    let today = engine.clock.today();
    let entry = engine
        .store
        .upsert_daily_progress(today, ProgressDelta::mindfulness(minutes))
        .clone();

    tracing::debug!(minutes, "mindfulness session logged");

    pipeline::commit(engine);
    Ok(entry)
}
