//! Craving mutations

use crate::error::{EngineError, EngineResult};
use crate::types::{CravingEvent, CravingId, CravingInput, CravingUpdate, ProgressDelta};

use super::{pipeline, ProgressEngine};

/// Record a craving and count it on the day it happened
pub fn log_craving(engine: &mut ProgressEngine, input: CravingInput) -> EngineResult<CravingEvent> {
    let now = engine.clock.now();
    let event = match engine.store.add_craving(input, now) {
        Ok(event) => event.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "rejected craving");
            return Err(e.into());
        }
    };

    engine.store.upsert_daily_progress(
        event.timestamp.date_naive(),
        ProgressDelta::craving(event.did_give_in),
    );

    tracing::debug!(
        id = %event.id,
        intensity = event.intensity,
        did_give_in = event.did_give_in,
        "craving logged"
    );

    pipeline::commit(engine);
    Ok(event)
}

/// Edit a logged craving.
///
/// Daily progress counts are not adjusted; events and progress entries
/// evolve independently.
pub fn update_craving(
    engine: &mut ProgressEngine,
    id: CravingId,
    update: CravingUpdate,
) -> EngineResult<CravingEvent> {
    let today = engine.clock.today();
    if !engine.store.update_craving(id, update, today)? {
        return Err(EngineError::NotFound { id });
    }

    let event = engine
        .store
        .find_craving(id)
        .cloned()
        .ok_or(EngineError::NotFound { id })?;

    tracing::debug!(id = %id, "craving updated");

    pipeline::commit(engine);
    Ok(event)
}
