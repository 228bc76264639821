//! Profile and trigger tag mutations

use crate::error::EngineResult;
use crate::types::ProfileUpdate;
use crate::validation::{validate_daily_spend, validate_trigger_tag};

use super::{pipeline, ProgressEngine};

/// Add a trigger label. Returns false if it already exists (any case).
pub fn add_trigger_tag(engine: &mut ProgressEngine, tag: &str) -> EngineResult<bool> {
    validate_trigger_tag(tag)?;
    let tag = tag.trim();

    if engine.profile.find_trigger_tag(tag).is_some() {
        return Ok(false);
    }

    engine.profile.trigger_tags.push(tag.to_string());
    tracing::debug!(tag, "trigger tag added");

    pipeline::commit(engine);
    Ok(true)
}

/// Remove a trigger label. Logged cravings keep their trigger text.
pub fn remove_trigger_tag(engine: &mut ProgressEngine, tag: &str) -> EngineResult<bool> {
    let Some(index) = engine.profile.find_trigger_tag(tag.trim()) else {
        return Ok(false);
    };

    let removed = engine.profile.trigger_tags.remove(index);
    tracing::debug!(tag = %removed, "trigger tag removed");

    pipeline::commit(engine);
    Ok(true)
}

/// Change the spend used for the savings estimate
pub fn set_average_daily_spend(engine: &mut ProgressEngine, amount: f64) -> EngineResult<()> {
    validate_daily_spend(amount)?;

    engine.profile.average_daily_spend = amount;
    tracing::debug!(amount, "average daily spend changed");

    pipeline::commit(engine);
    Ok(())
}

pub fn update_profile(engine: &mut ProgressEngine, update: ProfileUpdate) -> EngineResult<()> {
    update.apply_to(&mut engine.profile);

    pipeline::commit(engine);
    Ok(())
}
