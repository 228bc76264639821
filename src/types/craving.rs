//! Craving event types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a logged craving
pub type CravingId = Uuid;

/// A single logged urge
///
/// `timestamp` keeps the UTC offset that was local when the craving was
/// recorded, so hour-of-day analytics stay stable across time zone changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CravingEvent {
    pub id: CravingId,
    pub timestamp: DateTime<FixedOffset>,
    pub intensity: u8,
    pub trigger: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coping_strategy: Option<String>,
    pub did_give_in: bool,
    #[serde(default)]
    pub duration_seconds: u64,
}

impl CravingEvent {
    /// Build a new event from user input, assigning a fresh id
    pub fn from_input(input: CravingInput, recorded_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: input.timestamp.unwrap_or(recorded_at),
            intensity: input.intensity,
            trigger: input.trigger.trim().to_string(),
            location: input.location,
            emotional_state: input.emotional_state,
            coping_strategy: input.coping_strategy,
            did_give_in: input.did_give_in,
            duration_seconds: input.duration_seconds,
        }
    }

    /// True if the urge was resisted
    pub fn was_resisted(&self) -> bool {
        !self.did_give_in
    }
}

/// User-supplied fields for logging a craving
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CravingInput {
    /// When the craving happened; defaults to the engine clock's "now"
    #[serde(default)]
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub intensity: u8,
    pub trigger: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub emotional_state: Option<String>,
    #[serde(default)]
    pub coping_strategy: Option<String>,
    #[serde(default)]
    pub did_give_in: bool,
    #[serde(default)]
    pub duration_seconds: u64,
}

impl CravingInput {
    /// Create input with the two required fields
    pub fn new(intensity: u8, trigger: impl Into<String>) -> Self {
        Self {
            intensity,
            trigger: trigger.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn gave_in(mut self, did_give_in: bool) -> Self {
        self.did_give_in = did_give_in;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_emotional_state(mut self, state: impl Into<String>) -> Self {
        self.emotional_state = Some(state.into());
        self
    }

    pub fn with_coping_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.coping_strategy = Some(strategy.into());
        self
    }

    pub fn lasting(mut self, duration_seconds: u64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }
}

/// Partial edit of an existing craving; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CravingUpdate {
    #[serde(default)]
    pub timestamp: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub intensity: Option<u8>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub emotional_state: Option<Option<String>>,
    #[serde(default)]
    pub coping_strategy: Option<Option<String>>,
    #[serde(default)]
    pub did_give_in: Option<bool>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
}

impl CravingUpdate {
    /// Apply the edit to `event`, keeping its id
    pub fn apply_to(self, event: &mut CravingEvent) {
        if let Some(timestamp) = self.timestamp {
            event.timestamp = timestamp;
        }
        if let Some(intensity) = self.intensity {
            event.intensity = intensity;
        }
        if let Some(trigger) = self.trigger {
            event.trigger = trigger.trim().to_string();
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(state) = self.emotional_state {
            event.emotional_state = state;
        }
        if let Some(strategy) = self.coping_strategy {
            event.coping_strategy = strategy;
        }
        if let Some(did_give_in) = self.did_give_in {
            event.did_give_in = did_give_in;
        }
        if let Some(duration) = self.duration_seconds {
            event.duration_seconds = duration;
        }
    }
}
