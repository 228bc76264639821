//! Validation rules and the error they produce

use chrono::{DateTime, FixedOffset, NaiveDate};
use thiserror::Error;

use crate::types::{CravingInput, CravingUpdate};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// Longest accepted trigger label, in characters
pub const MAX_TRIGGER_LEN: usize = 80;

/// Longest accepted free-text note (location, emotional state, coping strategy)
pub const MAX_NOTE_LEN: usize = 500;

/// A single mindfulness session cannot exceed one day
pub const MAX_MINDFULNESS_MINUTES: u32 = 24 * 60;

/// A rejected mutation input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("intensity must be between {min} and {max}, got {0}", min = MIN_INTENSITY, max = MAX_INTENSITY)]
    IntensityOutOfRange(u8),

    #[error("trigger must not be empty")]
    EmptyTrigger,

    #[error("trigger exceeds {max} characters ({0})", max = MAX_TRIGGER_LEN)]
    TriggerTooLong(usize),

    #[error("{field} exceeds {max} characters ({len})", max = MAX_NOTE_LEN)]
    NoteTooLong { field: &'static str, len: usize },

    #[error("mindfulness minutes must be between 1 and {max}, got {0}", max = MAX_MINDFULNESS_MINUTES)]
    MindfulnessOutOfRange(u32),

    #[error("date {date} is after today ({today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("average daily spend must be a finite non-negative amount, got {0}")]
    InvalidSpend(f64),
}

fn check_intensity(intensity: u8) -> Result<(), ValidationError> {
    if (MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        Ok(())
    } else {
        Err(ValidationError::IntensityOutOfRange(intensity))
    }
}

fn check_trigger(trigger: &str) -> Result<(), ValidationError> {
    let trimmed = trigger.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTrigger);
    }
    let len = trimmed.chars().count();
    if len > MAX_TRIGGER_LEN {
        return Err(ValidationError::TriggerTooLong(len));
    }
    Ok(())
}

fn check_note(field: &'static str, note: Option<&str>) -> Result<(), ValidationError> {
    match note.map(|n| n.chars().count()) {
        Some(len) if len > MAX_NOTE_LEN => Err(ValidationError::NoteTooLong { field, len }),
        _ => Ok(()),
    }
}

/// Validate a new craving before it reaches the store
pub fn validate_craving_input(input: &CravingInput) -> Result<(), ValidationError> {
    check_intensity(input.intensity)?;
    check_trigger(&input.trigger)?;
    check_note("location", input.location.as_deref())?;
    check_note("emotional state", input.emotional_state.as_deref())?;
    check_note("coping strategy", input.coping_strategy.as_deref())?;
    Ok(())
}

/// Validate only the fields an update actually sets
pub fn validate_craving_update(update: &CravingUpdate) -> Result<(), ValidationError> {
    if let Some(intensity) = update.intensity {
        check_intensity(intensity)?;
    }
    if let Some(trigger) = &update.trigger {
        check_trigger(trigger)?;
    }
    check_note("location", update.location.as_ref().and_then(|n| n.as_deref()))?;
    check_note(
        "emotional state",
        update.emotional_state.as_ref().and_then(|n| n.as_deref()),
    )?;
    check_note(
        "coping strategy",
        update.coping_strategy.as_ref().and_then(|n| n.as_deref()),
    )?;
    Ok(())
}

pub fn validate_mindfulness_minutes(minutes: u32) -> Result<(), ValidationError> {
    if minutes == 0 || minutes > MAX_MINDFULNESS_MINUTES {
        Err(ValidationError::MindfulnessOutOfRange(minutes))
    } else {
        Ok(())
    }
}

pub fn validate_check_in_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        Err(ValidationError::FutureDate { date, today })
    } else {
        Ok(())
    }
}

/// A craving may not be dated on a calendar day after `today`
pub fn validate_craving_timestamp(
    timestamp: DateTime<FixedOffset>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    validate_check_in_date(timestamp.date_naive(), today)
}

pub fn validate_daily_spend(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidSpend(amount))
    }
}

/// Trigger tags follow the same rules as a craving's trigger
pub fn validate_trigger_tag(tag: &str) -> Result<(), ValidationError> {
    check_trigger(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_bounds() {
        assert!(validate_craving_input(&CravingInput::new(1, "Stress")).is_ok());
        assert!(validate_craving_input(&CravingInput::new(10, "Stress")).is_ok());
        assert_eq!(
            validate_craving_input(&CravingInput::new(0, "Stress")),
            Err(ValidationError::IntensityOutOfRange(0))
        );
        assert_eq!(
            validate_craving_input(&CravingInput::new(11, "Stress")),
            Err(ValidationError::IntensityOutOfRange(11))
        );
    }

    #[test]
    fn test_blank_trigger_rejected() {
        assert_eq!(
            validate_craving_input(&CravingInput::new(5, "   ")),
            Err(ValidationError::EmptyTrigger)
        );
    }

    #[test]
    fn test_long_trigger_rejected() {
        let trigger = "x".repeat(MAX_TRIGGER_LEN + 1);
        let err = validate_craving_input(&CravingInput::new(5, trigger)).unwrap_err();
        assert!(err.to_string().contains("trigger exceeds"));
    }

    #[test]
    fn test_long_note_rejected() {
        let input = CravingInput::new(5, "Stress").with_location("y".repeat(MAX_NOTE_LEN + 1));
        assert!(matches!(
            validate_craving_input(&input),
            Err(ValidationError::NoteTooLong { field: "location", .. })
        ));
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        assert!(validate_craving_update(&CravingUpdate::default()).is_ok());

        let update = CravingUpdate {
            intensity: Some(12),
            ..Default::default()
        };
        assert_eq!(
            validate_craving_update(&update),
            Err(ValidationError::IntensityOutOfRange(12))
        );

        let update = CravingUpdate {
            trigger: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(validate_craving_update(&update), Err(ValidationError::EmptyTrigger));
    }

    #[test]
    fn test_mindfulness_minutes() {
        assert!(validate_mindfulness_minutes(10).is_ok());
        assert!(validate_mindfulness_minutes(0).is_err());
        assert!(validate_mindfulness_minutes(MAX_MINDFULNESS_MINUTES + 1).is_err());
    }

    #[test]
    fn test_future_check_in_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(validate_check_in_date(today, today).is_ok());
        assert!(validate_check_in_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_check_in_date(today.succ_opt().unwrap(), today).is_err());
    }

    #[test]
    fn test_craving_timestamp_not_after_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let late_evening = DateTime::parse_from_rfc3339("2024-06-10T23:59:00-07:00").unwrap();
        let tomorrow = DateTime::parse_from_rfc3339("2024-06-11T00:05:00-07:00").unwrap();

        assert!(validate_craving_timestamp(late_evening, today).is_ok());
        assert_eq!(
            validate_craving_timestamp(tomorrow, today),
            Err(ValidationError::FutureDate {
                date: tomorrow.date_naive(),
                today,
            })
        );
    }

    #[test]
    fn test_daily_spend() {
        assert!(validate_daily_spend(0.0).is_ok());
        assert!(validate_daily_spend(25.5).is_ok());
        assert!(validate_daily_spend(-1.0).is_err());
        assert!(validate_daily_spend(f64::NAN).is_err());
        assert!(validate_daily_spend(f64::INFINITY).is_err());
    }
}
