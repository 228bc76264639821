//! Input validation for the event store boundary
//!
//! Bad input is rejected with a `ValidationError` naming the violated
//! constraint instead of being clamped or silently accepted.

mod rules;

pub use rules::{
    validate_check_in_date, validate_craving_input, validate_craving_timestamp,
    validate_craving_update,
    validate_daily_spend, validate_mindfulness_minutes, validate_trigger_tag, ValidationError,
    MAX_INTENSITY, MAX_MINDFULNESS_MINUTES, MAX_NOTE_LEN, MAX_TRIGGER_LEN, MIN_INTENSITY,
};
