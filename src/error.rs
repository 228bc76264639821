//! Crate-level error type

use thiserror::Error;

use crate::persistence::PersistenceError;
use crate::types::CravingId;
use crate::validation::ValidationError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by `ProgressEngine`
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("craving {id} not found")]
    NotFound { id: CravingId },

    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl EngineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display() {
        let err = EngineError::from(ValidationError::IntensityOutOfRange(42));
        assert_eq!(
            err.to_string(),
            "validation failed: intensity must be between 1 and 10, got 42"
        );
        assert!(err.is_validation());

        let id = Uuid::nil();
        let err = EngineError::NotFound { id };
        assert_eq!(
            err.to_string(),
            "craving 00000000-0000-0000-0000-000000000000 not found"
        );
        assert!(!err.is_validation());
    }
}
