//! Utility functions and helpers
//!
//! The injected clock and crash-safe file writes.

pub mod atomic;
pub mod clock;

pub use atomic::{atomic_write, cleanup_temp_files, TEMP_EXTENSION};
pub use clock::{Clock, ManualClock, SystemClock};
