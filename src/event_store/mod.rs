//! Event Store
//!
//! Owns the raw history: the append-only craving log and the per-day
//! progress entries. Everything else in the engine is derived from it.
//!
//! ```text
//! log_craving ──► add_craving ──────────┐
//!                 upsert_daily_progress ─┼──► cravings() / daily_progress()
//! check-in / mindfulness ───────────────┘
//! ```

mod store;

pub use store::EventStore;
