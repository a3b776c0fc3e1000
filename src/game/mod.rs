//! Stateful matches built on the turn engine.
//!
//! - `session`: `GameSession`, the turn loop with its own dice and bookkeeping
//! - `stats`: per-session counters
//! - `event`: queued session events and the turn history
//! - `snapshot`: bincode save and restore

pub mod event;
pub mod session;
pub mod snapshot;
pub mod stats;

pub use event::{SessionEvent, TurnRecord};
pub use session::{GameMode, GameSession, SessionConfig, SessionStatus};
pub use snapshot::SessionSnapshot;
pub use stats::GameStats;
