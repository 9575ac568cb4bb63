//! Room Layer
//!
//! Bridges the pure rules engine to the running service: per-room game
//! records behind async locks, caller resolution through the room
//! directory, and decoupled score awarding.
//!
//! ## Module Structure
//!
//! - `manager`: Room registry and the four game commands
//! - `score`: Finished-game notices and point awards

pub mod manager;
pub mod score;

// Re-export key types
pub use manager::{InMemoryDirectory, RoomDirectory, RoomError, RoomId, RoomManager};
pub use score::{
    awards_for, run_score_worker, FinishedNotice, LoggingScoreSink, ScoreAward, ScoreSink,
    PARTICIPATION_POINTS, WINNER_POINTS,
};
