//! Game Rules Module
//!
//! The deterministic rules engine. Everything in here is pure state
//! manipulation; rooms, identity, and scoring live in `room/`.
//!
//! ## Module Structure
//!
//! - `words`: Built-in word pools and the `WordSource` seam
//! - `board`: Board generation (25 words, 9/8/7/1 colors)
//! - `state`: Game state, clues, guess budget
//! - `engine`: The four operations and outcome resolution
//! - `events`: Events emitted by operations
//! - `view`: Role-redacted snapshots

pub mod board;
pub mod engine;
pub mod events;
pub mod state;
pub mod view;
pub mod words;

// Re-export key types
pub use board::{generate_board, BoardError, BoardSetup, Card, CardColor, Team, BOARD_SIZE};
pub use engine::{validate_roster, GameError, GuessOutcome};
pub use events::{GameEvent, TurnPassReason};
pub use state::{
    Clue, ClueNumber, ClueRecord, GamePhase, GameState, GuessBudget, PlayerId, PlayerRef, Role,
    TeamSlot, WinReason, Winner,
};
pub use view::{CardView, GameView};
pub use words::{BuiltinWordBank, Language, WordSource};
