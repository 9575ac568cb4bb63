//! # Codewords Game Server
//!
//! Authoritative rules engine and room service for a two-team word
//! deduction game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CODEWORDS SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG, seed derivation │
//! │                                                              │
//! │  game/           - Rules engine (pure, deterministic)        │
//! │  ├── words.rs    - Word pools and the WordSource seam        │
//! │  ├── board.rs    - Board generation (25 words, 9/8/7/1)      │
//! │  ├── state.rs    - Game state, clues, guess budget           │
//! │  ├── engine.rs   - give_clue / make_guess / end_turn         │
//! │  ├── events.rs   - Events emitted by operations              │
//! │  └── view.rs     - Role-redacted snapshots                   │
//! │                                                              │
//! │  room/           - Service layer (async, non-deterministic)  │
//! │  ├── manager.rs  - Room registry, command routing            │
//! │  └── score.rs    - Decoupled point awarding                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - No system time except timestamps passed in by the caller
//! - No HashMap (uses BTreeMap/BTreeSet for sorted iteration)
//! - All randomness from seeded Xorshift128+
//!
//! Given the same seed and word pool, board generation deals the same
//! board on any platform; given the same command sequence, the engine
//! reaches the same state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod room;

// Re-export commonly used types
pub use crate::core::rng::{derive_board_seed, DeterministicRng};
pub use game::{
    generate_board, BoardSetup, Card, CardColor, ClueNumber, GameError, GamePhase, GameState,
    GameView, GuessBudget, PlayerId, PlayerRef, Role, Team, TeamSlot, WinReason, Winner,
};
pub use room::{RoomError, RoomId, RoomManager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
