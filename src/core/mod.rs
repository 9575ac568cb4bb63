//! Core deterministic primitives.
//!
//! Seeded randomness for board generation, reproducible from the room seed
//! so any dealt board can be audited after the fact.

pub mod rng;

// Re-export core types
pub use rng::{derive_board_seed, DeterministicRng};
