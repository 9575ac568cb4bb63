//! Game Events
//!
//! Notifications generated by engine operations. The room layer drains
//! these after each committed mutation; `GameFinished` is forwarded to the
//! scoring collaborator.

use serde::{Deserialize, Serialize};

use crate::game::board::{CardColor, Team};
use crate::game::state::{ClueNumber, PlayerId, WinReason};

/// Why a turn passed to the other team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPassReason {
    /// Revealed a card that was not the guessing team's color
    WrongGuess,
    /// Used up the clue's guess budget
    GuessesExhausted,
    /// Voluntary pass
    Ended,
}

/// An event emitted by an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A spymaster gave a clue.
    ClueGiven {
        /// Team on turn
        team: Team,
        /// Clue word (uppercased)
        word: String,
        /// Clue number
        number: ClueNumber,
        /// Spymaster identity
        given_by: PlayerId,
    },

    /// An operative revealed a card.
    CardRevealed {
        /// Board index 0-24
        index: usize,
        /// The revealed word
        word: String,
        /// Its hidden color, now public
        color: CardColor,
        /// Who guessed it
        revealed_by: PlayerId,
    },

    /// The turn moved to the other team.
    TurnPassed {
        /// Team now on turn
        to: Team,
        /// Why the turn moved
        reason: TurnPassReason,
    },

    /// The game reached a terminal state.
    GameFinished {
        /// Winning team
        winner: Team,
        /// How they won
        reason: WinReason,
    },
}
