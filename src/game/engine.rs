//! Game Engine
//!
//! The four state-changing operations over [`GameState`] and the roster
//! checks that gate game start. Every operation validates fully before
//! mutating, so a rejected call leaves state untouched and is safe to
//! retry.

use chrono::{DateTime, Utc};

use crate::game::board::{CardColor, Team};
use crate::game::events::{GameEvent, TurnPassReason};
use crate::game::state::{
    Clue, ClueNumber, ClueRecord, GameState, GuessBudget, PlayerRef, Role, WinReason, Winner,
};

/// Minimum players per team.
pub const MIN_TEAM_SIZE: usize = 2;

/// Rule violations. All are rejected synchronously with no state change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A winner has been decided.
    #[error("Game is over")]
    GameOver,

    /// Caller is not in the room roster.
    #[error("Player not found")]
    PlayerNotFound,

    /// Caller's team is not on turn (or caller is a spectator).
    #[error("Not your turn")]
    NotYourTurn,

    /// Only the spymaster can give clues.
    #[error("Only spymaster can give clues")]
    NotSpymaster,

    /// A clue is still active with guesses remaining.
    #[error("Team is still guessing")]
    ClueInProgress,

    /// Clue word is empty after trimming.
    #[error("Clue word cannot be empty")]
    EmptyClue,

    /// Clue number outside 0-9 and the infinity sign.
    #[error("Clue number must be 0-9 or ∞ (infinite)")]
    InvalidClueNumber,

    /// Guess attempted with no active clue.
    #[error("Waiting for spymaster to give a clue")]
    NoActiveClue,

    /// Guess budget for the active clue is used up.
    #[error("No guesses remaining")]
    NoGuessesRemaining,

    /// Board index outside 0-24.
    #[error("Invalid word index {index}")]
    InvalidWordIndex {
        /// The offending index.
        index: usize,
    },

    /// Card at the index is already revealed.
    #[error("Word already revealed")]
    WordAlreadyRevealed {
        /// The offending index.
        index: usize,
    },

    /// A team has fewer than two players.
    #[error("Both teams need at least {MIN_TEAM_SIZE} players")]
    InsufficientPlayers,

    /// A team has no spymaster.
    #[error("{team} team needs a spymaster")]
    MissingSpymaster {
        /// Team without one.
        team: Team,
    },

    /// A team has more than one spymaster. The roster collaborator should
    /// already prevent this; the engine re-validates defensively.
    #[error("{team} team has more than one spymaster")]
    DuplicateSpymaster {
        /// Team with too many.
        team: Team,
    },
}

/// What a successful guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Board index that was revealed.
    pub index: usize,
    /// The revealed color.
    pub color: CardColor,
    /// Set when the guess ended the game.
    pub winner: Option<Winner>,
    /// Set when the guess passed the turn (and the game continues).
    pub turn_passed: Option<TurnPassReason>,
}

/// Check a roster is fit to start a game: both teams have at least two
/// players and exactly one spymaster each.
pub fn validate_roster(players: &[PlayerRef]) -> Result<(), GameError> {
    for team in [Team::Red, Team::Blue] {
        let members: Vec<&PlayerRef> = players
            .iter()
            .filter(|p| p.team.team() == Some(team))
            .collect();

        if members.len() < MIN_TEAM_SIZE {
            return Err(GameError::InsufficientPlayers);
        }

        let spymasters = members
            .iter()
            .filter(|p| p.role == Some(Role::Spymaster))
            .count();
        match spymasters {
            0 => return Err(GameError::MissingSpymaster { team }),
            1 => {}
            _ => return Err(GameError::DuplicateSpymaster { team }),
        }
    }
    Ok(())
}

impl GameState {
    /// Spymaster gives a clue for the team on turn.
    ///
    /// The word is trimmed and uppercased; the guess budget is derived from
    /// the number (`Count(n)` grants `n + 1`, `Zero`/`Infinite` grant
    /// unlimited). Appends to the clue history and emits `ClueGiven`.
    pub fn give_clue(
        &mut self,
        player: &PlayerRef,
        word: &str,
        number: ClueNumber,
        now: DateTime<Utc>,
    ) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player.team.team() != Some(self.current_turn) {
            return Err(GameError::NotYourTurn);
        }
        if player.role != Some(Role::Spymaster) {
            return Err(GameError::NotSpymaster);
        }
        if self.current_clue.is_some() && !self.guesses.is_exhausted() {
            return Err(GameError::ClueInProgress);
        }

        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::EmptyClue);
        }
        if !number.is_valid() {
            return Err(GameError::InvalidClueNumber);
        }

        let word = word.to_uppercase();
        let clue = Clue {
            word: word.clone(),
            number,
            given_by: player.player_id.clone(),
        };

        self.guesses = GuessBudget::for_clue(number);
        self.current_clue = Some(clue);
        self.clue_history.push(ClueRecord {
            team: self.current_turn,
            word: word.clone(),
            number,
            given_by: player.player_id.clone(),
            timestamp: now,
        });

        self.push_event(GameEvent::ClueGiven {
            team: self.current_turn,
            word,
            number,
            given_by: player.player_id.clone(),
        });

        Ok(())
    }

    /// Operative reveals the card at `word_index` for the team on turn.
    ///
    /// Resolution priority: assassin loss, then either side running out of
    /// cards, then wrong-guess turn pass, then budget exhaustion.
    pub fn make_guess(
        &mut self,
        player: &PlayerRef,
        word_index: usize,
    ) -> Result<GuessOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player.team.team() != Some(self.current_turn) {
            return Err(GameError::NotYourTurn);
        }
        if self.current_clue.is_none() {
            return Err(GameError::NoActiveClue);
        }
        if self.guesses.is_exhausted() {
            return Err(GameError::NoGuessesRemaining);
        }

        let color = {
            let card = self
                .board
                .get(word_index)
                .ok_or(GameError::InvalidWordIndex { index: word_index })?;
            if card.revealed {
                return Err(GameError::WordAlreadyRevealed { index: word_index });
            }
            card.color
        };

        // All checks passed; mutate.
        let card = &mut self.board[word_index];
        card.revealed = true;
        card.revealed_by = Some(player.player_id.clone());
        let word = card.word.clone();

        self.guesses.spend();
        match color {
            CardColor::Red => self.red_remaining -= 1,
            CardColor::Blue => self.blue_remaining -= 1,
            CardColor::Neutral | CardColor::Assassin => {}
        }

        self.push_event(GameEvent::CardRevealed {
            index: word_index,
            word,
            color,
            revealed_by: player.player_id.clone(),
        });

        let mut outcome = GuessOutcome {
            index: word_index,
            color,
            winner: None,
            turn_passed: None,
        };

        if color == CardColor::Assassin {
            let winner = Winner {
                team: self.current_turn.opponent(),
                reason: WinReason::OpponentHitAssassin,
            };
            self.finish(winner);
            outcome.winner = Some(winner);
        } else if self.red_remaining == 0 {
            let winner = Winner {
                team: Team::Red,
                reason: WinReason::AllCardsRevealed,
            };
            self.finish(winner);
            outcome.winner = Some(winner);
        } else if self.blue_remaining == 0 {
            let winner = Winner {
                team: Team::Blue,
                reason: WinReason::AllCardsRevealed,
            };
            self.finish(winner);
            outcome.winner = Some(winner);
        } else if color.team() != Some(self.current_turn) {
            self.pass_turn(TurnPassReason::WrongGuess);
            outcome.turn_passed = Some(TurnPassReason::WrongGuess);
        } else if self.guesses.is_exhausted() {
            self.pass_turn(TurnPassReason::GuessesExhausted);
            outcome.turn_passed = Some(TurnPassReason::GuessesExhausted);
        }
        // Correct guess with budget left: clue persists, same team keeps
        // guessing.

        Ok(outcome)
    }

    /// Voluntarily pass the turn. Any member of the team on turn may do
    /// this; it is the only way to close out an unlimited clue without a
    /// turn-ending guess.
    pub fn end_turn(&mut self, player: &PlayerRef) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player.team.team() != Some(self.current_turn) {
            return Err(GameError::NotYourTurn);
        }

        self.pass_turn(TurnPassReason::Ended);
        Ok(())
    }

    fn pass_turn(&mut self, reason: TurnPassReason) {
        self.current_turn = self.current_turn.opponent();
        self.guesses = GuessBudget::none();
        self.current_clue = None;
        self.push_event(GameEvent::TurnPassed {
            to: self.current_turn,
            reason,
        });
    }

    fn finish(&mut self, winner: Winner) {
        self.winner = Some(winner);
        self.guesses = GuessBudget::none();
        self.current_clue = None;
        self.push_event(GameEvent::GameFinished {
            winner: winner.team,
            reason: winner.reason,
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
