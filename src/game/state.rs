//! Game State Definitions
//!
//! All state types for one running game: roster references, clues, the
//! guess budget, and the authoritative `GameState` aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::board::{BoardSetup, Card, Team};
use crate::game::events::GameEvent;

// =============================================================================
// PLAYER REFERENCES
// =============================================================================

/// Opaque player identifier supplied by the identity collaborator.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create from any string-ish value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Team assignment in the room roster. Spectators watch but cannot act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSlot {
    /// Red team member
    Red,
    /// Blue team member
    Blue,
    /// Watching only
    Spectator,
}

impl TeamSlot {
    /// The competing team this slot belongs to, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            TeamSlot::Red => Some(Team::Red),
            TeamSlot::Blue => Some(Team::Blue),
            TeamSlot::Spectator => None,
        }
    }
}

impl From<Team> for TeamSlot {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => TeamSlot::Red,
            Team::Blue => TeamSlot::Blue,
        }
    }
}

/// Role within a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees hidden colors, gives clues
    Spymaster,
    /// Sees only words, makes guesses
    Operative,
}

/// A player as the room directory describes them.
///
/// The engine does not own player lifecycle; it only needs team and role
/// to authorize actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    /// Identity from the session service
    pub player_id: PlayerId,
    /// Team assignment
    pub team: TeamSlot,
    /// Role, unset while still picking
    pub role: Option<Role>,
}

impl PlayerRef {
    /// Convenience constructor.
    pub fn new(player_id: impl Into<String>, team: TeamSlot, role: Option<Role>) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            team,
            role,
        }
    }
}

// =============================================================================
// CLUES
// =============================================================================

/// Wire sentinel for the infinity clue.
pub const INFINITE_CLUE_SENTINEL: u8 = 99;

/// The number part of a clue.
///
/// The legacy wire format carries 0-9 plus 99 for the infinity sign; this
/// models the three shapes explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ClueNumber {
    /// Unlimited guesses; words matching the clue are off limits by
    /// convention (not engine-enforced)
    Zero,
    /// Normal clue, 1-9
    Count(u8),
    /// Unlimited guesses; every remaining own word matches
    Infinite,
}

impl ClueNumber {
    /// Parse a wire integer (0-9 or 99). Returns `None` for anything else.
    pub fn from_wire(n: i64) -> Option<Self> {
        match n {
            0 => Some(ClueNumber::Zero),
            1..=9 => Some(ClueNumber::Count(n as u8)),
            n if n == INFINITE_CLUE_SENTINEL as i64 => Some(ClueNumber::Infinite),
            _ => None,
        }
    }

    /// Is this value legal? `Count` is only valid for 1-9.
    pub fn is_valid(self) -> bool {
        match self {
            ClueNumber::Count(n) => (1..=9).contains(&n),
            ClueNumber::Zero | ClueNumber::Infinite => true,
        }
    }
}

impl From<ClueNumber> for u8 {
    fn from(n: ClueNumber) -> u8 {
        match n {
            ClueNumber::Zero => 0,
            ClueNumber::Count(c) => c,
            ClueNumber::Infinite => INFINITE_CLUE_SENTINEL,
        }
    }
}

impl TryFrom<u8> for ClueNumber {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        ClueNumber::from_wire(n as i64).ok_or_else(|| format!("invalid clue number {}", n))
    }
}

impl std::fmt::Display for ClueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClueNumber::Zero => write!(f, "0"),
            ClueNumber::Count(n) => write!(f, "{}", n),
            ClueNumber::Infinite => write!(f, "∞"),
        }
    }
}

/// Guess allowance for the active clue.
///
/// `Unlimited` is absorbing: decrement is a no-op and it never reads as
/// exhausted. This replaces the large-sentinel-integer trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessBudget {
    /// A fixed number of guesses left
    Bounded(u32),
    /// No cap; only a wrong guess or an explicit end of turn closes out
    Unlimited,
}

impl GuessBudget {
    /// Budget granted by a clue: `Count(n)` gives `n + 1` (bonus guess),
    /// `Zero` and `Infinite` give unlimited guesses.
    pub fn for_clue(number: ClueNumber) -> Self {
        match number {
            ClueNumber::Zero | ClueNumber::Infinite => GuessBudget::Unlimited,
            ClueNumber::Count(n) => GuessBudget::Bounded(n as u32 + 1),
        }
    }

    /// No guesses allowed.
    pub const fn none() -> Self {
        GuessBudget::Bounded(0)
    }

    /// Can no further guess be made?
    pub fn is_exhausted(self) -> bool {
        matches!(self, GuessBudget::Bounded(0))
    }

    /// Spend one guess. No-op for `Unlimited`.
    pub fn spend(&mut self) {
        if let GuessBudget::Bounded(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

impl std::fmt::Display for GuessBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessBudget::Bounded(n) => write!(f, "{}", n),
            GuessBudget::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// The clue currently in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Clue word, stored uppercased
    pub word: String,
    /// Clue number
    pub number: ClueNumber,
    /// Spymaster who gave it
    pub given_by: PlayerId,
}

/// An entry in the append-only clue history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClueRecord {
    /// Team the clue was given for
    pub team: Team,
    /// Clue word
    pub word: String,
    /// Clue number
    pub number: ClueNumber,
    /// Spymaster who gave it
    pub given_by: PlayerId,
    /// When it was given
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The winner revealed every one of its cards
    AllCardsRevealed,
    /// The opposing team revealed the assassin
    OpponentHitAssassin,
}

/// Terminal outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Winning team
    pub team: Team,
    /// How they won
    pub reason: WinReason,
}

// =============================================================================
// GAME PHASE
// =============================================================================

/// Where in the clue/guess cycle the game is. Derived from state, never
/// stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Current team's spymaster must give a clue
    AwaitingClue,
    /// Clue active, current team's operatives may guess
    AwaitingGuess,
    /// Winner decided, no further mutations
    Finished,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete authoritative state of one game.
///
/// Exactly one instance exists per room while a game is in progress. All
/// mutation goes through the engine operations; callers read via snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// The 25 cards, fixed order for the whole game
    pub board: Vec<Card>,

    /// Team currently on turn
    pub current_turn: Team,

    /// Team that went first (holds 9 cards)
    pub starting_team: Team,

    /// Active clue, if any
    pub current_clue: Option<Clue>,

    /// Guesses left on the active clue
    pub guesses: GuessBudget,

    /// Unrevealed red cards
    pub red_remaining: u8,

    /// Unrevealed blue cards
    pub blue_remaining: u8,

    /// Set exactly once; the game is terminal afterwards
    pub winner: Option<Winner>,

    /// Append-only audit log of every clue given
    pub clue_history: Vec<ClueRecord>,

    /// Events generated by the last operation (drained by the room layer)
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create the initial state from a freshly dealt board.
    pub fn new(setup: BoardSetup) -> Self {
        Self {
            board: setup.cards,
            current_turn: setup.starting_team,
            starting_team: setup.starting_team,
            current_clue: None,
            guesses: GuessBudget::none(),
            red_remaining: setup.red_count,
            blue_remaining: setup.blue_count,
            winner: None,
            clue_history: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Current phase, derived from winner/clue/budget.
    pub fn phase(&self) -> GamePhase {
        if self.winner.is_some() {
            GamePhase::Finished
        } else if self.current_clue.is_some() && !self.guesses.is_exhausted() {
            GamePhase::AwaitingGuess
        } else {
            GamePhase::AwaitingClue
        }
    }

    /// Has a winner been decided?
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Unrevealed cards left for a team.
    pub fn remaining_for(&self, team: Team) -> u8 {
        match team {
            Team::Red => self.red_remaining,
            Team::Blue => self.blue_remaining,
        }
    }

    /// Card by board index.
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.board.get(index)
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clue_number_wire_parsing() {
        assert_eq!(ClueNumber::from_wire(0), Some(ClueNumber::Zero));
        assert_eq!(ClueNumber::from_wire(3), Some(ClueNumber::Count(3)));
        assert_eq!(ClueNumber::from_wire(9), Some(ClueNumber::Count(9)));
        assert_eq!(ClueNumber::from_wire(99), Some(ClueNumber::Infinite));

        assert_eq!(ClueNumber::from_wire(-1), None);
        assert_eq!(ClueNumber::from_wire(10), None);
        assert_eq!(ClueNumber::from_wire(100), None);
    }

    #[test]
    fn test_budget_for_clue() {
        // Stated count plus one bonus guess
        assert_eq!(
            GuessBudget::for_clue(ClueNumber::Count(3)),
            GuessBudget::Bounded(4)
        );
        assert_eq!(
            GuessBudget::for_clue(ClueNumber::Zero),
            GuessBudget::Unlimited
        );
        assert_eq!(
            GuessBudget::for_clue(ClueNumber::Infinite),
            GuessBudget::Unlimited
        );
    }

    #[test]
    fn test_unlimited_budget_is_absorbing() {
        let mut budget = GuessBudget::Unlimited;
        for _ in 0..1000 {
            budget.spend();
            assert!(!budget.is_exhausted());
        }
        assert_eq!(budget, GuessBudget::Unlimited);
    }

    #[test]
    fn test_bounded_budget_exhausts() {
        let mut budget = GuessBudget::Bounded(2);
        assert!(!budget.is_exhausted());
        budget.spend();
        assert!(!budget.is_exhausted());
        budget.spend();
        assert!(budget.is_exhausted());
        // Spending at zero stays at zero
        budget.spend();
        assert_eq!(budget, GuessBudget::Bounded(0));
    }

    #[test]
    fn test_team_slot_mapping() {
        assert_eq!(TeamSlot::Red.team(), Some(Team::Red));
        assert_eq!(TeamSlot::Blue.team(), Some(Team::Blue));
        assert_eq!(TeamSlot::Spectator.team(), None);
    }

    #[test]
    fn test_clue_number_serde_round_trip() {
        for n in [ClueNumber::Zero, ClueNumber::Count(5), ClueNumber::Infinite] {
            let json = serde_json::to_string(&n).unwrap();
            let back: ClueNumber = serde_json::from_str(&json).unwrap();
            assert_eq!(n, back);
        }
        // Sentinel appears on the wire as 99
        assert_eq!(serde_json::to_string(&ClueNumber::Infinite).unwrap(), "99");
        // Out-of-range numbers are rejected on the way in
        assert!(serde_json::from_str::<ClueNumber>("10").is_err());
    }

    proptest! {
        #[test]
        fn prop_bounded_spend_never_increases(start in 0u32..20, spends in 0usize..40) {
            let mut budget = GuessBudget::Bounded(start);
            let mut prev = start;
            for _ in 0..spends {
                budget.spend();
                if let GuessBudget::Bounded(n) = budget {
                    prop_assert!(n <= prev);
                    prev = n;
                }
            }
        }
    }
}
