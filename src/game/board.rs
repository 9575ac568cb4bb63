//! Board Generation
//!
//! Deals a fresh 5x5 board: 25 distinct words, a random starting team,
//! and a hidden color assignment of 9/8/7/1.

use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;
use crate::game::state::PlayerId;

/// Number of cards on a board.
pub const BOARD_SIZE: usize = 25;

/// Cards dealt to the team that goes first.
pub const STARTING_TEAM_CARDS: u8 = 9;

/// Cards dealt to the team that goes second.
pub const SECOND_TEAM_CARDS: u8 = 8;

/// Neutral cards per board.
pub const NEUTRAL_CARDS: u8 = 7;

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Red team
    Red,
    /// Blue team
    Blue,
}

impl Team {
    /// The other team.
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// Hidden color of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Belongs to the red team
    Red,
    /// Belongs to the blue team
    Blue,
    /// Belongs to neither team
    Neutral,
    /// Instant loss for the team that reveals it
    Assassin,
}

impl CardColor {
    /// The team this color belongs to, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            CardColor::Red => Some(Team::Red),
            CardColor::Blue => Some(Team::Blue),
            CardColor::Neutral | CardColor::Assassin => None,
        }
    }
}

impl From<Team> for CardColor {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => CardColor::Red,
            Team::Blue => CardColor::Blue,
        }
    }
}

/// A single card on the board.
///
/// `revealed` flips false to true exactly once, when a guess targets this
/// card; `revealed_by` is stamped at the same moment and never changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// The visible word
    pub word: String,
    /// Hidden color (redacted for non-spymasters at the view boundary)
    pub color: CardColor,
    /// Has this card been revealed?
    pub revealed: bool,
    /// Who revealed it (if revealed)
    pub revealed_by: Option<PlayerId>,
}

impl Card {
    /// Create an unrevealed card.
    pub fn new(word: String, color: CardColor) -> Self {
        Self {
            word,
            color,
            revealed: false,
            revealed_by: None,
        }
    }
}

/// A freshly dealt board.
#[derive(Clone, Debug)]
pub struct BoardSetup {
    /// The 25 cards in display order.
    pub cards: Vec<Card>,
    /// Team that goes first (holds 9 cards).
    pub starting_team: Team,
    /// Red cards on the board.
    pub red_count: u8,
    /// Blue cards on the board.
    pub blue_count: u8,
}

/// Board generation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Word pool holds fewer than 25 distinct words.
    #[error("Word pool has {found} distinct words, need {BOARD_SIZE}")]
    InsufficientWords {
        /// Distinct words available.
        found: usize,
    },
}

/// Deal a new board from a word pool.
///
/// Picks 25 distinct words by Fisher-Yates shuffling the deduplicated pool,
/// flips a coin for the starting team, then shuffles the color multiset
/// (9 starting, 8 other, 7 neutral, 1 assassin) over the words. Pure given
/// a seeded [`DeterministicRng`].
pub fn generate_board(pool: &[String], rng: &mut DeterministicRng) -> Result<BoardSetup, BoardError> {
    // Dedupe first; translated pools may repeat a word.
    let mut words: Vec<&String> = Vec::with_capacity(pool.len());
    let mut seen = std::collections::BTreeSet::new();
    for word in pool {
        if seen.insert(word.as_str()) {
            words.push(word);
        }
    }

    if words.len() < BOARD_SIZE {
        return Err(BoardError::InsufficientWords { found: words.len() });
    }

    rng.shuffle(&mut words);
    words.truncate(BOARD_SIZE);

    let starting_team = if rng.coin_flip() { Team::Red } else { Team::Blue };
    let second_team = starting_team.opponent();

    let mut colors: Vec<CardColor> = Vec::with_capacity(BOARD_SIZE);
    colors.extend(std::iter::repeat(CardColor::from(starting_team)).take(STARTING_TEAM_CARDS as usize));
    colors.extend(std::iter::repeat(CardColor::from(second_team)).take(SECOND_TEAM_CARDS as usize));
    colors.extend(std::iter::repeat(CardColor::Neutral).take(NEUTRAL_CARDS as usize));
    colors.push(CardColor::Assassin);

    rng.shuffle(&mut colors);

    let cards: Vec<Card> = words
        .into_iter()
        .zip(colors)
        .map(|(word, color)| Card::new(word.clone(), color))
        .collect();

    let (red_count, blue_count) = match starting_team {
        Team::Red => (STARTING_TEAM_CARDS, SECOND_TEAM_CARDS),
        Team::Blue => (SECOND_TEAM_CARDS, STARTING_TEAM_CARDS),
    };

    Ok(BoardSetup {
        cards,
        starting_team,
        red_count,
        blue_count,
    })
}

// =============================================================================
// TESTS
// =============================================================================
