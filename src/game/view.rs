//! Game Views
//!
//! Read-only snapshots of a game, redacted per viewer role. The stored
//! state always holds full colors; hiding them from non-spymasters happens
//! here, at the serialization boundary, and nowhere else.

use serde::{Deserialize, Serialize};

use crate::game::board::{CardColor, Team};
use crate::game::state::{
    Clue, ClueRecord, GamePhase, GameState, GuessBudget, PlayerId, PlayerRef, Role, Winner,
};

/// One card as a given viewer may see it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardView {
    /// The visible word
    pub word: String,
    /// Hidden color; `None` until revealed unless the viewer is a spymaster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,
    /// Has this card been revealed?
    pub revealed: bool,
    /// Who revealed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_by: Option<PlayerId>,
}

/// Snapshot of a game for one viewer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameView {
    /// The 25 cards, colors redacted as appropriate
    pub board: Vec<CardView>,
    /// Team on turn
    pub current_turn: Team,
    /// Team that went first
    pub starting_team: Team,
    /// Active clue (clue words are public once given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_clue: Option<Clue>,
    /// Guesses left on the active clue
    pub guesses: GuessBudget,
    /// Unrevealed red cards
    pub red_remaining: u8,
    /// Unrevealed blue cards
    pub blue_remaining: u8,
    /// Terminal outcome, if decided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    /// Full clue history
    pub clue_history: Vec<ClueRecord>,
    /// Derived phase
    pub phase: GamePhase,
}

impl GameView {
    /// Build a snapshot for a viewer. `None` means an anonymous observer
    /// (same visibility as an operative). When the game is finished every
    /// color is public.
    pub fn for_viewer(state: &GameState, viewer: Option<&PlayerRef>) -> Self {
        let all_visible =
            state.is_finished() || viewer.is_some_and(|p| p.role == Some(Role::Spymaster));

        let board = state
            .board
            .iter()
            .map(|card| CardView {
                word: card.word.clone(),
                color: if all_visible || card.revealed {
                    Some(card.color)
                } else {
                    None
                },
                revealed: card.revealed,
                revealed_by: card.revealed_by.clone(),
            })
            .collect();

        Self {
            board,
            current_turn: state.current_turn,
            starting_team: state.starting_team,
            current_clue: state.current_clue.clone(),
            guesses: state.guesses,
            red_remaining: state.red_remaining,
            blue_remaining: state.blue_remaining,
            winner: state.winner,
            clue_history: state.clue_history.clone(),
            phase: state.phase(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DeterministicRng;
    use crate::game::board::generate_board;
    use crate::game::state::{ClueNumber, TeamSlot};
    use crate::game::words::{BuiltinWordBank, Language, WordSource};
    use chrono::Utc;

    fn fresh_state() -> GameState {
        let pool = BuiltinWordBank.word_pool(Language::En);
        let mut rng = DeterministicRng::new(42);
        GameState::new(generate_board(&pool, &mut rng).unwrap())
    }

    #[test]
    fn test_operative_sees_no_hidden_colors() {
        let state = fresh_state();
        let operative = PlayerRef::new("op", TeamSlot::Red, Some(Role::Operative));

        let view = GameView::for_viewer(&state, Some(&operative));
        assert!(view.board.iter().all(|c| c.color.is_none()));
    }

    #[test]
    fn test_spymaster_sees_all_colors() {
        let state = fresh_state();
        let spymaster = PlayerRef::new("sm", TeamSlot::Blue, Some(Role::Spymaster));

        let view = GameView::for_viewer(&state, Some(&spymaster));
        assert!(view.board.iter().all(|c| c.color.is_some()));
    }

    #[test]
    fn test_revealed_cards_are_public() {
        let mut state = fresh_state();
        let team = state.current_turn;
        let spymaster = PlayerRef::new("sm", TeamSlot::from(team), Some(Role::Spymaster));
        let operative = PlayerRef::new("op", TeamSlot::from(team), Some(Role::Operative));

        state
            .give_clue(&spymaster, "clue", ClueNumber::Count(1), Utc::now())
            .unwrap();
        state.make_guess(&operative, 3).unwrap();

        let view = GameView::for_viewer(&state, None);
        assert!(view.board[3].revealed);
        assert_eq!(view.board[3].color, Some(state.board[3].color));
        assert_eq!(view.board[3].revealed_by, Some("op".into()));
        // Everything unrevealed stays hidden
        for (i, card) in view.board.iter().enumerate() {
            if i != 3 {
                assert!(card.color.is_none());
            }
        }
    }

    #[test]
    fn test_unrevealed_color_absent_from_json() {
        let state = fresh_state();
        let view = GameView::for_viewer(&state, None);
        let json = serde_json::to_value(&view).unwrap();
        // Redaction means the key is absent, not null
        assert!(json["board"][0].get("color").is_none());
    }
}
