//! Scoring Notifications
//!
//! When a game finishes, the room manager posts a [`FinishedNotice`] on a
//! bounded channel and moves on; a worker task turns notices into point
//! awards against the external profile store. Scoring can never fail or
//! delay a game transition.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

use crate::game::board::Team;
use crate::game::state::{PlayerId, PlayerRef, WinReason};
use crate::room::manager::RoomId;

/// Points for each player on the winning team.
pub const WINNER_POINTS: u32 = 10;

/// Participation points for each player on the losing team.
pub const PARTICIPATION_POINTS: u32 = 3;

/// Terminal outcome of a room's game, as handed to scoring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinishedNotice {
    /// Room the game ran in.
    pub room_id: RoomId,
    /// Winning team.
    pub winner: Team,
    /// How they won.
    pub reason: WinReason,
    /// Roster at the moment the game finished.
    pub players: Vec<PlayerRef>,
    /// When the game finished.
    pub finished_at: DateTime<Utc>,
}

/// One player's award for a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAward {
    /// Who gets the points.
    pub player_id: PlayerId,
    /// Points to add to the profile.
    pub points: u32,
    /// Counts as a won game (else a lost one).
    pub won: bool,
}

/// External profile store that receives awards.
pub trait ScoreSink: Send + Sync {
    /// Apply one award. Best effort; failures are the sink's to log.
    fn award(&self, award: ScoreAward);
}

/// Awards for a finished game: 10 points and a win for each winning-team
/// player, 3 points and a loss for each losing-team player. Spectators get
/// nothing.
pub fn awards_for(notice: &FinishedNotice) -> Vec<ScoreAward> {
    notice
        .players
        .iter()
        .filter_map(|player| {
            let team = player.team.team()?;
            let won = team == notice.winner;
            Some(ScoreAward {
                player_id: player.player_id.clone(),
                points: if won { WINNER_POINTS } else { PARTICIPATION_POINTS },
                won,
            })
        })
        .collect()
}

/// Consume finished notices until the channel closes.
pub async fn run_score_worker(mut rx: mpsc::Receiver<FinishedNotice>, sink: Arc<dyn ScoreSink>) {
    while let Some(notice) = rx.recv().await {
        info!(
            room = %notice.room_id,
            winner = %notice.winner,
            players = notice.players.len(),
            "awarding points for finished game"
        );
        for award in awards_for(&notice) {
            sink.award(award);
        }
    }
}

/// Sink that only logs awards. Stands in for the profile store in the demo
/// binary and in deployments without persistent stats.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingScoreSink;

impl ScoreSink for LoggingScoreSink {
    fn award(&self, award: ScoreAward) {
        info!(
            player = %award.player_id,
            points = award.points,
            won = award.won,
            "score awarded"
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
