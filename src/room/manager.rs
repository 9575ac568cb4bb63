//! Room Management
//!
//! One game per room, mutated only behind that room's write lock. The
//! manager resolves callers through the room directory, routes the four
//! commands into the engine, and forwards terminal events to scoring after
//! the mutation has committed.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

use crate::core::rng::{derive_board_seed, DeterministicRng};
use crate::game::board::generate_board;
use crate::game::engine::validate_roster;
use crate::game::events::GameEvent;
use crate::game::state::{ClueNumber, GameState, PlayerId, PlayerRef};
use crate::game::view::GameView;
use crate::game::words::{Language, WordSource};
use crate::game::{BoardError, GameError};
use crate::room::score::FinishedNotice;

/// Unique room identifier (UUID as bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub [u8; 16]);

impl RoomId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create a fresh random id.
    pub fn new_random() -> Self {
        Self(uuid::Uuid::new_v4().into_bytes())
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(|u| Self(*u.as_bytes()))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", uuid::Uuid::from_bytes(self.0))
    }
}

/// Supplies room membership. The directory owns joining, leaving, team and
/// role picking; the game layer only ever reads from it.
pub trait RoomDirectory: Send + Sync {
    /// Current roster of a room.
    fn list_players(&self, room: &RoomId) -> Vec<PlayerRef>;
}

/// Directory backed by a map, for tests and the demo binary.
#[derive(Default)]
pub struct InMemoryDirectory {
    rooms: std::sync::RwLock<BTreeMap<RoomId, Vec<PlayerRef>>>,
}

impl InMemoryDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a room's roster.
    pub fn set_roster(&self, room: RoomId, players: Vec<PlayerRef>) {
        self.rooms.write().expect("directory lock").insert(room, players);
    }
}

impl RoomDirectory for InMemoryDirectory {
    fn list_players(&self, room: &RoomId) -> Vec<PlayerRef> {
        self.rooms
            .read()
            .expect("directory lock")
            .get(room)
            .cloned()
            .unwrap_or_default()
    }
}

/// Room command errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// No game is running in this room.
    #[error("No game in room")]
    RoomNotFound,

    /// A game is already running and has no winner yet.
    #[error("Game already in progress")]
    GameInProgress,

    /// Board could not be generated.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The engine rejected the action.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// One room's game record.
struct GameRoom {
    state: GameState,
    /// Bumped on every committed mutation.
    version: u64,
    /// Seed the board was dealt from, kept for audits.
    seed: u64,
}

/// Manages the games of all active rooms.
pub struct RoomManager {
    rooms: RwLock<BTreeMap<RoomId, Arc<RwLock<GameRoom>>>>,
    directory: Arc<dyn RoomDirectory>,
    words: Arc<dyn WordSource>,
    finished_tx: mpsc::Sender<FinishedNotice>,
}

impl RoomManager {
    /// Create a manager. Terminal outcomes go out on `finished_tx`.
    pub fn new(
        directory: Arc<dyn RoomDirectory>,
        words: Arc<dyn WordSource>,
        finished_tx: mpsc::Sender<FinishedNotice>,
    ) -> Self {
        Self {
            rooms: RwLock::new(BTreeMap::new()),
            directory,
            words,
            finished_tx,
        }
    }

    /// Start a game with a fresh random seed.
    pub async fn start_game(
        &self,
        room_id: RoomId,
        caller: &PlayerId,
        language: Language,
    ) -> Result<(), RoomError> {
        let roster = self.directory.list_players(&room_id);
        let mut ids: Vec<&str> = roster.iter().map(|p| p.player_id.as_str()).collect();
        ids.sort_unstable();

        let mut entropy = [0u8; 32];
        entropy[..16].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
        entropy[16..].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
        let seed = derive_board_seed(&entropy, room_id.as_bytes(), &ids);

        self.start_game_seeded(room_id, caller, language, seed).await
    }

    /// Start a game from an explicit seed (audits, tests).
    pub async fn start_game_seeded(
        &self,
        room_id: RoomId,
        caller: &PlayerId,
        language: Language,
        seed: u64,
    ) -> Result<(), RoomError> {
        let roster = self.directory.list_players(&room_id);
        // Caller must at least be in the room
        let _ = find_player(&roster, caller)?;
        validate_roster(&roster)?;

        let pool = self.words.word_pool(language);
        let mut rng = DeterministicRng::new(seed);
        let setup = generate_board(&pool, &mut rng)?;

        let mut rooms = self.rooms.write().await;
        let prior_version = if let Some(existing) = rooms.get(&room_id) {
            let room = existing.read().await;
            if !room.state.is_finished() {
                return Err(RoomError::GameInProgress);
            }
            room.version
        } else {
            0
        };

        let starting_team = setup.starting_team;
        rooms.insert(
            room_id,
            Arc::new(RwLock::new(GameRoom {
                state: GameState::new(setup),
                version: prior_version + 1,
                seed,
            })),
        );

        info!(room = %room_id, %starting_team, ?language, "game started");
        Ok(())
    }

    /// Spymaster gives a clue. `number` is the wire integer (0-9 or 99).
    pub async fn give_clue(
        &self,
        room_id: RoomId,
        caller: &PlayerId,
        word: &str,
        number: i64,
    ) -> Result<(), RoomError> {
        let number = ClueNumber::from_wire(number).ok_or(GameError::InvalidClueNumber)?;
        let player = self.resolve(&room_id, caller)?;
        let room = self.get_room(&room_id).await?;

        let events = {
            let mut room = room.write().await;
            room.state.give_clue(&player, word, number, Utc::now())?;
            room.version += 1;
            room.state.take_events()
        };

        self.dispatch(&room_id, events).await;
        Ok(())
    }

    /// Operative guesses the card at `word_index`.
    pub async fn make_guess(
        &self,
        room_id: RoomId,
        caller: &PlayerId,
        word_index: usize,
    ) -> Result<(), RoomError> {
        let player = self.resolve(&room_id, caller)?;
        let room = self.get_room(&room_id).await?;

        let events = {
            let mut room = room.write().await;
            room.state.make_guess(&player, word_index)?;
            room.version += 1;
            room.state.take_events()
        };

        self.dispatch(&room_id, events).await;
        Ok(())
    }

    /// Pass the turn voluntarily.
    pub async fn end_turn(&self, room_id: RoomId, caller: &PlayerId) -> Result<(), RoomError> {
        let player = self.resolve(&room_id, caller)?;
        let room = self.get_room(&room_id).await?;

        let events = {
            let mut room = room.write().await;
            room.state.end_turn(&player)?;
            room.version += 1;
            room.state.take_events()
        };

        self.dispatch(&room_id, events).await;
        Ok(())
    }

    /// Snapshot for a viewer. Unknown or absent viewers see the operative
    /// (redacted) view; spymasters see hidden colors.
    pub async fn view(
        &self,
        room_id: RoomId,
        viewer: Option<&PlayerId>,
    ) -> Result<GameView, RoomError> {
        let room = self.get_room(&room_id).await?;
        let viewer_ref = viewer.and_then(|id| {
            let roster = self.directory.list_players(&room_id);
            find_player(&roster, id).ok()
        });

        let room = room.read().await;
        Ok(GameView::for_viewer(&room.state, viewer_ref.as_ref()))
    }

    /// Mutation count for a room (optimistic-refresh cursor for clients).
    pub async fn version(&self, room_id: RoomId) -> Result<u64, RoomError> {
        let room = self.get_room(&room_id).await?;
        let room = room.read().await;
        Ok(room.version)
    }

    /// Seed a room's board was dealt from.
    pub async fn board_seed(&self, room_id: RoomId) -> Result<u64, RoomError> {
        let room = self.get_room(&room_id).await?;
        let room = room.read().await;
        Ok(room.seed)
    }

    /// Number of rooms with a game record.
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }

    /// Drop finished games.
    pub async fn cleanup(&self) {
        let mut rooms = self.rooms.write().await;
        let mut to_remove = Vec::new();

        for (id, room) in rooms.iter() {
            if room.read().await.state.is_finished() {
                to_remove.push(*id);
            }
        }

        for id in to_remove {
            rooms.remove(&id);
            debug!(room = %id, "removed finished game");
        }
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Arc<RwLock<GameRoom>>, RoomError> {
        self.rooms
            .read()
            .await
            .get(room_id)
            .cloned()
            .ok_or(RoomError::RoomNotFound)
    }

    fn resolve(&self, room_id: &RoomId, caller: &PlayerId) -> Result<PlayerRef, RoomError> {
        let roster = self.directory.list_players(room_id);
        find_player(&roster, caller)
    }

    /// Log events and forward terminal outcomes to scoring. Runs outside
    /// the room's write guard; a full or closed channel drops the notice
    /// with a warning and never fails the committed transition.
    async fn dispatch(&self, room_id: &RoomId, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::GameFinished { winner, reason } => {
                    info!(room = %room_id, %winner, ?reason, "game finished");
                    let notice = FinishedNotice {
                        room_id: *room_id,
                        winner,
                        reason,
                        players: self.directory.list_players(room_id),
                        finished_at: Utc::now(),
                    };
                    if let Err(err) = self.finished_tx.try_send(notice) {
                        warn!(room = %room_id, %err, "dropping scoring notice");
                    }
                }
                event => debug!(room = %room_id, ?event, "game event"),
            }
        }
    }
}

fn find_player(roster: &[PlayerRef], caller: &PlayerId) -> Result<PlayerRef, RoomError> {
    roster
        .iter()
        .find(|p| &p.player_id == caller)
        .cloned()
        .ok_or(RoomError::Game(GameError::PlayerNotFound))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{CardColor, Team};
    use crate::game::state::{GamePhase, Role, TeamSlot};
    use crate::game::words::BuiltinWordBank;

    fn roster() -> Vec<PlayerRef> {
        vec![
            PlayerRef::new("red-sm", TeamSlot::Red, Some(Role::Spymaster)),
            PlayerRef::new("red-op", TeamSlot::Red, Some(Role::Operative)),
            PlayerRef::new("blue-sm", TeamSlot::Blue, Some(Role::Spymaster)),
            PlayerRef::new("blue-op", TeamSlot::Blue, Some(Role::Operative)),
        ]
    }

    struct Fixture {
        manager: RoomManager,
        directory: Arc<InMemoryDirectory>,
        room: RoomId,
        finished_rx: mpsc::Receiver<FinishedNotice>,
    }

    fn fixture() -> Fixture {
        let directory = Arc::new(InMemoryDirectory::new());
        let room = RoomId::new_random();
        directory.set_roster(room, roster());

        let (tx, finished_rx) = mpsc::channel(8);
        let manager = RoomManager::new(directory.clone(), Arc::new(BuiltinWordBank), tx);

        Fixture {
            manager,
            directory,
            room,
            finished_rx,
        }
    }

    /// Ids of the spymaster and operative of the team currently on turn.
    async fn on_turn(manager: &RoomManager, room: RoomId) -> (PlayerId, PlayerId) {
        let view = manager.view(room, None).await.unwrap();
        match view.current_turn {
            Team::Red => ("red-sm".into(), "red-op".into()),
            Team::Blue => ("blue-sm".into(), "blue-op".into()),
        }
    }

    #[tokio::test]
    async fn test_start_game() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 42)
            .await
            .unwrap();

        assert_eq!(f.manager.room_count().await, 1);
        assert_eq!(f.manager.version(f.room).await.unwrap(), 1);
        assert_eq!(f.manager.board_seed(f.room).await.unwrap(), 42);

        let view = f.manager.view(f.room, None).await.unwrap();
        assert_eq!(view.phase, GamePhase::AwaitingClue);
        assert_eq!(view.red_remaining + view.blue_remaining, 17);
    }

    #[tokio::test]
    async fn test_start_requires_membership_and_roster() {
        let f = fixture();

        let err = f
            .manager
            .start_game(f.room, &"stranger".into(), Language::En)
            .await
            .unwrap_err();
        assert_eq!(err, RoomError::Game(GameError::PlayerNotFound));

        // Drop blue down to one player
        let mut small = roster();
        small.pop();
        f.directory.set_roster(f.room, small);
        let err = f
            .manager
            .start_game(f.room, &"red-op".into(), Language::En)
            .await
            .unwrap_err();
        assert_eq!(err, RoomError::Game(GameError::InsufficientPlayers));
    }

    #[tokio::test]
    async fn test_cannot_start_over_running_game() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 1)
            .await
            .unwrap();

        let err = f
            .manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 2)
            .await
            .unwrap_err();
        assert_eq!(err, RoomError::GameInProgress);
    }

    #[tokio::test]
    async fn test_commands_on_unknown_room() {
        let f = fixture();
        let err = f
            .manager
            .give_clue(f.room, &"red-sm".into(), "clue", 1)
            .await
            .unwrap_err();
        assert_eq!(err, RoomError::RoomNotFound);
    }

    #[tokio::test]
    async fn test_invalid_wire_clue_number() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 3)
            .await
            .unwrap();

        let (sm, _) = on_turn(&f.manager, f.room).await;
        let err = f
            .manager
            .give_clue(f.room, &sm, "clue", 42)
            .await
            .unwrap_err();
        assert_eq!(err, RoomError::Game(GameError::InvalidClueNumber));
    }

    #[tokio::test]
    async fn test_view_redaction_per_role() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 5)
            .await
            .unwrap();

        let operative = f.manager.view(f.room, Some(&"red-op".into())).await.unwrap();
        assert!(operative.board.iter().all(|c| c.color.is_none()));

        let spymaster = f.manager.view(f.room, Some(&"red-sm".into())).await.unwrap();
        assert!(spymaster.board.iter().all(|c| c.color.is_some()));

        // Strangers get the redacted view rather than an error
        let stranger = f.manager.view(f.room, Some(&"stranger".into())).await.unwrap();
        assert!(stranger.board.iter().all(|c| c.color.is_none()));
    }

    #[tokio::test]
    async fn test_assassin_finishes_game_and_notifies_scoring() {
        let mut f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 7)
            .await
            .unwrap();

        let (sm, op) = on_turn(&f.manager, f.room).await;
        let spy_view = f.manager.view(f.room, Some(&sm)).await.unwrap();
        let guessing_team = spy_view.current_turn;
        let assassin = spy_view
            .board
            .iter()
            .position(|c| c.color == Some(CardColor::Assassin))
            .unwrap();

        f.manager.give_clue(f.room, &sm, "doom", 1).await.unwrap();
        f.manager.make_guess(f.room, &op, assassin).await.unwrap();

        let view = f.manager.view(f.room, None).await.unwrap();
        assert_eq!(view.phase, GamePhase::Finished);
        assert_eq!(view.winner.unwrap().team, guessing_team.opponent());

        let notice = f.finished_rx.recv().await.unwrap();
        assert_eq!(notice.room_id, f.room);
        assert_eq!(notice.winner, guessing_team.opponent());
        assert_eq!(notice.players.len(), 4);
    }

    #[tokio::test]
    async fn test_terminal_room_rejects_commands_and_can_restart() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 7)
            .await
            .unwrap();

        let (sm, op) = on_turn(&f.manager, f.room).await;
        let spy_view = f.manager.view(f.room, Some(&sm)).await.unwrap();
        let assassin = spy_view
            .board
            .iter()
            .position(|c| c.color == Some(CardColor::Assassin))
            .unwrap();
        f.manager.give_clue(f.room, &sm, "doom", 1).await.unwrap();
        f.manager.make_guess(f.room, &op, assassin).await.unwrap();

        let err = f.manager.end_turn(f.room, &op).await.unwrap_err();
        assert_eq!(err, RoomError::Game(GameError::GameOver));

        // A finished room may host a fresh game; the version keeps rising
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 8)
            .await
            .unwrap();
        assert!(f.manager.version(f.room).await.unwrap() > 1);
    }

    #[tokio::test]
    async fn test_concurrent_guesses_serialize() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 11)
            .await
            .unwrap();

        let (sm, op) = on_turn(&f.manager, f.room).await;
        f.manager.give_clue(f.room, &sm, "pair", 9).await.unwrap();

        // Target an own-color card so the surviving guess keeps the turn
        let spy_view = f.manager.view(f.room, Some(&sm)).await.unwrap();
        let team = spy_view.current_turn;
        let target = spy_view
            .board
            .iter()
            .position(|c| c.color == Some(CardColor::from(team)))
            .unwrap();

        let manager = Arc::new(f.manager);
        let a = {
            let manager = manager.clone();
            let op = op.clone();
            tokio::spawn(async move { manager.make_guess(f.room, &op, target).await })
        };
        let b = {
            let manager = manager.clone();
            let op = op.clone();
            tokio::spawn(async move { manager.make_guess(f.room, &op, target).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let ok = results.iter().filter(|r| r.is_ok()).count();
        let dup = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    Err(RoomError::Game(GameError::WordAlreadyRevealed { index })) if *index == target
                )
            })
            .count();

        // The write lock serializes the race: exactly one reveal applies
        assert_eq!(ok, 1);
        assert_eq!(dup, 1);
        assert_eq!(manager.version(f.room).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_cleanup_drops_finished_games() {
        let f = fixture();
        f.manager
            .start_game_seeded(f.room, &"red-op".into(), Language::En, 7)
            .await
            .unwrap();

        // Running games survive cleanup
        f.manager.cleanup().await;
        assert_eq!(f.manager.room_count().await, 1);

        let (sm, op) = on_turn(&f.manager, f.room).await;
        let spy_view = f.manager.view(f.room, Some(&sm)).await.unwrap();
        let assassin = spy_view
            .board
            .iter()
            .position(|c| c.color == Some(CardColor::Assassin))
            .unwrap();
        f.manager.give_clue(f.room, &sm, "doom", 1).await.unwrap();
        f.manager.make_guess(f.room, &op, assassin).await.unwrap();

        f.manager.cleanup().await;
        assert_eq!(f.manager.room_count().await, 0);
    }
}
