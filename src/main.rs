//! Codewords Game Server
//!
//! Runs a scripted demo match through the room manager to exercise the
//! full command path, including score awarding.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use codewords::game::{CardColor, Language, Role, TeamSlot};
use codewords::room::{run_score_worker, InMemoryDirectory, LoggingScoreSink, RoomId, RoomManager};
use codewords::{PlayerId, PlayerRef, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Codewords Server v{}", VERSION);

    demo_match().await
}

/// Plays one full game with scripted spymasters who only ever point at
/// their own cards, three at a time. The starting team wins by exhausting
/// its cards first.
async fn demo_match() -> anyhow::Result<()> {
    info!("=== Starting Demo Match ===");

    let directory = Arc::new(InMemoryDirectory::new());
    let room = RoomId::new_random();
    directory.set_roster(
        room,
        vec![
            PlayerRef::new("alice", TeamSlot::Red, Some(Role::Spymaster)),
            PlayerRef::new("bob", TeamSlot::Red, Some(Role::Operative)),
            PlayerRef::new("carol", TeamSlot::Blue, Some(Role::Spymaster)),
            PlayerRef::new("dave", TeamSlot::Blue, Some(Role::Operative)),
        ],
    );

    let (finished_tx, finished_rx) = tokio::sync::mpsc::channel(16);
    let score_worker = tokio::spawn(run_score_worker(finished_rx, Arc::new(LoggingScoreSink)));

    let manager = RoomManager::new(directory, Arc::new(codewords::game::BuiltinWordBank), finished_tx);

    let seed = 12345u64;
    let starter: PlayerId = "alice".into();
    manager
        .start_game_seeded(room, &starter, Language::En, seed)
        .await?;

    info!("Room: {}", room);
    info!("Board Seed: {}", seed);

    let mut turns = 0u32;
    loop {
        let public = manager.view(room, None).await?;
        if let Some(winner) = public.winner {
            info!("=== Match Results ===");
            info!("Winner: {} ({:?})", winner.team, winner.reason);
            info!("Turns played: {}", turns);
            info!("Clues given: {}", public.clue_history.len());
            println!("{}", serde_json::to_string_pretty(&public)?);
            break;
        }
        turns += 1;

        let team = public.current_turn;
        let (spymaster, operative): (PlayerId, PlayerId) = match team {
            codewords::Team::Red => ("alice".into(), "bob".into()),
            codewords::Team::Blue => ("carol".into(), "dave".into()),
        };

        // The spymaster sees every color and picks up to three own cards
        let secret = manager.view(room, Some(&spymaster)).await?;
        let targets: Vec<usize> = secret
            .board
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.revealed && c.color == Some(CardColor::from(team)))
            .map(|(i, _)| i)
            .take(3)
            .collect();

        let clue_word = format!("signal-{}", turns);
        manager
            .give_clue(room, &spymaster, &clue_word, targets.len() as i64)
            .await?;
        info!("{} clue: {} {}", team, clue_word.to_uppercase(), targets.len());

        for index in &targets {
            let view = manager.view(room, None).await?;
            if view.winner.is_some() || view.current_turn != team {
                break;
            }
            manager.make_guess(room, &operative, *index).await?;
            info!("{} guessed card {}", operative, index);
        }

        // Bank the bonus guess instead of risking it
        let view = manager.view(room, None).await?;
        if view.winner.is_none() && view.current_turn == team {
            manager.end_turn(room, &operative).await?;
        }
    }

    // Closing the channel lets the score worker drain and exit
    drop(manager);
    score_worker.await?;

    Ok(())
}
