//! Computer-vs-computer self-play.
//!
//! Plays a batch of seeded games with the priority ladder in both seats and
//! prints wins plus the statistics panel summed over all games.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rust_ur::ai::TurnEnd;
use rust_ur::events::{dispatch, EventSink, GameLog, Statistics};
use rust_ur::{ComputerPlayer, Game, PlayerId, PlayerMap, PriorityLadder, UrConfig};

/// Self-play runner for the Royal Game of Ur.
#[derive(Parser, Debug)]
#[command(name = "ur-selfplay", version, about)]
struct Cli {
    /// Number of games to play.
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Seed of the first game; game N uses seed + N.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Give up on a game after this many turns.
    #[arg(long, default_value_t = 1_000)]
    max_turns: u32,

    /// Print the narration log of every game.
    #[arg(long)]
    narrate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    info!(games = cli.games, seed = cli.seed, "starting self-play");

    let computer = ComputerPlayer::new(PriorityLadder);
    let mut wins: PlayerMap<u32> = PlayerMap::with_default();
    let mut unfinished = 0u32;
    let mut totals = Statistics::new();

    for n in 0..cli.games {
        let config = UrConfig::default()
            .with_seed(cli.seed.wrapping_add(u64::from(n)))
            .computer_only();
        let mut game = Game::new(config);
        let mut log = GameLog::new();
        let mut stats = Statistics::new();

        while game.winner().is_none() && game.turn_number() <= cli.max_turns {
            let report = computer.play_turn(&mut game)?;
            if let TurnEnd::Passed(pass) = report.end {
                game.run_auto_pass(pass);
            }
            let events = game.drain_events();
            dispatch(&events, &mut [&mut log as &mut dyn EventSink, &mut stats]);
            if matches!(report.end, TurnEnd::NoChoice) {
                break;
            }
        }

        if cli.narrate {
            println!("=== Game {} ===", n + 1);
            println!("{}", log.text());
        }

        match game.winner() {
            Some(winner) => {
                wins[winner] += 1;
                info!(game = n + 1, %winner, turns = game.turn_number(), "game finished");
            }
            None => {
                unfinished += 1;
                warn!(game = n + 1, max_turns = cli.max_turns, "game did not finish");
            }
        }
        totals.accumulate(&stats);
    }

    println!("Games: {}", cli.games);
    for player in PlayerId::all() {
        println!("{player} wins: {}", wins[player]);
    }
    if unfinished > 0 {
        println!("Unfinished: {unfinished}");
    }
    println!();
    print!("{totals}");
    Ok(())
}
