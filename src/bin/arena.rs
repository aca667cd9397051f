//! Pits the game AIs against a random player and keeps score.
//! Every finished game is appended to a CSV file, which `report` summarises.

use std::io::Seek;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;

use searchlab::{
    core::{run_game, Board, GameEndStatus, GameType, Player, PlayerMark},
    game::{connect_four::C4Board, tictactoe::TTTBoard},
    player::{c4_heuristic, ABAi, MinMaxAi, RandomAi},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where game records are appended
    #[arg(short, long, default_value = "score.csv")]
    outfile: PathBuf,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a series of games, the AI alternating between moving first and second
    Run {
        #[arg(short, long)]
        game: GameType,

        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        /// Seed for the random player, drawn from entropy when left out
        #[arg(long)]
        seed: Option<u64>,

        /// Alpha-beta depth for Connect Four
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
        depth: u64,
    },
    /// Print win, draw and loss counts from the records
    Report {
        #[arg(short, long)]
        game: GameType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Outcome {
    AiWon,
    Draw,
    RandomWon,
}

#[derive(Serialize, Deserialize)]
struct GameRecord {
    game: GameType,
    ai_mark: PlayerMark,
    seed: u64,
    outcome: Outcome,
    played_at: chrono::DateTime<chrono::Local>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("could not install the logger")?;
    match args.command {
        Commands::Run {
            game,
            games,
            seed,
            depth,
        } => {
            let seed = seed.unwrap_or_else(|| StdRng::from_entropy().gen());
            info!("arena seed: {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            let depth = usize::try_from(depth)?;
            for i in 0..games {
                let ai_mark = if i % 2 == 0 {
                    PlayerMark::Naught
                } else {
                    PlayerMark::Cross
                };
                let game_seed: u64 = rng.gen();
                let outcome = match game {
                    GameType::Ttt => {
                        let mut ai = MinMaxAi::new(ai_mark);
                        play_against_random::<TTTBoard>(&mut ai, ai_mark, game_seed)?
                    }
                    GameType::C4 => {
                        let mut ai = ABAi::new(ai_mark, c4_heuristic, depth);
                        play_against_random::<C4Board>(&mut ai, ai_mark, game_seed)?
                    }
                };
                println!("game {}: AI as {} -> {:?}", i + 1, ai_mark, outcome);
                record_result(&args.outfile, game, ai_mark, game_seed, outcome)?;
            }
            Ok(())
        }
        Commands::Report { game } => print_out_report(&args.outfile, game),
    }
}

fn play_against_random<B: Board>(
    ai: &mut dyn Player<B>,
    ai_mark: PlayerMark,
    seed: u64,
) -> anyhow::Result<Outcome> {
    let mut random = RandomAi::new(ai_mark.other(), Some(seed));
    // Naughts move first
    let result = match ai_mark {
        PlayerMark::Naught => run_game(ai, &mut random)?,
        PlayerMark::Cross => run_game(&mut random, ai)?,
    };
    Ok(match result {
        GameEndStatus::Draw => Outcome::Draw,
        GameEndStatus::Won(mark) if mark == ai_mark => Outcome::AiWon,
        GameEndStatus::Won(_) => Outcome::RandomWon,
    })
}

fn print_out_report(outfile: &Path, game_to_report: GameType) -> anyhow::Result<()> {
    let file = std::fs::File::open(outfile)
        .with_context(|| format!("the report file {} does not exist", outfile.display()))?;
    // [ai as naught, ai as cross] x [won, draw, lost]
    let mut counts = [[0usize; 3]; 2];
    let mut rdr = csv::Reader::from_reader(file);
    for line in rdr.deserialize() {
        let GameRecord {
            game,
            ai_mark,
            outcome,
            ..
        } = line?;
        if game != game_to_report {
            continue;
        }
        let side = match ai_mark {
            PlayerMark::Naught => 0,
            PlayerMark::Cross => 1,
        };
        let column = match outcome {
            Outcome::AiWon => 0,
            Outcome::Draw => 1,
            Outcome::RandomWon => 2,
        };
        counts[side][column] += 1;
    }
    println!("{:<12}{:>6}{:>6}{:>6}", "AI plays", "won", "draw", "lost");
    for (side, mark) in [PlayerMark::Naught, PlayerMark::Cross].iter().enumerate() {
        let [won, draw, lost] = counts[side];
        println!("{:<12}{:>6}{:>6}{:>6}", mark.to_string(), won, draw, lost);
    }
    Ok(())
}

fn record_result(
    outfile: &Path,
    game: GameType,
    ai_mark: PlayerMark,
    seed: u64,
    outcome: Outcome,
) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(outfile)
        .with_context(|| format!("could not open {}", outfile.display()))?;
    let needs_headers = file.seek(std::io::SeekFrom::End(0))? == 0;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);
    wtr.serialize(GameRecord {
        game,
        ai_mark,
        seed,
        outcome,
        played_at: chrono::Local::now(),
    })?;
    wtr.flush()?;
    Ok(())
}
