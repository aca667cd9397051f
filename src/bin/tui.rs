//! Console front end: play Tic-Tac-Toe or Connect Four against the AI, or watch a graph
//! traversal or a knight's tour unfold one step at a time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools as _;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use searchlab::{
    core::{Board, GameStatus, Player, PlayerMark},
    game::{
        connect_four::C4Board,
        knights_tour::{KnightsTour, Square},
        tictactoe::{TTTAddr, TTTBoard},
        GameSession,
    },
    graph::{Graph, GraphSnapshot, HeuristicTable, NodeId},
    player::{c4_heuristic, ABAi, ConsolePlayer, MinMaxAi},
    search::{BestFirst, Bfs, Dfs, SearchOutcome, Traversal},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mark {
    X,
    O,
}

impl From<Mark> for PlayerMark {
    fn from(m: Mark) -> Self {
        match m {
            Mark::X => PlayerMark::Cross,
            Mark::O => PlayerMark::Naught,
        }
    }
}

/// Search algorithms and game AIs for the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delay between printed trace steps, in milliseconds
    #[arg(long, default_value = "0", global = true)]
    pace_ms: u64,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "warn", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tic-Tac-Toe against a perfect minimax AI. You move first.
    Ttt {
        #[arg(long, default_value = "x")]
        human: Mark,
    },
    /// Connect Four against an alpha-beta AI. You move first.
    C4 {
        #[arg(long, default_value = "x")]
        human: Mark,
        /// Plies searched by the AI, including its own move
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
        depth: u64,
    },
    /// Breadth-first traversal of a graph read from JSON
    Bfs {
        graph: PathBuf,
        /// Start label, the first node when left out
        #[arg(long)]
        start: Option<String>,
    },
    /// Depth-first traversal of a graph read from JSON
    Dfs {
        graph: PathBuf,
        #[arg(long)]
        start: Option<String>,
    },
    /// Greedy best-first search using the heuristics stored with the graph
    BestFirst {
        graph: PathBuf,
        #[arg(long)]
        start: String,
        #[arg(long)]
        goal: String,
    },
    /// Knight's tour by Warnsdorff's rule
    Knight {
        #[arg(long, default_value = "0")]
        row: usize,
        #[arg(long, default_value = "0")]
        col: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("could not install the logger")?;
    let pace = Duration::from_millis(args.pace_ms);
    match args.command {
        Command::Ttt { human } => {
            let human = PlayerMark::from(human);
            let mut ai = MinMaxAi::new(human.other());
            play_session::<TTTBoard>(human, &mut ai, ttt_choice)
        }
        Command::C4 { human, depth } => {
            let human = PlayerMark::from(human);
            let mut ai = ABAi::new(human.other(), c4_heuristic, usize::try_from(depth)?);
            play_session::<C4Board>(human, &mut ai, c4_choice)
        }
        Command::Bfs { graph, start } => {
            let (graph, _) = load_graph(&graph)?;
            let start = start_node(&graph, start.as_deref())?;
            let mut bfs = Bfs::new(&graph, start)?;
            for step in bfs.by_ref() {
                println!(
                    "visit {:<4} queue [{}]",
                    graph.label(step.node),
                    labels(&graph, &step.queue)
                );
                std::thread::sleep(pace);
            }
            println!("order: {}", labels(&graph, bfs.visited()));
            Ok(())
        }
        Command::Dfs { graph, start } => {
            let (graph, _) = load_graph(&graph)?;
            let start = start_node(&graph, start.as_deref())?;
            let mut dfs = Dfs::new(&graph, start)?;
            for step in dfs.by_ref() {
                println!(
                    "visit {:<4} pushed [{}]",
                    graph.label(step.node),
                    labels(&graph, &step.pushed)
                );
                std::thread::sleep(pace);
            }
            println!("order: {}", labels(&graph, dfs.visited()));
            Ok(())
        }
        Command::BestFirst { graph, start, goal } => {
            let (graph, heuristics) = load_graph(&graph)?;
            let start = find_node(&graph, &start)?;
            let goal = find_node(&graph, &goal)?;
            let mut search = BestFirst::new(&graph, start, goal, &heuristics)?;
            for step in search.by_ref() {
                println!(
                    "visit {:<4} h = {:<6} frontier [{}]",
                    graph.label(step.node),
                    step.score,
                    labels(&graph, &step.frontier)
                );
                std::thread::sleep(pace);
            }
            match search.outcome() {
                SearchOutcome::GoalReached => println!("goal reached"),
                _ => println!("no path to the goal"),
            }
            println!("order: {}", labels(&graph, search.visited()));
            Ok(())
        }
        Command::Knight { row, col } => {
            let mut walk = KnightsTour::new(Square::new(row, col)?)?;
            for step in walk.by_ref() {
                let candidates = step
                    .candidates
                    .iter()
                    .map(|(sq, degree)| format!("{sq}:{degree}"))
                    .join(" ");
                println!("step {:>2} {}  [{}]", step.step, step.square, candidates);
                std::thread::sleep(pace);
            }
            print!("{}", walk.board());
            if walk.is_stalled() {
                println!("stalled after {} squares", walk.path().len());
            } else {
                println!("complete tour");
            }
            Ok(())
        }
    }
}

/// `choice` turns a move into the 1-based number the console player types for it.
fn play_session<B: Board>(
    human: PlayerMark,
    ai: &mut dyn Player<B>,
    choice: fn(B::Coordinate) -> usize,
) -> anyhow::Result<()>
where
    ConsolePlayer: Player<B>,
{
    let mut session = GameSession::<B>::new(human);
    let mut console = ConsolePlayer::new(human);
    while !session.board().game_is_over() {
        if session.to_move() == human {
            let a = console.play(session.board())?;
            session.human_move(a)?;
        } else {
            let a = session.ai_move(ai)?;
            println!("AI plays {}", choice(a));
        }
    }
    print!("{}", session.board());
    match session.status() {
        GameStatus::Won(mark) if mark == human => println!("You won!"),
        GameStatus::Won(_) => println!("The AI won"),
        _ => println!("Draw"),
    }
    info!("game over: {:?}", session.status());
    Ok(())
}

fn load_graph(path: &Path) -> anyhow::Result<(Graph, HeuristicTable)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let snapshot: GraphSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a graph file", path.display()))?;
    let graph = snapshot.to_graph()?;
    info!("loaded {} nodes from {}", graph.len(), path.display());
    Ok((graph, snapshot.heuristics))
}

fn start_node(graph: &Graph, start: Option<&str>) -> anyhow::Result<NodeId> {
    match start {
        Some(label) => find_node(graph, label),
        None => match graph.first_node() {
            Some(id) => Ok(id),
            None => bail!("the graph has no nodes"),
        },
    }
}

fn ttt_choice(a: TTTAddr) -> usize {
    a.0 + 1
}

fn c4_choice(column: usize) -> usize {
    column + 1
}

/// Look a label up as typed, then upper-cased, so `a` finds node `A`.
fn find_node(graph: &Graph, label: &str) -> anyhow::Result<NodeId> {
    Ok(graph
        .node(label)
        .or_else(|_| graph.node(&label.to_uppercase()))?)
}

fn labels(graph: &Graph, ids: &[NodeId]) -> String {
    ids.iter().map(|&id| graph.label(id)).join(", ")
}
