//! Everything that can choose a move: the search AIs, a random baseline and a human at the console.

pub mod alpha_beta;
pub mod console;
mod heuristics;
pub mod min_max;
pub mod random;

pub use alpha_beta::ABAi;
pub use console::ConsolePlayer;
pub use heuristics::c4_heuristic;
pub use min_max::MinMaxAi;
pub use random::RandomAi;
