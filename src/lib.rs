//! Classic search and game-playing algorithms.
//!
//! Graph traversals (breadth-first, depth-first and greedy best-first) are exposed as
//! steppers that the caller drives one emission at a time. The games (Tic-Tac-Toe,
//! Connect Four and the Knight's Tour) each own their board state explicitly.

pub mod core;
pub mod error;
pub mod game;
pub mod graph;
pub mod player;
pub mod search;
