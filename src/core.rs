//! The core abstractions for the two-player games
//!

use std::fmt::{Debug, Display};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerMark {
    Cross,
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerMark::Cross => write!(f, "X"),
            PlayerMark::Naught => write!(f, "O"),
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player<B: Board> {
    /// The play function is the main mechanic for the AIs
    /// You observe the whole board through a reference, and can do whatever you like, and then you return an action representing where to play
    fn play(&mut self, b: &B) -> Result<B::Coordinate>;
}

/// Static evaluation of a board from the point of view of the given mark
pub type HeuristicFn<B> = fn(PlayerMark, &B) -> f64;

pub trait Board: Display + Default + Clone {
    type Coordinate: Display + Debug + Copy + PartialEq;
    /// The coordinates where you are allowed to place your marker in this turn.
    fn valid_moves(&self) -> Vec<Self::Coordinate>;
    /// The valid moves in the order a search should try them.
    fn ordered_moves(&self) -> Vec<Self::Coordinate> {
        self.valid_moves()
    }
    /// Fails if `a` can not be played on this board, ignoring whose turn it is.
    fn check_move(&self, a: Self::Coordinate) -> Result<()>;
    /// Places a marker. The move must already be known to be valid; panics otherwise.
    fn place_mark(&mut self, a: Self::Coordinate, marker: PlayerMark);
    /// Undoes a `place_mark` on the same coordinate.
    fn clear_mark(&mut self, a: Self::Coordinate);
    fn game_status(&self) -> GameStatus;
    fn game_is_over(&self) -> bool {
        !matches!(self.game_status(), GameStatus::Undecided)
    }
    /// Checked variant of `place_mark`
    fn try_place_mark(&mut self, a: Self::Coordinate, marker: PlayerMark) -> Result<()> {
        if self.game_is_over() {
            return Err(Error::GameOver);
        }
        self.check_move(a)?;
        self.place_mark(a, marker);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Default)]
pub enum GameStatus {
    #[default]
    Undecided,
    Draw,
    Won(PlayerMark),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
pub enum GameType {
    /// Normal Tic-Tac-Toe
    Ttt,
    /// Connect Four
    C4,
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum GameEndStatus {
    Draw,
    Won(PlayerMark),
}

impl Display for GameEndStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEndStatus::Draw => write!(f, "draw"),
            GameEndStatus::Won(mark) => write!(f, "{mark} won"),
        }
    }
}

/// Plays a full game between two players. Naughts move first.
pub fn run_game<B: Board>(
    p1: &mut dyn Player<B>,
    p2: &mut dyn Player<B>,
) -> Result<GameEndStatus> {
    let mut current_player = PlayerMark::Naught;
    let mut board = B::default();
    while !board.game_is_over() {
        let action = match current_player {
            PlayerMark::Naught => p1.play(&board)?,
            PlayerMark::Cross => p2.play(&board)?,
        };
        board.try_place_mark(action, current_player)?;
        debug!("Player {} played {}\n{}", current_player, action, board);
        current_player = current_player.other();
    }
    let status = match board.game_status() {
        GameStatus::Draw => GameEndStatus::Draw,
        GameStatus::Won(p) => GameEndStatus::Won(p),
        GameStatus::Undecided => unreachable!(),
    };
    debug!("Game ended with {}", status);
    Ok(status)
}
