//! Error types for the crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition failures. Exhausting a search is not an error, see the individual
/// traversal outcomes for that.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("no node labelled '{0}' in the graph")]
    UnknownNode(String),

    #[error("node index {0} is not part of the graph")]
    NodeOutOfRange(usize),

    #[error("a node labelled '{0}' already exists")]
    DuplicateLabel(String),

    #[error("cannot connect node '{0}' to itself")]
    SelfLoop(String),

    #[error("cell {cell} is not on the board")]
    CellOutOfRange { cell: usize },

    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: usize },

    #[error("column {column} is not on the board")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("square ({row}, {col}) is not on the board")]
    OffBoard { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    #[error("invalid board string: {0}")]
    InvalidBoard(String),

    #[error("failed to read a move: {0}")]
    Input(String),
}
