use std::fmt::Display;
use std::str::FromStr;

use crate::core::{Board, GameStatus, PlayerMark};
use crate::error::{Error, Result};

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
/// The middle column, tried first by searches
pub const CENTER: usize = 3;

type RawBoard = [[Option<PlayerMark>; ROWS]; COLUMNS];

/// Steps along the four line directions as (column, row) deltas
const LINES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A board is a 7x6 grid, where you can place a marker in one of the 7 columns
/// it lands on the top in that column we number the columns left to right and bottom to top
/// Since the board is a nested array the first index is the column and the second index is the row
///
/// [0][5]   [1][5]   [2][5]   [3][5]   [4][5]   [5][5]   [6][5]
/// [0][4]   [1][4]   [2][4]   [3][4]   [4][4]   [5][4]   [6][4]
/// [0][3]   [1][3]   [2][3]   [3][3]   [4][3]   [5][3]   [6][3]
/// [0][2]   [1][2]   [2][2]   [3][2]   [4][2]   [5][2]   [6][2]
/// [0][1]   [1][1]   [2][1]   [3][1]   [4][1]   [5][1]   [6][1]
/// [0][0]   [1][0]   [2][0]   [3][0]   [4][0]   [5][0]   [6][0]
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Default)]
pub struct C4Board {
    /// 7 columns, 6 rows. N.B. it is column major
    board: RawBoard,
    /// The game status must always be valid. I.e. you must always keep it up to date in all &mut self methods
    status: GameStatus,
}

impl Board for C4Board {
    type Coordinate = usize;

    fn valid_moves(&self) -> Vec<usize> {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, col)| col[ROWS - 1].is_none().then_some(i))
            .collect()
    }

    /// The center column first, the rest left to right
    fn ordered_moves(&self) -> Vec<usize> {
        let mut moves = self.valid_moves();
        if let Some(i) = moves.iter().position(|&c| c == CENTER) {
            moves.remove(i);
            moves.insert(0, CENTER);
        }
        moves
    }

    fn check_move(&self, column: usize) -> Result<()> {
        match self.board.get(column) {
            None => Err(Error::ColumnOutOfRange { column }),
            Some(col) if col[ROWS - 1].is_some() => Err(Error::ColumnFull { column }),
            Some(_) => Ok(()),
        }
    }

    fn game_status(&self) -> GameStatus {
        self.status
    }

    fn place_mark(&mut self, column: usize, marker: PlayerMark) {
        assert!(column < COLUMNS, "Column out of bounds");
        let Some(row) = self.board[column].iter().position(|x| x.is_none()) else {
            panic!("Column {column} is full");
        };
        self.board[column][row] = Some(marker);
        if Self::raw_four_through(&self.board, column, row) {
            self.status = GameStatus::Won(marker);
        } else if row == ROWS - 1 && self.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    fn clear_mark(&mut self, column: usize) {
        let Some(row) = self.board[column].iter().rposition(|x| x.is_some()) else {
            panic!("Column {column} is empty, nothing to clear");
        };
        self.board[column][row] = None;
        self.status = Self::raw_game_status(&self.board);
    }
}

impl C4Board {
    pub fn winner(&self) -> Option<PlayerMark> {
        match self.status {
            GameStatus::Won(m) => Some(m),
            _ => None,
        }
    }

    /// The marker in `column`, `row` counted from the bottom. None for empty or off-board cells.
    pub fn get(&self, column: usize, row: usize) -> Option<PlayerMark> {
        self.board.get(column).and_then(|col| col.get(row)).copied().flatten()
    }

    /// The row a piece dropped in `column` would land in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        self.board
            .get(column)
            .and_then(|col| col.iter().position(|x| x.is_none()))
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(|col| col[ROWS - 1].is_some())
    }

    pub fn n_moves_made(&self) -> usize {
        self.board.iter().flatten().filter(|x| x.is_some()).count()
    }

    fn raw_game_status(board: &RawBoard) -> GameStatus {
        match Self::raw_winner(board) {
            Some(m) => GameStatus::Won(m),
            None if board.iter().all(|col| col[ROWS - 1].is_some()) => GameStatus::Draw,
            None => GameStatus::Undecided,
        }
    }

    /// Compute if there is a winner from the board data alone
    pub fn raw_winner(board: &RawBoard) -> Option<PlayerMark> {
        (0..COLUMNS)
            .flat_map(|col| (0..ROWS).map(move |row| (col, row)))
            .find(|&(col, row)| Self::raw_four_through(board, col, row))
            .and_then(|(col, row)| board[col][row])
    }

    /// Does the marker at (col, row) sit on a line of four or more equal markers?
    fn raw_four_through(board: &RawBoard, col: usize, row: usize) -> bool {
        let Some(mark) = board[col][row] else {
            return false;
        };
        let same = |c: i32, r: i32| {
            (0..COLUMNS as i32).contains(&c)
                && (0..ROWS as i32).contains(&r)
                && board[c as usize][r as usize] == Some(mark)
        };
        LINES.iter().any(|&(dc, dr)| {
            let (c, r) = (col as i32, row as i32);
            let forward = (1..4).take_while(|&k| same(c + k * dc, r + k * dr)).count();
            let backward = (1..4).take_while(|&k| same(c - k * dc, r - k * dr)).count();
            forward + backward + 1 >= 4
        })
    }
}

impl FromStr for C4Board {
    type Err = Error;

    /// Six lines of seven characters, top row first: `x`, `o` or `.`.
    /// Blank lines around the grid and indentation are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if rows.len() != ROWS {
            return Err(Error::InvalidBoard(format!(
                "expected {ROWS} rows, got {}",
                rows.len()
            )));
        }
        let mut board: RawBoard = [[None; ROWS]; COLUMNS];
        for (i_row, row) in rows.iter().enumerate() {
            if row.chars().count() != COLUMNS {
                return Err(Error::InvalidBoard(format!(
                    "row {i_row} must have {COLUMNS} cells"
                )));
            }
            for (j_col, cell) in row.chars().enumerate() {
                board[j_col][ROWS - 1 - i_row] = match cell {
                    'x' => Some(PlayerMark::Cross),
                    'o' => Some(PlayerMark::Naught),
                    '.' => None,
                    _ => {
                        return Err(Error::InvalidBoard(format!(
                            "invalid character in ({i_row},{j_col}), must be 'x' or 'o' or '.'"
                        )))
                    }
                };
            }
        }
        for (j_col, col) in board.iter().enumerate() {
            let height = col.iter().take_while(|x| x.is_some()).count();
            if col[height..].iter().any(|x| x.is_some()) {
                return Err(Error::InvalidBoard(format!(
                    "column {j_col} has a floating piece"
                )));
            }
        }
        let crosses = board.iter().flatten().filter(|x| **x == Some(PlayerMark::Cross)).count();
        let naughts = board.iter().flatten().filter(|x| **x == Some(PlayerMark::Naught)).count();
        if crosses.abs_diff(naughts) > 1 {
            return Err(Error::InvalidBoard(format!(
                "{crosses} crosses and {naughts} naughts can not come from alternating play"
            )));
        }
        Ok(C4Board {
            board,
            status: Self::raw_game_status(&board),
        })
    }
}

impl Display for C4Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLUMNS {
                let cell = match self.board[col][row] {
                    Some(PlayerMark::Cross) => 'x',
                    Some(PlayerMark::Naught) => 'o',
                    None => '.',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_in_column() {
        let mut board = C4Board::default();
        board.place_mark(0, PlayerMark::Cross);
        board.place_mark(0, PlayerMark::Cross);
        board.place_mark(0, PlayerMark::Cross);
        assert_eq!(board.winner(), None);
        board.place_mark(0, PlayerMark::Cross);
        assert_eq!(board.winner(), Some(PlayerMark::Cross));
    }

    #[test]
    fn test_winner_in_row() {
        let mut board = C4Board::default();
        board.place_mark(0, PlayerMark::Cross);
        board.place_mark(1, PlayerMark::Cross);
        board.place_mark(3, PlayerMark::Cross);
        assert_eq!(board.winner(), None);
        // filling the gap completes the row from the middle
        board.place_mark(2, PlayerMark::Cross);
        assert_eq!(board.winner(), Some(PlayerMark::Cross));
        assert_eq!(C4Board::raw_winner(&board.board), Some(PlayerMark::Cross));
    }

    #[test]
    fn parse_board() {
        let board: C4Board = "
        .......
        .......
        ...x...
        ..xo...
        .xoo...
        xoox...
        "
        .parse()
        .unwrap();
        assert_eq!(board.get(0, 1), None);
        assert_eq!(board.get(0, 0), Some(PlayerMark::Cross));
        assert_eq!(board.get(1, 1), Some(PlayerMark::Cross));
        assert_eq!(board.get(2, 2), Some(PlayerMark::Cross));
        assert_eq!(board.get(3, 3), Some(PlayerMark::Cross));
        assert_eq!(board.get(4, 4), None);
        assert_eq!(board.game_status(), GameStatus::Won(PlayerMark::Cross));
    }

    #[test]
    fn test_winner_in_backslash_diagonal() {
        let board: C4Board = "
        .......
        .......
        .o.....
        .oo....
        .xxo...
        xoxxo.."
            .parse()
            .unwrap();
        assert_eq!(board.winner(), Some(PlayerMark::Naught));
        assert!(matches!(board.game_status(), GameStatus::Won(_)));
    }

    #[test]
    fn parser_rejects_floating_pieces() {
        let err = "
        .......
        .......
        .......
        ...x...
        .......
        ...o..."
            .parse::<C4Board>()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBoard("column 3 has a floating piece".into())
        );
    }

    #[test]
    fn center_column_is_tried_first() {
        let mut board = C4Board::default();
        assert_eq!(board.ordered_moves(), vec![3, 0, 1, 2, 4, 5, 6]);
        for _ in 0..3 {
            board.place_mark(CENTER, PlayerMark::Cross);
            board.place_mark(CENTER, PlayerMark::Naught);
        }
        assert_eq!(board.check_move(CENTER), Err(Error::ColumnFull { column: 3 }));
        assert_eq!(board.ordered_moves(), vec![0, 1, 2, 4, 5, 6]);
        assert_eq!(board.check_move(7), Err(Error::ColumnOutOfRange { column: 7 }));
    }

    #[test]
    fn clear_mark_restores_status() {
        let mut board: C4Board = "
        .......
        .......
        .......
        x......
        x......
        xooo..."
            .parse()
            .unwrap();
        let before = board;
        board.place_mark(0, PlayerMark::Cross);
        assert_eq!(board.winner(), Some(PlayerMark::Cross));
        board.clear_mark(0);
        assert_eq!(board, before);
        assert_eq!(board.landing_row(0), Some(3));
    }

    #[test]
    fn full_board_without_four_is_a_draw() {
        let board: C4Board = "
        xoxoxox
        oxoxoxo
        xoxoxox
        xoxoxox
        oxoxoxo
        oxoxoxo"
            .parse()
            .unwrap();
        assert!(board.is_full());
        assert_eq!(board.game_status(), GameStatus::Draw);
        assert!(board.valid_moves().is_empty());
    }
}
