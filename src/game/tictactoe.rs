use std::str::FromStr;

use crate::core::{Board, GameStatus, PlayerMark};
use crate::error::{Error, Result};

/// Represents a coordinate on the board
///
///  0 1 2
///  3 4 5
///  6 7 8
///
/// invariant: the number inside must be 0-8
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct TTTAddr(pub usize);

impl std::fmt::Display for TTTAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// The first member is the board entries from top left row wise to bottom right.
/// The second member is the victory counters. +1 for naughts. -1 for crosses.
/// Someone wins on a +3 or -3.
/// It holds 8 numbers: 3 rows (top to bottom), 3 columns (left to right) and two diagonals (first the one that points to southeast, and the the one to northeast)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Default)]
pub struct TTTBoard([Option<PlayerMark>; 9], [i32; 8]);

impl Board for TTTBoard {
    type Coordinate = TTTAddr;

    fn valid_moves(&self) -> Vec<TTTAddr> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.0
            .iter()
            .enumerate()
            .filter_map(|(num, &mark)| mark.is_none().then_some(TTTAddr(num)))
            .collect()
    }

    fn check_move(&self, a: TTTAddr) -> Result<()> {
        match self.0.get(a.0) {
            None => Err(Error::CellOutOfRange { cell: a.0 }),
            Some(Some(_)) => Err(Error::CellOccupied { cell: a.0 }),
            Some(None) => Ok(()),
        }
    }

    fn game_status(&self) -> GameStatus {
        let board_full = self.0.iter().all(|&q| q.is_some());
        if let Some(p) = self.winner() {
            GameStatus::Won(p)
        } else if board_full {
            GameStatus::Draw
        } else {
            GameStatus::Undecided
        }
    }

    fn place_mark(&mut self, a: TTTAddr, marker: PlayerMark) {
        assert!(a.0 < 9, "Bad input! Cell {a} is off the board");
        assert!(
            self.0[a.0].is_none(),
            "There is already a marker at {a}! Invalid move just played!"
        );
        self.count_lines(a.0, Self::delta(marker));
        self.0[a.0] = Some(marker);
    }

    fn clear_mark(&mut self, a: TTTAddr) {
        let Some(marker) = self.0[a.0].take() else {
            panic!("No marker at {a} to clear");
        };
        self.count_lines(a.0, -Self::delta(marker));
    }
}

impl TTTBoard {
    fn delta(marker: PlayerMark) -> i32 {
        match marker {
            PlayerMark::Naught => 1,
            PlayerMark::Cross => -1,
        }
    }

    fn count_lines(&mut self, num: usize, delta: i32) {
        let row = num / 3;
        let col = num % 3;
        self.1[row] += delta;
        self.1[3 + col] += delta;
        if row == col {
            self.1[6] += delta;
        }
        if row == 2 - col {
            self.1[7] += delta;
        }
    }

    fn lines_won(&self) -> (bool, bool) {
        let naught_won = self.1.iter().any(|&x| x == 3);
        let cross_won = self.1.iter().any(|&x| x == -3);
        (naught_won, cross_won)
    }

    /// Is there a winner?
    /// Boards are only built by alternating play or by the checked parser, so at most one side has a line.
    pub fn winner(&self) -> Option<PlayerMark> {
        match self.lines_won() {
            (true, _) => Some(PlayerMark::Naught),
            (false, true) => Some(PlayerMark::Cross),
            (false, false) => None,
        }
    }

    pub fn get(&self, a: TTTAddr) -> Option<PlayerMark> {
        self.0.get(a.0).copied().flatten()
    }
}

impl FromStr for TTTBoard {
    type Err = Error;

    /// Nine characters, row wise from the top left: `x`, `o`, and a space or `.` for empty cells
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 9 {
            return Err(Error::InvalidBoard(format!(
                "expected 9 cells, got {}",
                cells.len()
            )));
        }
        let mut b = Self::default();
        for (num, c) in cells.into_iter().enumerate() {
            match c {
                'x' | 'X' => b.place_mark(TTTAddr(num), PlayerMark::Cross),
                'o' | 'O' => b.place_mark(TTTAddr(num), PlayerMark::Naught),
                ' ' | '.' => {}
                _ => {
                    return Err(Error::InvalidBoard(format!(
                        "invalid character '{c}' at {num}, may only contain x, o, . or blank space"
                    )))
                }
            }
        }
        let crosses = b.0.iter().filter(|&&q| q == Some(PlayerMark::Cross)).count();
        let naughts = b.0.iter().filter(|&&q| q == Some(PlayerMark::Naught)).count();
        if crosses.abs_diff(naughts) > 1 {
            return Err(Error::InvalidBoard(format!(
                "{crosses} crosses and {naughts} naughts can not come from alternating play"
            )));
        }
        if b.lines_won() == (true, true) {
            return Err(Error::InvalidBoard("both sides have three in a row".into()));
        }
        Ok(b)
    }
}

impl std::fmt::Display for TTTBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m| match m {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in self.0.chunks(3) {
            write!(f, "| ")?;
            row.iter().try_for_each(|&mark| write!(f, "{} ", m(mark)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}
