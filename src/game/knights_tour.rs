//! Knight's tour by Warnsdorff's rule: always jump to the square with the fewest onward jumps.
//!
//! The walk is greedy and never backtracks, so it may stall before covering the board.
//! A stalled tour is a normal outcome.

use std::fmt::Display;

use log::debug;

use crate::error::{Error, Result};

pub const BOARD_SIZE: usize = 8;
pub const N_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight knight jumps as (row, column) offsets, in the order candidates are generated.
/// Ties between equally constrained squares go to the earlier jump.
pub const KNIGHT_MOVES: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(Error::OffBoard { row, col })
        }
    }

    /// The square reached by jumping `(dr, dc)`, if it is on the board
    pub fn offset(self, (dr, dc): (i32, i32)) -> Option<Square> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let range = 0..BOARD_SIZE as i32;
        (range.contains(&row) && range.contains(&col)).then_some(Square {
            row: row as usize,
            col: col as usize,
        })
    }

    pub fn is_knight_move_from(self, other: Square) -> bool {
        KNIGHT_MOVES.iter().any(|&d| other.offset(d) == Some(self))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Each square holds the 1-based step at which the knight landed there, or None if unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KnightBoard([[Option<u8>; BOARD_SIZE]; BOARD_SIZE]);

impl KnightBoard {
    pub fn step_at(&self, sq: Square) -> Option<u8> {
        self.0[sq.row][sq.col]
    }

    pub fn is_visited(&self, sq: Square) -> bool {
        self.step_at(sq).is_some()
    }

    fn visit(&mut self, sq: Square, step: u8) {
        self.0[sq.row][sq.col] = Some(step);
    }

    /// Unvisited squares one knight jump away from `sq`, in jump order
    pub fn open_moves(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        KNIGHT_MOVES
            .iter()
            .filter_map(move |&d| sq.offset(d))
            .filter(|&next| !self.is_visited(next))
    }

    pub fn n_visited(&self) -> usize {
        self.0.iter().flatten().filter(|s| s.is_some()).count()
    }
}

impl Display for KnightBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.0.iter() {
            for cell in row.iter() {
                match cell {
                    Some(step) => write!(f, "{:>3}", step)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStep {
    pub square: Square,
    /// 1-based
    pub step: usize,
    /// Every square that was considered with its onward degree. Empty for the start square.
    pub candidates: Vec<(Square, usize)>,
}

/// Warnsdorff walk, one jump per `next()`. The first item is the start square itself.
pub struct KnightsTour {
    start: Square,
    board: KnightBoard,
    path: Vec<Square>,
    stalled: bool,
}

impl KnightsTour {
    pub fn new(start: Square) -> Result<Self> {
        Square::new(start.row, start.col)?;
        Ok(KnightsTour {
            start,
            board: KnightBoard::default(),
            path: Vec::with_capacity(N_SQUARES),
            stalled: false,
        })
    }

    pub fn restart(&mut self) {
        self.board = KnightBoard::default();
        self.path.clear();
        self.stalled = false;
    }

    pub fn board(&self) -> &KnightBoard {
        &self.board
    }

    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// True once the knight has no unvisited square to jump to before covering the board
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    pub fn into_tour(self) -> Tour {
        Tour {
            path: self.path,
            board: self.board,
        }
    }

    fn land(&mut self, sq: Square) -> usize {
        let step = self.path.len() + 1;
        // at most 64 steps
        self.board.visit(sq, step as u8);
        self.path.push(sq);
        step
    }
}

impl Iterator for KnightsTour {
    type Item = TourStep;

    fn next(&mut self) -> Option<TourStep> {
        let Some(&here) = self.path.last() else {
            let step = self.land(self.start);
            return Some(TourStep {
                square: self.start,
                step,
                candidates: Vec::new(),
            });
        };
        if self.stalled || self.path.len() == N_SQUARES {
            return None;
        }
        let candidates: Vec<(Square, usize)> = self
            .board
            .open_moves(here)
            .map(|sq| (sq, self.board.open_moves(sq).count()))
            .collect();
        // min_by_key keeps the first of equal minima
        let Some(&(square, _)) = candidates.iter().min_by_key(|(_, degree)| *degree) else {
            debug!("knight stalled at {} after {} squares", here, self.path.len());
            self.stalled = true;
            return None;
        };
        let step = self.land(square);
        debug!("knight step {} to {}", step, square);
        Some(TourStep {
            square,
            step,
            candidates,
        })
    }
}

/// A finished (complete or stalled) tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub path: Vec<Square>,
    pub board: KnightBoard,
}

impl Tour {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.path.len() == N_SQUARES
    }
}

/// Walk the whole tour from `start`.
pub fn tour(start: Square) -> Result<Tour> {
    let mut walk = KnightsTour::new(start)?;
    walk.by_ref().for_each(drop);
    Ok(walk.into_tour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_the_start_square() {
        let mut walk = KnightsTour::new(Square { row: 0, col: 0 }).unwrap();
        let first = walk.next().unwrap();
        assert_eq!(first.square, Square { row: 0, col: 0 });
        assert_eq!(first.step, 1);
        assert!(first.candidates.is_empty());
    }

    #[test]
    fn picks_the_most_constrained_candidate() {
        let mut walk = KnightsTour::new(Square { row: 0, col: 0 }).unwrap();
        walk.next();
        let second = walk.next().unwrap();
        // from the corner: (2, 1) has 5 onward jumps, (1, 2) as well, so the first wins
        assert_eq!(
            second.candidates,
            vec![(Square { row: 2, col: 1 }, 5), (Square { row: 1, col: 2 }, 5)]
        );
        assert_eq!(second.square, Square { row: 2, col: 1 });
        assert_eq!(walk.board().step_at(second.square), Some(2));
    }

    #[test]
    fn offsets_stay_on_the_board() {
        let corner = Square { row: 7, col: 7 };
        let reachable: Vec<_> = KNIGHT_MOVES.iter().filter_map(|&d| corner.offset(d)).collect();
        assert_eq!(
            reachable,
            vec![Square { row: 5, col: 6 }, Square { row: 6, col: 5 }]
        );
        assert!(Square { row: 5, col: 6 }.is_knight_move_from(corner));
        assert!(!Square { row: 6, col: 6 }.is_knight_move_from(corner));
    }

    #[test]
    fn off_board_start_is_rejected() {
        assert_eq!(
            tour(Square { row: 8, col: 0 }).unwrap_err(),
            Error::OffBoard { row: 8, col: 0 }
        );
        assert_eq!(
            Square::new(usize::MAX, 3).unwrap_err(),
            Error::OffBoard {
                row: usize::MAX,
                col: 3
            }
        );
    }

    #[test]
    fn restart_repeats_the_walk() {
        let mut walk = KnightsTour::new(Square { row: 3, col: 4 }).unwrap();
        let first: Vec<_> = walk.by_ref().map(|s| s.square).collect();
        walk.restart();
        let second: Vec<_> = walk.by_ref().map(|s| s.square).collect();
        assert_eq!(first, second);
        assert_eq!(walk.path(), first.as_slice());
    }
}
