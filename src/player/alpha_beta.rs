use log::debug;

use crate::core::{Board, HeuristicFn, Player, PlayerMark};
use crate::error::{Error, Result};

/// Depth-limited minimax with alpha-beta pruning.
///
/// Positions at the depth limit, and finished positions, are scored by the heuristic.
/// Children are searched on copies of the board, in the board's `ordered_moves` order.
pub struct ABAi<B> {
    my_marker: PlayerMark,
    /// A performance counter. If we prune well, this number is small
    n_leafs_evaluated: usize,
    heuristic_fn: HeuristicFn<B>,
    max_depth: usize,
}

impl<B: Board> ABAi<B> {
    /// `depth` counts plies including the move being chosen. A depth of 0 is treated as 1.
    pub fn new(mark: PlayerMark, heuristic_fn: HeuristicFn<B>, depth: usize) -> Self {
        ABAi {
            my_marker: mark,
            n_leafs_evaluated: 0,
            heuristic_fn,
            max_depth: depth.max(1),
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }

    /// The column (or cell) to play, with its backed up score
    pub fn best_move(&mut self, b: &B) -> Result<(B::Coordinate, f64)> {
        if b.game_is_over() {
            return Err(Error::GameOver);
        }
        let (best, score) =
            self.alphabeta(b, self.max_depth, f64::NEG_INFINITY, f64::INFINITY, true);
        debug!("alpha-beta picked {:?} with score {}", best, score);
        best.map(|a| (a, score)).ok_or(Error::GameOver)
    }

    fn heuristic(&mut self, b: &B) -> f64 {
        self.n_leafs_evaluated += 1;
        (self.heuristic_fn)(self.my_marker, b)
    }

    /// compute the score of a node by use of alpha-beta with pruning
    /// Assumes I want to maximize my score, and the opponent makes moves to minimize it.
    /// The first move reaching the best score is kept, later equal scores do not replace it.
    fn alphabeta(
        &mut self,
        node: &B,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        my_move: bool,
    ) -> (Option<B::Coordinate>, f64) {
        if depth == 0 || node.game_is_over() {
            return (None, self.heuristic(node));
        }
        let moves = node.ordered_moves();
        let mut best_move = moves.first().copied();
        let mut value = if my_move {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let marker = if my_move {
            self.my_marker
        } else {
            self.my_marker.other()
        };
        for addr in moves {
            let mut child = node.clone();
            child.place_mark(addr, marker);
            let (_, score) = self.alphabeta(&child, depth - 1, alpha, beta, !my_move);
            if my_move {
                // In this branch, the AI tries to find a move for itself that would maximize the score
                if score > value {
                    value = score;
                    best_move = Some(addr);
                }
                alpha = alpha.max(value);
            } else {
                // In this branch, the AI tries to find a move for the other player that would minimize the score
                if score < value {
                    value = score;
                    best_move = Some(addr);
                }
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }
        (best_move, value)
    }
}

impl<B: Board> Player<B> for ABAi<B> {
    fn play(&mut self, b: &B) -> Result<B::Coordinate> {
        self.best_move(b).map(|(a, _)| a)
    }
}

impl<B> Drop for ABAi<B> {
    fn drop(&mut self) {
        debug!("ABAi evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}
