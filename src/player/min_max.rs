use log::debug;

use crate::core::{Board, GameStatus, Player, PlayerMark};
use crate::error::{Error, Result};

/// Score of an immediate win. Every ply it takes to get there costs one point.
pub const WIN_SCORE: i32 = 10;

/// Exhaustive minimax.
///
/// Searches the whole game tree with no depth limit, so it is only practical for small
/// games such as Tic-Tac-Toe. The board is mutated and restored while searching.
pub struct MinMaxAi {
    my_marker: PlayerMark,
    /// A performance counter, the number of terminal positions scored
    n_leafs_evaluated: usize,
}

impl MinMaxAi {
    pub fn new(mark: PlayerMark) -> Self {
        Self {
            my_marker: mark,
            n_leafs_evaluated: 0,
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }

    /// The best move for `to_move` on `b`. The AI's own mark maximizes, the other mark minimizes.
    pub fn best_move<B: Board>(&mut self, b: &B, to_move: PlayerMark) -> Result<B::Coordinate> {
        if b.game_is_over() {
            return Err(Error::GameOver);
        }
        let mut node = b.clone();
        let (best, score) = self.minimax(&mut node, to_move, 0);
        debug!("minimax picked {:?} with score {}", best, score);
        best.ok_or(Error::GameOver)
    }

    /// It is good to win. It is bad to lose.
    /// If we can win, we want to win fast,
    /// If we must lose, we want to lose slowly
    fn terminal_score<B: Board>(&mut self, node: &B, depth: i32) -> Option<i32> {
        let score = match node.game_status() {
            GameStatus::Won(mark) if mark == self.my_marker.other() => -WIN_SCORE + depth,
            GameStatus::Won(_) => WIN_SCORE - depth,
            GameStatus::Draw => 0,
            GameStatus::Undecided => return None,
        };
        self.n_leafs_evaluated += 1;
        Some(score)
    }

    /// compute the score of a node by use of minimax, and the first move reaching it
    fn minimax<B: Board>(
        &mut self,
        node: &mut B,
        player: PlayerMark,
        depth: i32,
    ) -> (Option<B::Coordinate>, i32) {
        if let Some(score) = self.terminal_score(node, depth) {
            return (None, score);
        }
        let maximizing = player == self.my_marker;
        let mut best: Option<(B::Coordinate, i32)> = None;
        for addr in node.valid_moves() {
            node.place_mark(addr, player);
            let (_, score) = self.minimax(node, player.other(), depth + 1);
            node.clear_mark(addr);
            let better = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if better {
                best = Some((addr, score));
            }
        }
        match best {
            Some((addr, score)) => (Some(addr), score),
            None => (None, 0),
        }
    }
}

impl<B: Board> Player<B> for MinMaxAi {
    fn play(&mut self, b: &B) -> Result<B::Coordinate> {
        self.best_move(b, self.my_marker)
    }
}

impl Drop for MinMaxAi {
    fn drop(&mut self) {
        debug!("MinMaxAi evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}
