use log::debug;

use crate::core::{Board, GameStatus, Player, PlayerMark};
use crate::error::{Error, Result};

pub mod connect_four;
pub mod knights_tour;
pub mod tictactoe;

/// One game between a human and an AI.
///
/// The session owns its board; nothing about a game lives outside it. The human always
/// moves first, with whichever mark they picked.
pub struct GameSession<B: Board> {
    board: B,
    human: PlayerMark,
    to_move: PlayerMark,
    last_move: Option<B::Coordinate>,
}

impl<B: Board> GameSession<B> {
    pub fn new(human: PlayerMark) -> Self {
        Self {
            board: B::default(),
            human,
            to_move: human,
            last_move: None,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn human(&self) -> PlayerMark {
        self.human
    }

    pub fn ai(&self) -> PlayerMark {
        self.human.other()
    }

    pub fn to_move(&self) -> PlayerMark {
        self.to_move
    }

    pub fn last_move(&self) -> Option<B::Coordinate> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        self.board.game_status()
    }

    /// Apply a move for `mark`. Rejected when the game is over, when it is the other
    /// side's turn, or when the target can not take a marker.
    pub fn play(&mut self, mark: PlayerMark, a: B::Coordinate) -> Result<GameStatus> {
        if self.board.game_is_over() {
            return Err(Error::GameOver);
        }
        if mark != self.to_move {
            return Err(Error::NotYourTurn(mark.to_string()));
        }
        self.board.try_place_mark(a, mark)?;
        debug!("{} played {}", mark, a);
        self.last_move = Some(a);
        self.to_move = mark.other();
        Ok(self.status())
    }

    pub fn human_move(&mut self, a: B::Coordinate) -> Result<GameStatus> {
        self.play(self.human, a)
    }

    /// Let `ai` choose and play the AI side's move.
    pub fn ai_move(&mut self, ai: &mut dyn Player<B>) -> Result<B::Coordinate> {
        if self.board.game_is_over() {
            return Err(Error::GameOver);
        }
        if self.to_move != self.ai() {
            return Err(Error::NotYourTurn(self.ai().to_string()));
        }
        let a = ai.play(&self.board)?;
        self.play(self.ai(), a)?;
        Ok(a)
    }

    /// Start over with an empty board, keeping the chosen marks.
    pub fn reset(&mut self) {
        self.board = B::default();
        self.to_move = self.human;
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::connect_four::C4Board;
    use crate::game::tictactoe::{TTTAddr, TTTBoard};

    struct Fixed(Vec<usize>);

    impl Player<C4Board> for Fixed {
        fn play(&mut self, _b: &C4Board) -> Result<usize> {
            Ok(self.0.remove(0))
        }
    }

    #[test]
    fn turns_alternate_and_are_enforced() {
        let mut session = GameSession::<TTTBoard>::new(PlayerMark::Cross);
        assert_eq!(session.ai(), PlayerMark::Naught);
        assert_eq!(
            session.play(PlayerMark::Naught, TTTAddr(0)),
            Err(Error::NotYourTurn("O".into()))
        );
        session.human_move(TTTAddr(4)).unwrap();
        assert_eq!(session.to_move(), PlayerMark::Naught);
        assert_eq!(session.last_move(), Some(TTTAddr(4)));
        assert_eq!(
            session.human_move(TTTAddr(0)),
            Err(Error::NotYourTurn("X".into()))
        );
        assert_eq!(
            session.play(PlayerMark::Naught, TTTAddr(4)),
            Err(Error::CellOccupied { cell: 4 })
        );
    }

    #[test]
    fn finished_game_rejects_moves_until_reset() {
        let mut session = GameSession::<C4Board>::new(PlayerMark::Naught);
        let mut ai = Fixed(vec![6, 6, 6]);
        for _ in 0..3 {
            session.human_move(0).unwrap();
            session.ai_move(&mut ai).unwrap();
        }
        assert_eq!(
            session.human_move(0).unwrap(),
            GameStatus::Won(PlayerMark::Naught)
        );
        assert_eq!(session.ai_move(&mut ai), Err(Error::GameOver));
        assert_eq!(session.human_move(1), Err(Error::GameOver));

        session.reset();
        assert_eq!(session.status(), GameStatus::Undecided);
        assert_eq!(session.to_move(), PlayerMark::Naught);
        assert_eq!(session.last_move(), None);
    }
}
