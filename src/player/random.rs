use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::{Board, Player, PlayerMark};
use crate::error::{Error, Result};

/// Plays a uniformly random legal move. Seeded runs are reproducible.
pub struct RandomAi<R> {
    rng: R,
    pub name: String,
}

impl<R, B> Player<B> for RandomAi<R>
where
    R: Rng,
    B: Board,
{
    fn play(&mut self, b: &B) -> Result<B::Coordinate> {
        let moves = b.valid_moves();
        if moves.is_empty() {
            return Err(Error::GameOver);
        }
        let a = moves[self.rng.gen_range(0..moves.len())];
        debug!("Random AI `{}` plays {}", self.name, a);
        Ok(a)
    }
}

impl RandomAi<StdRng> {
    pub fn new(mark: PlayerMark, seed: Option<u64>) -> Self {
        Self {
            name: mark.to_string(),
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::connect_four::C4Board;
    use crate::game::tictactoe::TTTBoard;

    #[test]
    fn same_seed_same_moves() {
        let b = C4Board::default();
        let mut a = RandomAi::new(PlayerMark::Cross, Some(7));
        let mut c = RandomAi::new(PlayerMark::Cross, Some(7));
        for _ in 0..10 {
            assert_eq!(
                Player::<C4Board>::play(&mut a, &b).unwrap(),
                Player::<C4Board>::play(&mut c, &b).unwrap()
            );
        }
    }

    #[test]
    fn only_plays_free_cells() {
        let b: TTTBoard = "xo xo ox ".parse().unwrap();
        let mut ai = RandomAi::new(PlayerMark::Naught, Some(1));
        for _ in 0..20 {
            let a = ai.play(&b).unwrap();
            assert!(b.check_move(a).is_ok());
        }
    }

    #[test]
    fn no_moves_is_game_over() {
        let b: TTTBoard = "xxxoo    ".parse().unwrap();
        let mut ai = RandomAi::new(PlayerMark::Naught, None);
        assert_eq!(ai.play(&b), Err(Error::GameOver));
    }
}
