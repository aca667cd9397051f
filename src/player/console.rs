use std::io::BufRead;

use crate::{
    core::{Board, Player, PlayerMark},
    error::{Error, Result},
    game::{
        connect_four::{C4Board, COLUMNS},
        tictactoe::{TTTAddr, TTTBoard},
    },
};

/// A human at the terminal. Asks again until the input is a legal move.
pub struct ConsolePlayer {
    pub name: String,
}

impl ConsolePlayer {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer {
            name: mark.to_string(),
        }
    }

    /// Read 1-based numbers from stdin until `to_move` accepts one.
    fn ask<B: Board>(
        &self,
        b: &B,
        max: usize,
        to_move: impl Fn(usize) -> B::Coordinate,
    ) -> Result<B::Coordinate> {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Err(Error::Input(e.to_string())),
                None => return Err(Error::Input("stdin closed".into())),
            };
            match parse_choice(&line, max) {
                Ok(num) => {
                    let a = to_move(num - 1);
                    match b.check_move(a) {
                        Ok(()) => return Ok(a),
                        Err(e) => eprintln!("{e}, try again"),
                    }
                }
                Err(e) => eprintln!("{e}"),
            }
        }
    }
}

/// A number in 1..=max
fn parse_choice(line: &str, max: usize) -> Result<usize> {
    let num: usize = line
        .trim()
        .parse()
        .map_err(|_| Error::Input(format!("'{}' is not a number", line.trim())))?;
    if (1..=max).contains(&num) {
        Ok(num)
    } else {
        Err(Error::Input(format!("number not in range 1-{max}")))
    }
}

impl Player<TTTBoard> for ConsolePlayer {
    fn play(&mut self, b: &TTTBoard) -> Result<TTTAddr> {
        println!("Time for {} to make a move", self.name);
        print!("{}", b);
        println!("Input a number 1-9 to make a move 1 = top left, 9 = bottom right");
        self.ask(b, 9, TTTAddr)
    }
}

impl Player<C4Board> for ConsolePlayer {
    fn play(&mut self, b: &C4Board) -> Result<usize> {
        println!("Time for {} to make a move", self.name);
        print!("{}", b);
        println!("Input a number 1-{COLUMNS} to make a move 1 = leftmost, {COLUMNS} = rightmost");
        self.ask(b, COLUMNS, |column| column)
    }
}
