use crate::{
    core::PlayerMark,
    game::connect_four::{C4Board, CENTER, COLUMNS, ROWS},
};

const CENTER_BONUS: f64 = 3.0;
const PAIR_BONUS: f64 = 10.0;
const TRIPLE_BONUS: f64 = 50.0;
const WIN_BONUS: f64 = 1000.0;

/// Run directions as (row, column) steps with row 0 at the top of the board:
/// right, down, down-right and down-left.
const RUN_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Static evaluation of a Connect Four position for `my_marker`.
///
/// Center column pieces are worth 3 each, every piece starting a run of two is worth 10
/// and every piece starting a run of three 50, all mirrored for the opponent. A finished
/// line of four adds or subtracts 1000 on top.
pub fn c4_heuristic(my_marker: PlayerMark, b: &C4Board) -> f64 {
    let them = my_marker.other();
    let center: f64 = (0..ROWS)
        .map(|row| match b.get(CENTER, row) {
            Some(m) if m == my_marker => CENTER_BONUS,
            Some(_) => -CENTER_BONUS,
            None => 0.0,
        })
        .sum();
    let runs = PAIR_BONUS * count_runs(b, my_marker, 2) as f64
        + TRIPLE_BONUS * count_runs(b, my_marker, 3) as f64
        - PAIR_BONUS * count_runs(b, them, 2) as f64
        - TRIPLE_BONUS * count_runs(b, them, 3) as f64;
    let win = match b.winner() {
        Some(m) if m == my_marker => WIN_BONUS,
        Some(_) => -WIN_BONUS,
        None => 0.0,
    };
    center + runs + win
}

/// Number of `mark` pieces from which at least `len` pieces of the same mark
/// continue in a straight line in one of the run directions.
fn count_runs(b: &C4Board, mark: PlayerMark, len: i32) -> usize {
    let at = |row: i32, col: i32| -> Option<PlayerMark> {
        if (0..ROWS as i32).contains(&row) && (0..COLUMNS as i32).contains(&col) {
            b.get(col as usize, ROWS - 1 - row as usize)
        } else {
            None
        }
    };
    let mut count = 0;
    for row in 0..ROWS as i32 {
        for col in 0..COLUMNS as i32 {
            if at(row, col) != Some(mark) {
                continue;
            }
            let starts_run = RUN_DIRECTIONS
                .iter()
                .any(|&(dr, dc)| (0..len).all(|i| at(row + i * dr, col + i * dc) == Some(mark)));
            if starts_run {
                count += 1;
            }
        }
    }
    count
}
