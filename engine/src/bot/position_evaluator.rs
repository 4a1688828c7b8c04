use super::Score;
use super::line_evaluator::evaluate_line;
use crate::game::{Board, Mark};

/// Static score of the whole board: the sum of `evaluate_line` over every
/// horizontal, vertical and diagonal window of `win_length` cells.
pub fn evaluate_position(board: &Board, my_mark: Mark, opponent_mark: Mark) -> Score {
    board.windows().fold(0, |total: Score, window| {
        total.saturating_add(evaluate_line(
            board.window_marks(window),
            my_mark,
            opponent_mark,
        ))
    })
}
