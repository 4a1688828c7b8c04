use super::board::Board;
use super::lines::{Direction, Window};
use super::types::Mark;

/// True if `mark`, just placed at (`row`, `col`), now owns a full window.
pub fn has_won(board: &Board, mark: Mark, row: usize, col: usize) -> bool {
    find_winning_window(board, mark, row, col).is_some()
}

/// Returns the first complete window of `mark` among the windows checked
/// after a placement at (`row`, `col`).
///
/// Horizontal windows are limited to `row` and vertical ones to `col`.
/// Diagonal windows of both orientations are scanned across the whole board,
/// so a diagonal run elsewhere is reported even if the placement did not
/// create it. Keep that scan global: callers rely on it as a full recheck.
pub fn find_winning_window(board: &Board, mark: Mark, row: usize, col: usize) -> Option<Window> {
    if mark == Mark::Empty {
        return None;
    }

    board
        .windows()
        .filter(|window| match window.direction {
            Direction::Horizontal => window.start.row == row,
            Direction::Vertical => window.start.col == col,
            Direction::Diagonal | Direction::AntiDiagonal => true,
        })
        .find(|&window| board.window_marks(window).all(|cell| cell == mark))
}
