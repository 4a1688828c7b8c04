//! Enumeration of every candidate winning run on a rectangular board.
//!
//! A window is `length` consecutive cells in one of four directions. One
//! routine covers square and rectangular boards alike: for each direction it
//! walks the start offsets that keep the whole window on the board.

use std::ops::Range;

use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    fn step(&self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Rows and columns where a window of `length` may start. Empty when the
    /// window does not fit.
    fn start_ranges(
        &self,
        rows: usize,
        cols: usize,
        length: usize,
    ) -> (Range<usize>, Range<usize>) {
        let row_starts = 0..(rows + 1).saturating_sub(length);
        let col_starts = 0..(cols + 1).saturating_sub(length);
        match self {
            Direction::Horizontal => (0..rows, col_starts),
            Direction::Vertical => (row_starts, 0..cols),
            Direction::Diagonal => (row_starts, col_starts),
            Direction::AntiDiagonal => (row_starts, length.saturating_sub(1)..cols),
        }
    }

    pub fn windows(self, rows: usize, cols: usize, length: usize) -> impl Iterator<Item = Window> {
        let (row_starts, col_starts) = if length == 0 {
            (0..0, 0..0)
        } else {
            self.start_ranges(rows, cols, length)
        };
        row_starts.flat_map(move |row| {
            col_starts.clone().map(move |col| Window {
                start: Position::new(row, col),
                direction: self,
                length,
            })
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: Position,
    pub direction: Direction,
    pub length: usize,
}

impl Window {
    /// Cells of the window in scan order, starting at `start`.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let (dr, dc) = self.direction.step();
        let start = self.start;
        (0..self.length).map(move |i| {
            Position::new(
                start.row + dr * i,
                start.col.wrapping_add_signed(dc * i as isize),
            )
        })
    }

    pub fn end(&self) -> Position {
        let (dr, dc) = self.direction.step();
        let last = self.length.saturating_sub(1);
        Position::new(
            self.start.row + dr * last,
            self.start.col.wrapping_add_signed(dc * last as isize),
        )
    }
}

/// All windows of `length` cells on a `rows` x `cols` board, grouped by
/// direction and row-major within each direction.
pub fn windows(rows: usize, cols: usize, length: usize) -> impl Iterator<Item = Window> {
    Direction::ALL
        .into_iter()
        .flat_map(move |direction| direction.windows(rows, cols, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(rows: usize, cols: usize, length: usize, direction: Direction) -> usize {
        direction.windows(rows, cols, length).count()
    }

    #[test]
    fn test_window_counts_on_three_by_four_win_three() {
        assert_eq!(count(3, 4, 3, Direction::Horizontal), 6);
        assert_eq!(count(3, 4, 3, Direction::Vertical), 4);
        assert_eq!(count(3, 4, 3, Direction::Diagonal), 2);
        assert_eq!(count(3, 4, 3, Direction::AntiDiagonal), 2);
        assert_eq!(windows(3, 4, 3).count(), 14);
    }

    #[test]
    fn test_window_counts_match_closed_form() {
        for rows in 1..7 {
            for cols in 1..7 {
                for length in 1..=rows.min(cols) {
                    let free_rows = rows - length + 1;
                    let free_cols = cols - length + 1;
                    let expected = rows * free_cols + free_rows * cols + 2 * free_rows * free_cols;
                    assert_eq!(
                        windows(rows, cols, length).count(),
                        expected,
                        "{}x{} k={}",
                        rows,
                        cols,
                        length
                    );
                }
            }
        }
    }

    #[test]
    fn test_classic_board_has_eight_lines() {
        assert_eq!(windows(3, 3, 3).count(), 8);
    }

    #[test]
    fn test_window_longer_than_board_yields_nothing() {
        assert_eq!(count(2, 5, 3, Direction::Vertical), 0);
        assert_eq!(count(2, 5, 3, Direction::Diagonal), 0);
        assert_eq!(count(2, 5, 3, Direction::AntiDiagonal), 0);
        assert_eq!(count(2, 5, 3, Direction::Horizontal), 6);
        assert_eq!(windows(3, 3, 0).count(), 0);
    }

    #[test]
    fn test_anti_diagonal_runs_top_right_to_bottom_left() {
        let first = Direction::AntiDiagonal.windows(3, 4, 3).next().unwrap();
        let cells: Vec<Position> = first.positions().collect();
        assert_eq!(
            cells,
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert_eq!(first.end(), Position::new(2, 0));
    }

    #[test]
    fn test_every_window_stays_on_board() {
        for window in windows(4, 6, 3) {
            let cells: Vec<Position> = window.positions().collect();
            assert_eq!(cells.len(), 3);
            assert!(cells.iter().all(|p| p.row < 4 && p.col < 6));
        }
    }
}
