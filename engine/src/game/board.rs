use std::fmt;

use super::lines::{self, Window};
use super::types::{Mark, Position};

/// Rows x cols grid of marks plus the win length. The geometry is fixed for
/// the lifetime of the board; only cell contents change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Board {
    /// Callers guarantee `win_length <= rows` and `win_length <= cols`.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        debug_assert!(win_length <= rows && win_length <= cols);
        Self {
            cells: vec![vec![Mark::Empty; cols]; rows],
            rows,
            cols,
            win_length,
        }
    }

    #[cfg(test)]
    pub fn from_rows(win_length: usize, rows: &[&str]) -> Self {
        let cells: Vec<Vec<Mark>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::X,
                        'O' => Mark::O,
                        _ => Mark::Empty,
                    })
                    .collect()
            })
            .collect();
        let cols = cells.first().map_or(0, |row| row.len());
        Self {
            rows: cells.len(),
            cols,
            win_length,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.contains(pos) && self.is_empty_cell(pos)
    }

    /// Empty cells in row-major order. Search tie-breaks depend on this order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Mark::Empty);
        }
    }

    /// Every window of `win_length` cells in all four directions.
    pub fn windows(&self) -> impl Iterator<Item = Window> {
        lines::windows(self.rows, self.cols, self.win_length)
    }

    pub fn window_marks(&self, window: Window) -> impl Iterator<Item = Mark> + '_ {
        window.positions().map(move |pos| self.get(pos))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:>3}", row)?;
            for cell in cells {
                write!(f, "{:>3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
