//! The computer opponent: a window-based heuristic and a fixed-depth
//! minimax search over it.

mod line_evaluator;
mod minimax;
mod position_evaluator;

pub use line_evaluator::{
    OPPONENT_LINE_FACTOR, OPPONENT_LINE_START, OWN_LINE_FACTOR, OWN_LINE_START, evaluate_line,
};
pub use minimax::{DEFAULT_SEARCH_DEPTH, MinimaxBot};
pub use position_evaluator::evaluate_position;

/// Heuristic score. Positive favours the engine, negative its opponent; only
/// comparisons between positions are meaningful.
pub type Score = i64;
