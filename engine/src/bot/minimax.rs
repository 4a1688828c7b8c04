use super::Score;
use super::position_evaluator::evaluate_position;
use crate::game::{Board, Mark, Position};

/// Plies searched per move: the engine's move and the opponent's reply.
pub const DEFAULT_SEARCH_DEPTH: usize = 2;

/// Fixed-depth minimax player. Holds only its seed assignment and depth; the
/// board is borrowed for the duration of each `select_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxBot {
    my_mark: Mark,
    opponent_mark: Mark,
    depth: usize,
}

impl Default for MinimaxBot {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxBot {
    /// Engine plays `O` against `X`.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_SEARCH_DEPTH)
    }

    /// A depth of 0 is raised to 1 so that a move is always chosen.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            my_mark: Mark::O,
            opponent_mark: Mark::X,
            depth: depth.max(1),
        }
    }

    /// Sets the engine's mark; the opponent always gets the other one.
    pub fn set_mark(&mut self, mark: Mark) -> Result<(), String> {
        let opponent_mark = mark
            .opponent()
            .ok_or_else(|| format!("Engine mark must be X or O, got {:?}", mark))?;
        self.play_as(mark, opponent_mark);
        Ok(())
    }

    /// Callers pass the two player marks, `X` and `O`, in either order.
    pub(crate) fn play_as(&mut self, my_mark: Mark, opponent_mark: Mark) {
        debug_assert_eq!(my_mark.opponent(), Some(opponent_mark));
        self.my_mark = my_mark;
        self.opponent_mark = opponent_mark;
    }

    pub fn my_mark(&self) -> Mark {
        self.my_mark
    }

    pub fn opponent_mark(&self) -> Mark {
        self.opponent_mark
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Picks the engine's next move, or `None` when the board is full.
    ///
    /// Cells are placed and cleared in place while searching; on return the
    /// board holds exactly what it held on entry. The chosen move is not
    /// applied.
    pub fn select_move(&self, board: &mut Board) -> Option<Position> {
        let (_, best_move) = self.search(board, self.depth, self.my_mark);
        best_move
    }

    /// Minimax over every empty cell in row-major order. The engine keeps the
    /// first strictly greater score, the opponent the first strictly lower one.
    fn search(&self, board: &mut Board, depth: usize, turn: Mark) -> (Score, Option<Position>) {
        let moves = board.available_moves();

        if moves.is_empty() || depth == 0 {
            return (evaluate_position(board, self.my_mark, self.opponent_mark), None);
        }

        let maximizing = turn == self.my_mark;
        let next_turn = if maximizing {
            self.opponent_mark
        } else {
            self.my_mark
        };

        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_move = None;

        for pos in moves {
            board.set(pos, turn);
            let (score, _) = self.search(board, depth - 1, next_turn);
            board.clear(pos);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improves {
                best_score = score;
                best_move = Some(pos);
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_playing(mark: Mark) -> MinimaxBot {
        let mut bot = MinimaxBot::new();
        bot.set_mark(mark).unwrap();
        bot
    }

    #[test]
    fn test_default_seed_assignment() {
        let bot = MinimaxBot::new();
        assert_eq!(bot.my_mark(), Mark::O);
        assert_eq!(bot.opponent_mark(), Mark::X);
        assert_eq!(bot.depth(), DEFAULT_SEARCH_DEPTH);
    }

    #[test]
    fn test_set_mark_flips_opponent() {
        let mut bot = MinimaxBot::new();
        bot.set_mark(Mark::X).unwrap();
        assert_eq!(bot.my_mark(), Mark::X);
        assert_eq!(bot.opponent_mark(), Mark::O);

        bot.set_mark(Mark::O).unwrap();
        assert_eq!(bot.my_mark(), Mark::O);
        assert_eq!(bot.opponent_mark(), Mark::X);
    }

    #[test]
    fn test_set_mark_rejects_empty() {
        let mut bot = MinimaxBot::new();
        assert!(bot.set_mark(Mark::Empty).is_err());
        assert_eq!(bot.my_mark(), Mark::O);
        assert_eq!(bot.opponent_mark(), Mark::X);
    }

    #[test]
    fn test_zero_depth_is_raised_to_one() {
        assert_eq!(MinimaxBot::with_depth(0).depth(), 1);
    }

    #[test]
    fn test_blocks_immediate_opponent_win() {
        let mut board = Board::from_rows(3, &["XX.", "...", "..."]);
        let bot = bot_playing(Mark::O);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(0, 2)));
        assert_eq!(bot.search(&mut board, 2, Mark::O).0, -21);
    }

    #[test]
    fn test_blocks_on_rectangular_board() {
        let mut board = Board::from_rows(3, &["XX..", ".O..", "...."]);
        let bot = bot_playing(Mark::O);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_completes_own_line() {
        let mut board = Board::from_rows(3, &["X.X", "OO.", "..X"]);
        let bot = bot_playing(Mark::O);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(1, 2)));
        assert_eq!(bot.search(&mut board, 2, Mark::O).0, 20);

        let mut board = Board::from_rows(3, &["X..", "OO.", ".X."]);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new(3, 3, 3);
            assert_eq!(bot_playing(mark).select_move(&mut board), Some(Position::new(1, 1)));
        }
    }

    #[test]
    fn test_last_empty_cell_is_chosen() {
        let mut board = Board::from_rows(3, &["XXO", "OOX", "X.O"]);
        let bot = bot_playing(Mark::O);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_rows(3, &["XOX", "XOO", "OXX"]);
        assert_eq!(MinimaxBot::new().select_move(&mut board), None);
    }

    #[test]
    fn test_board_is_restored_after_search() {
        let mut board = Board::from_rows(4, &["X...O", ".O...", "..X..", "....."]);
        let before = board.clone();
        let bot = MinimaxBot::with_depth(3);
        bot.select_move(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let mut board = Board::from_rows(3, &["X...", ".O..", "..X."]);
        let bot = bot_playing(Mark::O);
        let first = bot.select_move(&mut board);
        for _ in 0..5 {
            assert_eq!(bot.select_move(&mut board), first);
        }
    }

    #[test]
    fn test_ties_keep_first_move_in_row_major_order() {
        let mut board = Board::new(2, 2, 1);
        let bot = MinimaxBot::with_depth(1);
        assert_eq!(bot.select_move(&mut board), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_opponent_ties_keep_first_reply_in_row_major_order() {
        let bot = bot_playing(Mark::O);

        let mut board = Board::from_rows(3, &["O...", "....", "...."]);
        assert_eq!(bot.search(&mut board, 1, Mark::X), (-2, Some(Position::new(1, 1))));

        let mut board = Board::from_rows(3, &["...", ".O.", "..."]);
        assert_eq!(bot.search(&mut board, 1, Mark::X), (1, Some(Position::new(0, 0))));
    }

    #[test]
    fn test_leaf_is_static_evaluation() {
        let mut board = Board::from_rows(3, &["...", ".O.", "..."]);
        let bot = bot_playing(Mark::O);
        assert_eq!(bot.search(&mut board, 0, Mark::O), (4, None));
    }
}
